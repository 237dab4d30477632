//! 钥匙串会话存储
//!
//! 会话序列化为 JSON 后保存在系统钥匙串：
//! - Windows: Credential Manager
//! - macOS: Keychain
//! - Linux: Secret Service
//!
//! 条目为 service `mailguard-tui`、user `token`。

use async_trait::async_trait;
use keyring::Entry;
use mailguard_core::traits::SESSION_KEY;
use mailguard_core::types::Session;
use mailguard_core::{CoreError, CoreResult, SessionStore};

use super::config_service::APP_DIR_NAME;

/// 基于系统钥匙串的会话存储
pub struct KeyringSessionStore;

impl KeyringSessionStore {
    fn entry() -> CoreResult<Entry> {
        Entry::new(APP_DIR_NAME, SESSION_KEY)
            .map_err(|e| CoreError::StorageError(format!("Failed to open keyring entry: {e}")))
    }
}

#[async_trait]
impl SessionStore for KeyringSessionStore {
    async fn load(&self) -> CoreResult<Option<Session>> {
        let json = match Self::entry()?.get_password() {
            Ok(json) => json,
            Err(keyring::Error::NoEntry) => return Ok(None),
            Err(e) => return Err(CoreError::StorageError(format!("Failed to load: {e}"))),
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| CoreError::SerializationError(format!("Failed to deserialize: {e}")))
    }

    async fn save(&self, session: &Session) -> CoreResult<()> {
        let json = serde_json::to_string(session)
            .map_err(|e| CoreError::SerializationError(format!("Failed to serialize: {e}")))?;

        Self::entry()?
            .set_password(&json)
            .map_err(|e| CoreError::StorageError(format!("Failed to save: {e}")))
    }

    async fn clear(&self) -> CoreResult<()> {
        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(CoreError::StorageError(format!("Failed to clear: {e}"))),
        }
    }
}
