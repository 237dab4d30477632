//! 会话文件存储
//!
//! 会话以 `{"token": {...}}` 的形式保存在配置目录的 `session.json` 中，
//! 实现 mailguard-core 的 SessionStore trait。

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use mailguard_core::traits::SESSION_KEY;
use mailguard_core::types::Session;
use mailguard_core::{CoreError, CoreResult, SessionStore};
use tokio::fs;
use tokio::sync::Mutex;

use super::config_service::config_dir;

/// 基于 JSON 文件的会话存储
pub struct JsonSessionStore {
    path: PathBuf,
    /// 内存缓存；`None` 表示尚未读取文件
    cache: Mutex<Option<Option<Session>>>,
}

impl JsonSessionStore {
    pub fn new() -> Self {
        Self::with_path(config_dir().join("session.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    async fn read_file(&self) -> CoreResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        let mut entries: HashMap<String, Session> = serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        Ok(entries.remove(SESSION_KEY))
    }

    async fn write_file(&self, session: Option<&Session>) -> CoreResult<()> {
        let Some(session) = session else {
            if self.path.exists() {
                fs::remove_file(&self.path)
                    .await
                    .map_err(|e| CoreError::StorageError(e.to_string()))?;
            }
            return Ok(());
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let entries = HashMap::from([(SESSION_KEY, session)]);
        let content = serde_json::to_string_pretty(&entries)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

impl Default for JsonSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for JsonSessionStore {
    async fn load(&self) -> CoreResult<Option<Session>> {
        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.as_ref() {
            return Ok(cached.clone());
        }

        let session = self.read_file().await?;
        *cache = Some(session.clone());
        Ok(session)
    }

    async fn save(&self, session: &Session) -> CoreResult<()> {
        let mut cache = self.cache.lock().await;
        self.write_file(Some(session)).await?;
        *cache = Some(Some(session.clone()));
        log::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        let mut cache = self.cache.lock().await;
        self.write_file(None).await?;
        *cache = Some(None);
        Ok(())
    }
}
