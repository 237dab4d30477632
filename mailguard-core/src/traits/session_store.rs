//! 会话持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Session;

/// 会话在持久化存储中的固定键名
pub const SESSION_KEY: &str = "token";

/// 会话存储 Trait
///
/// 平台实现:
/// - TUI: `JsonSessionStore` (配置目录下的 JSON 文件)
/// - TUI: `KeyringSessionStore` (系统钥匙串)
///
/// token 只在登录 / 登出时写入或清除，从不刷新。
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 读取持久化的会话
    ///
    /// # Returns
    /// * `Ok(Some(session))` - 存在会话
    /// * `Ok(None)` - 从未登录或已登出
    async fn load(&self) -> CoreResult<Option<Session>>;

    /// 保存会话
    async fn save(&self, session: &Session) -> CoreResult<()>;

    /// 清除会话
    async fn clear(&self) -> CoreResult<()>;
}
