//! 外部依赖抽象 Trait 定义

mod admin_api;
mod session_store;

pub use admin_api::AdminApi;
pub use session_store::{SessionStore, SESSION_KEY};
