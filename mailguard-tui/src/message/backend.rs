//! 后台任务结果
//!
//! 每个 [`Command`](crate::model::Command) 对应一条结果消息。
//! 错误原样携带 `CoreError`，由 Update 层决定如何展示。

use std::path::PathBuf;

use mailguard_core::services::{DeleteTicket, FetchTicket};
use mailguard_core::types::{ListPage, Notification, ResourceRow, Session, ValidationReport};
use mailguard_core::CoreResult;

#[derive(Debug, Clone)]
pub enum BackendMessage {
    Fetched {
        ticket: FetchTicket,
        result: CoreResult<ListPage<ResourceRow>>,
    },
    Deleted {
        ticket: DeleteTicket,
        result: CoreResult<()>,
    },
    /// 表单变更 / 拉黑的结果提示；成功时刷新信号已经触发
    Mutated(Notification),
    Exported(CoreResult<PathBuf>),
    Validated(CoreResult<ValidationReport>),
    LoggedIn(CoreResult<Session>),
    SessionRestored(CoreResult<Option<Session>>),
    LoggedOut(CoreResult<()>),
}
