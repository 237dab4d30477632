//! 业务逻辑服务层
//!
//! 状态机（`ResourceTable` / `Dashboard` / `BulkModal`）不做任何 I/O，
//! 由前端驱动；`*Service` 负责调用 [`AdminApi`] 并把结果喂回状态机。

mod auth_service;
mod bulk_modal;
mod dashboard;
mod dashboard_service;
mod export;
mod refresh;
mod resource_table;
mod table_service;
mod validator_service;

pub use auth_service::AuthService;
pub use bulk_modal::{split_bulk_input, BulkModal, ModalMode};
pub use dashboard::{Dashboard, EditTarget, Mutation, View};
pub use dashboard_service::DashboardService;
pub use export::{export_file_name, export_to_dir, write_csv, EXPORT_HEADER};
pub use refresh::{RefreshRequest, RefreshSignal, RefreshSubscription};
pub use resource_table::{DeleteOutcome, DeleteTicket, FetchTicket, ResourceTable, TablePhase};
pub use table_service::TableService;
pub use validator_service::{check_email_shape, ValidatorService};

use std::sync::Arc;

use crate::traits::{AdminApi, SessionStore};

/// 服务上下文 - 持有所有依赖
///
/// 前端需要创建此上下文，并注入具体的 API 客户端与会话存储实现。
pub struct ServiceContext {
    /// 管理后台 API
    pub api: Arc<dyn AdminApi>,
    /// 会话持久化
    pub session_store: Arc<dyn SessionStore>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn AdminApi>, session_store: Arc<dyn SessionStore>) -> Self {
        Self { api, session_store }
    }
}
