//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，通过 mailguard-core 访问管理后台 API。
//!
//!     mod config_service;         // 配置文件（JSON）
//!     mod core_service;           // 核心服务入口，组装 ServiceContext
//!     mod session_repository;     // 会话存储（JSON 文件）
//!     mod keyring_store;          // 会话存储（系统钥匙串）
//!     mod dispatcher;             // Command → tokio 任务 → BackendMessage
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在表单中按 Enter
//!         ↓
//!     Update 层：dashboard.submit_modal() 得到 Mutation，
//!               auth.guard() 得到 Session，压入 Command::Mutate
//!         ↓
//!     主循环把 app.pending 交给 Dispatcher
//!         ↓
//!     Dispatcher 派生任务：DashboardService::apply
//!         ↓                       └─ 成功时触发 RefreshSignal
//!     BackendMessage::Mutated 经 mpsc 回到主循环
//!         ↓
//!     Update 层显示提示；下一次 Tick 时对应表格从刷新信号取到请求并重新拉取
//!

mod config_service;
mod core_service;
mod dispatcher;
mod keyring_store;
mod session_repository;

pub use config_service::{AppConfig, ConfigService, LocalConfigService, APP_DIR_NAME};
pub use core_service::CoreService;
pub use dispatcher::Dispatcher;
