//! src/message/mod.rs
//! Message 层：Event → Update 之间的桥梁
//!
//! 所有用户操作与后台结果都以 Message 表达，Update 层据此修改 Model。
//!
//!     mod app;            // AppMessage 主消息
//!     mod navigation;     // 侧边导航子消息
//!     mod content;        // 内容面板子消息（表格、校验页、登录页）
//!     mod modal;          // 弹窗子消息（表单、删除确认、帮助）
//!     mod backend;        // 后台任务回传的结果
//!
//! 用户输入的消息由 event/handler.rs 生成；
//! BackendMessage 由 backend/dispatcher.rs 派生的 tokio 任务经 mpsc 通道送回，
//! 主循环用 `try_recv` 取出后包装为 `AppMessage::Backend` 交给 Update 层。

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
