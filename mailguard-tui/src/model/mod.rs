//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 是应用状态的唯一真相来源，只被 Update 层修改，被 View 层读取。
//!
//!     mod app;            // 主应用状态 App
//!     mod command;        // Update 层产出的副作用 Command
//!     mod focus;          // 焦点（Navigation / Content）
//!     mod navigation;     // 侧边导航
//!     mod page;           // 页面路由
//!     pub mod state;      // 各页面数据
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、页面与守卫
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Page::Validator                 公开校验页（默认）
//!     Page::Login                     登录页
//!     Page::Dashboard(View)           三个管理视图
//!
//!     进入 Dashboard 页面前先调用 app.auth.guard()：
//!         Ok(session)  → 切换页面，并立即为该视图的表格发起首次拉取
//!         Err(_)       → 记下目标视图，转到登录页；登录成功后再跳回
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、业务状态机
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     app.dashboard      core::Dashboard        视图 / 表单 / 编辑目标 / 刷新信号
//!     app.tables         三个 core::ResourceTable，各自订阅 dashboard 的刷新信号
//!
//!     状态机只产出 ticket / Mutation，不做 I/O。
//!     Update 层把它们连同守卫签发的 Session 包装为 Command 放入 app.pending。
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、提示
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     app.toasts 保存最近的通知，状态栏显示最新一条，4 秒后过期。

mod app;
mod command;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use command::Command;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::{view_label, Page};
pub use state::{
    DeleteFocus, LoginField, LoginState, Modal, ModalState, TablesState, ToastState,
    ValidatorState, ValidatorStatus,
};
