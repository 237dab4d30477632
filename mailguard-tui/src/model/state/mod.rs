//! 页面状态模块
//!
//! 表格与表单的业务状态机来自 mailguard-core，这里只保存界面侧的附加状态。

mod login;
mod modal;
mod tables;
mod toast;
mod validator;

pub use login::{LoginField, LoginState};
pub use modal::{DeleteFocus, Modal, ModalState};
pub use tables::TablesState;
pub use toast::ToastState;
pub use validator::{ValidatorState, ValidatorStatus};
