//! 弹窗状态
//!
//! 批量添加 / 编辑表单由 core 的 `Dashboard` 持有；
//! 这里只管理界面自己的弹窗：删除确认与帮助。

use mailguard_core::services::DeleteTicket;

/// 删除确认弹窗中的按钮焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteFocus {
    #[default]
    Cancel,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    ConfirmDelete {
        ticket: DeleteTicket,
        /// 被删除的域名 / 邮箱，仅用于展示
        value: String,
        focus: DeleteFocus,
    },
    Help,
}

#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_confirm_delete(&mut self, ticket: DeleteTicket, value: impl Into<String>) {
        self.active = Some(Modal::ConfirmDelete {
            ticket,
            value: value.into(),
            focus: DeleteFocus::default(),
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
