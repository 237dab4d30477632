//! 弹窗更新逻辑
//!
//! 批量添加 / 编辑表单优先：它由 core 的 `Dashboard` 持有，打开时
//! 界面自己的弹窗不会同时出现。

use crate::message::ModalMessage;
use crate::model::{App, Command, DeleteFocus, Modal};

use super::{notify_error, session_or_redirect};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    if app.dashboard.is_modal_open() {
        update_form(app, msg);
    } else {
        update_dialog(app, msg);
    }
}

fn update_form(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.dashboard.close_modal(),
        ModalMessage::Confirm => submit_form(app),
        ModalMessage::Input(c) => {
            if let Some(modal) = app.dashboard.modal_mut() {
                modal.insert_char(c);
            }
        }
        ModalMessage::Newline => {
            if let Some(modal) = app.dashboard.modal_mut() {
                modal.insert_newline();
            }
        }
        ModalMessage::Backspace => {
            if let Some(modal) = app.dashboard.modal_mut() {
                modal.backspace();
            }
        }
        ModalMessage::ToggleFocus => {}
    }
}

/// 提交表单：表单立即关闭，请求在后台执行
fn submit_form(app: &mut App) {
    let mutation = match app.dashboard.submit_modal() {
        Ok(mutation) => mutation,
        Err(e) => {
            e.log("submit form");
            notify_error(app, e.to_string());
            return;
        }
    };
    if let Some(session) = session_or_redirect(app) {
        log::info!("submitting {:?} mutation", mutation.kind());
        app.pending.push(Command::Mutate { session, mutation });
    }
}

fn update_dialog(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => app.modal.close(),

        ModalMessage::ToggleFocus => {
            if let Some(Modal::ConfirmDelete { focus, .. }) = &mut app.modal.active {
                *focus = match focus {
                    DeleteFocus::Cancel => DeleteFocus::Delete,
                    DeleteFocus::Delete => DeleteFocus::Cancel,
                };
            }
        }

        ModalMessage::Confirm => match app.modal.active.take() {
            Some(Modal::ConfirmDelete {
                ticket,
                focus: DeleteFocus::Delete,
                ..
            }) => {
                if let Some(session) = session_or_redirect(app) {
                    app.pending.push(Command::Delete { session, ticket });
                }
            }
            Some(Modal::ConfirmDelete { .. } | Modal::Help) | None => {}
        },

        ModalMessage::Input(_) | ModalMessage::Newline | ModalMessage::Backspace => {}
    }
}
