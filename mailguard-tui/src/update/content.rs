//! 内容面板更新逻辑
//!
//! 同一条消息按当前页面分发：表格、校验页、登录页。

use mailguard_core::services::{FetchTicket, View};
use mailguard_core::types::ResourceKind;

use crate::message::ContentMessage;
use crate::model::{App, Command, Page, ValidatorStatus};

use super::{push_fetch, session_or_redirect};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Dashboard(view) => update_table(app, view, msg),
        Page::Validator => update_validator(app, msg),
        Page::Login => update_login(app, msg),
    }
}

// ========== 资源表 ==========

fn update_table(app: &mut App, view: View, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.active_table_mut().select_previous(),
        ContentMessage::SelectNext => app.active_table_mut().select_next(),

        ContentMessage::PreviousPage => {
            let ticket = app.active_table_mut().previous_page();
            fetch_if_some(app, ticket);
        }
        ContentMessage::NextPage => {
            let ticket = app.active_table_mut().next_page();
            fetch_if_some(app, ticket);
        }
        ContentMessage::FirstPage => {
            let ticket = app.active_table_mut().first_page();
            fetch_if_some(app, ticket);
        }
        ContentMessage::LastPage => {
            let ticket = app.active_table_mut().last_page();
            fetch_if_some(app, ticket);
        }

        // ========== 搜索框 ==========
        ContentMessage::StartSearch => {
            app.tables.editing_search = true;
        }
        ContentMessage::Input(c) => {
            let mut term = app.active_table().search_term().to_string();
            term.push(c);
            app.active_table_mut().set_search_term(term);
        }
        ContentMessage::Backspace => {
            let mut term = app.active_table().search_term().to_string();
            term.pop();
            app.active_table_mut().set_search_term(term);
        }
        ContentMessage::Submit => {
            app.tables.editing_search = false;
            let term = app.active_table().search_term().trim().to_string();
            let ticket = app.active_table_mut().search(term);
            push_fetch(app, ticket);
        }
        ContentMessage::Cancel => {
            app.tables.editing_search = false;
            let ticket = app.active_table_mut().search("");
            push_fetch(app, ticket);
        }

        // ========== 操作 ==========
        ContentMessage::Add => {
            if !app.dashboard.open_add() {
                log::debug!("{view:?} is read-only, add ignored");
            }
        }
        ContentMessage::Edit => {
            if let Some(row) = app.active_table().selected_row().cloned() {
                app.dashboard.open_edit(&row);
            }
        }
        ContentMessage::Delete => {
            let table = app.active_table();
            if let (Some(ticket), Some(row)) = (table.delete_selected(), table.selected_row()) {
                let value = row.value.clone();
                app.modal.show_confirm_delete(ticket, value);
            }
        }
        ContentMessage::Blacklist => {
            if view.kind() != ResourceKind::ValidEmails {
                return;
            }
            let Some(row) = app.active_table().selected_row().cloned() else {
                return;
            };
            if let Some(session) = session_or_redirect(app) {
                app.pending.push(Command::Blacklist { session, row });
            }
        }
        ContentMessage::Export => {
            if view.kind() == ResourceKind::ValidEmails {
                let rows = app.active_table().items().to_vec();
                app.pending.push(Command::Export(rows));
            }
        }

        ContentMessage::NextField => {}
    }
}

fn fetch_if_some(app: &mut App, ticket: Option<FetchTicket>) {
    if let Some(ticket) = ticket {
        push_fetch(app, ticket);
    }
}

// ========== 校验页 ==========

fn update_validator(app: &mut App, msg: ContentMessage) {
    let state = &mut app.validator;
    match msg {
        ContentMessage::Input(c) => state.input.push(c),
        ContentMessage::Backspace => {
            state.input.pop();
        }
        ContentMessage::Submit => {
            let email = state.input.trim().to_string();
            if email.is_empty() || state.is_pending() {
                return;
            }
            state.status = ValidatorStatus::Pending;
            app.pending.push(Command::Validate(email));
        }
        _ => {}
    }
}

// ========== 登录页 ==========

fn update_login(app: &mut App, msg: ContentMessage) {
    let login = &mut app.login;
    match msg {
        ContentMessage::Input(c) => {
            login.focused_input().push(c);
            login.error = None;
        }
        ContentMessage::Backspace => {
            login.focused_input().pop();
        }
        ContentMessage::NextField => login.next_field(),
        ContentMessage::Submit => {
            if login.pending {
                return;
            }
            login.pending = true;
            login.error = None;
            app.pending.push(Command::Login {
                email: login.email.trim().to_string(),
                password: login.password.clone(),
            });
        }
        _ => {}
    }
}
