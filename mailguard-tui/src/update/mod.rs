//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!     mod navigation;     // 侧边导航
//!     mod content;        // 表格、校验页、登录页
//!     mod modal;          // 批量表单、删除确认、帮助
//!     mod backend;        // 后台任务结果
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 副作用
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     update() 从不等待 I/O。需要访问后端时：
//!
//!         1. 从 core 状态机取得 FetchTicket / DeleteTicket / Mutation
//!         2. 调用 app.auth.guard() 取得 Session（失败则转到登录页）
//!         3. 包装为 Command 压入 app.pending
//!
//!     主循环随后把 Command 交给 Dispatcher，结果以 BackendMessage 回到这里。

mod backend;
mod content;
mod modal;
mod navigation;

use std::time::Instant;

use mailguard_core::services::{FetchTicket, View};
use mailguard_core::types::{Notification, Session};

use crate::message::AppMessage;
use crate::model::{App, Command, FocusPanel, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() && !app.dashboard.is_modal_open() {
                app.focus = app.focus.toggle();
                app.tables.editing_search = false;
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),
        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::Refresh => {
            if app.current_page.view().is_some() {
                let ticket = app.active_table_mut().refresh();
                push_fetch(app, ticket);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Logout => {
            if app.auth.user.is_some() || app.auth.token.is_some() {
                log::info!("logging out");
                app.auth.clear();
                open_page(app, Page::Validator);
                app.pending.push(Command::Logout);
            }
        }

        AppMessage::Tick => {
            app.toasts.prune(Instant::now());
            if app.auth.guard().is_err() {
                app.tables.discard_refresh();
                return;
            }
            for ticket in app.tables.poll_refresh() {
                push_fetch(app, ticket);
            }
        }

        AppMessage::Noop => {}
    }
}

/// 切换页面；Dashboard 视图先经过守卫
pub(crate) fn open_page(app: &mut App, page: Page) {
    app.tables.editing_search = false;
    match page {
        Page::Dashboard(view) => enter_view(app, view),
        other => {
            app.current_page = other;
            app.navigation.follow(other);
        }
    }
}

/// 进入管理视图并发起首次拉取
fn enter_view(app: &mut App, view: View) {
    if app.auth.guard().is_err() {
        redirect_to_login(app, Some(view));
        return;
    }
    app.dashboard.select_view(view);
    app.current_page = Page::Dashboard(view);
    app.navigation.follow(app.current_page);
    let ticket = app.active_table_mut().refresh();
    push_fetch(app, ticket);
}

fn redirect_to_login(app: &mut App, redirect: Option<View>) {
    log::debug!("guard rejected, redirecting to login (target {redirect:?})");
    app.login.redirect = redirect;
    app.current_page = Page::Login;
    app.focus = FocusPanel::Content;
}

/// 守卫通过时返回会话，否则转到登录页
pub(crate) fn session_or_redirect(app: &mut App) -> Option<Session> {
    match app.auth.guard() {
        Ok(session) => Some(session),
        Err(rejection) => {
            log::warn!("request blocked: {rejection}");
            let target = app.current_page.view();
            redirect_to_login(app, target);
            None
        }
    }
}

pub(crate) fn push_fetch(app: &mut App, ticket: FetchTicket) {
    if let Some(session) = session_or_redirect(app) {
        app.pending.push(Command::Fetch { session, ticket });
    }
}

pub(crate) fn notify_error(app: &mut App, message: impl Into<String>) {
    app.notify(Notification::error(message));
}

/// 登录成功后的落点
pub(crate) fn after_login(app: &mut App) {
    let target = app.login.redirect.take().unwrap_or_default();
    app.login.reset();
    enter_view(app, target);
}
