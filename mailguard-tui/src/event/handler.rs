//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件，最长等待 `timeout`
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端大小变化由下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，避免 Windows 终端上的重复按键
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.dashboard.is_modal_open() {
        return handle_form_keys(key);
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::LOGOUT.matches(&key) {
        return AppMessage::Logout;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if !app.is_typing() && DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 批量添加 / 编辑表单
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NEWLINE.matches(&key) {
        return AppMessage::Modal(ModalMessage::Newline);
    }
    let msg = match key.code {
        KeyCode::Esc => ModalMessage::Close,
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Backspace => ModalMessage::Backspace,
        KeyCode::Char(c) if is_plain(key.modifiers) => ModalMessage::Input(c),
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

/// 删除确认 / 帮助
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => ModalMessage::Close,
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => ModalMessage::ToggleFocus,
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => NavigationMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => NavigationMessage::SelectNext,
        KeyCode::Home => NavigationMessage::SelectFirst,
        KeyCode::End => NavigationMessage::SelectLast,
        KeyCode::Enter => NavigationMessage::Confirm,
        _ => return AppMessage::Noop,
    };
    AppMessage::Navigation(msg)
}

fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    let msg = match app.current_page {
        Page::Dashboard(_) if app.tables.editing_search => search_keys(key),
        Page::Dashboard(_) => table_keys(key),
        Page::Validator => text_keys(key),
        Page::Login => match key.code {
            KeyCode::Up | KeyCode::Down => Some(ContentMessage::NextField),
            _ => text_keys(key),
        },
    };
    msg.map_or(AppMessage::Noop, AppMessage::Content)
}

fn table_keys(key: KeyEvent) -> Option<ContentMessage> {
    let actions = [
        (DefaultKeymap::SEARCH, ContentMessage::StartSearch),
        (DefaultKeymap::ACTION_ADD, ContentMessage::Add),
        (DefaultKeymap::ACTION_EDIT, ContentMessage::Edit),
        (DefaultKeymap::ACTION_DELETE, ContentMessage::Delete),
        (DefaultKeymap::ACTION_BLACKLIST, ContentMessage::Blacklist),
        (DefaultKeymap::ACTION_EXPORT, ContentMessage::Export),
    ];
    if let Some((_, msg)) = actions.into_iter().find(|(binding, _)| binding.matches(&key)) {
        return Some(msg);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(ContentMessage::SelectNext),
        KeyCode::Left => Some(ContentMessage::PreviousPage),
        KeyCode::Right => Some(ContentMessage::NextPage),
        KeyCode::Home => Some(ContentMessage::FirstPage),
        KeyCode::End => Some(ContentMessage::LastPage),
        _ => None,
    }
}

fn search_keys(key: KeyEvent) -> Option<ContentMessage> {
    match key.code {
        KeyCode::Esc => Some(ContentMessage::Cancel),
        _ => text_keys(key),
    }
}

/// 单行文本输入
fn text_keys(key: KeyEvent) -> Option<ContentMessage> {
    match key.code {
        KeyCode::Enter => Some(ContentMessage::Submit),
        KeyCode::Backspace => Some(ContentMessage::Backspace),
        KeyCode::Char(c) if is_plain(key.modifiers) => Some(ContentMessage::Input(c)),
        _ => None,
    }
}

/// 无修饰或仅 Shift（大写字母 / 符号）
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}
