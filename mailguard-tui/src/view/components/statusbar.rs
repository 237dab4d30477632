//! 底部状态栏组件：快捷键提示 + 最新通知

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use mailguard_core::services::View;
use mailguard_core::types::NotificationLevel;

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::statusbar()), area);

    if let Some(toast) = app.toasts.latest() {
        let c = colors();
        let (icon, fg) = match toast.notification.level {
            NotificationLevel::Success => ("✓", c.success),
            NotificationLevel::Error => ("✗", c.error),
        };
        let line = Line::from(Span::styled(
            format!(" {icon} {} ", toast.notification.message),
            Style::default()
                .bg(Color::Black)
                .fg(fg)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
    }
}

/// 根据当前状态生成快捷键提示
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;

    if app.dashboard.is_modal_open() {
        let mut hints = vec![("Enter", h.submit), ("Esc", h.cancel)];
        if app.dashboard.modal().is_some_and(|m| m.is_multiline()) {
            hints.push(("Alt+Enter", h.newline));
        }
        return hints;
    }
    if app.modal.is_open() {
        return vec![("←→", h.select), ("Enter", h.submit), ("Esc", h.cancel)];
    }

    let mut hints = vec![("Tab", h.switch_panel)];
    if app.focus.is_navigation() {
        hints.push(("↑↓", h.select));
        hints.push(("Enter", h.open));
    } else {
        match app.current_page {
            Page::Dashboard(_) if app.tables.editing_search => {
                hints.push(("Enter", h.search));
                hints.push(("Esc", h.cancel));
            }
            Page::Dashboard(view) => {
                hints.push(("↑↓", h.select));
                hints.push(("←→", h.page));
                hints.push(("/", h.search));
                if view == View::ValidEmails {
                    hints.push(("Alt+b", h.blacklist));
                    hints.push(("Alt+x", h.export));
                } else {
                    hints.push(("Alt+a", h.add));
                    hints.push(("Alt+e", h.edit));
                    hints.push(("Alt+d", h.delete));
                }
                hints.push(("Alt+r", h.refresh));
            }
            Page::Validator => hints.push(("Enter", h.validate)),
            Page::Login => {
                hints.push(("↑↓", h.next_field));
                hints.push(("Enter", h.submit));
            }
        }
    }

    hints.push(("Alt+h", h.help));
    if app.auth.is_authenticated() {
        hints.push(("Alt+l", h.logout));
    }
    if !app.is_typing() {
        hints.push(("q", h.quit));
    }
    hints
}
