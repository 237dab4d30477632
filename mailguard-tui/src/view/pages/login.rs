//! 管理员登录页

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{view_label, App, LoginField};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().login;
    let c = colors();
    let login = &app.login;

    let field = |label: &str, value: String, focused: bool| {
        let label_style = if focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };
        let mut value_spans = vec![Span::raw(format!("    {value}"))];
        if focused {
            value_spans.push(Span::styled("▎", Style::default().fg(c.highlight)));
        }
        [
            Line::styled(format!("  {label}"), label_style),
            Line::from(value_spans),
            Line::raw(""),
        ]
    };

    let mut lines = vec![Line::raw("")];
    if let Some(view) = login.redirect {
        lines.push(Line::styled(
            format!("  → {}", view_label(view)),
            Styles::muted(),
        ));
        lines.push(Line::raw(""));
    }
    lines.extend(field(
        texts.email,
        login.email.clone(),
        login.focus == LoginField::Email,
    ));
    lines.extend(field(
        texts.password,
        "•".repeat(login.password.chars().count()),
        login.focus == LoginField::Password,
    ));

    let submit = if login.pending {
        texts.signing_in
    } else {
        texts.submit
    };
    lines.push(Line::from(Span::styled(
        format!("   {submit} "),
        Style::default().bg(c.highlight).fg(c.selected_fg).add_modifier(Modifier::BOLD),
    )));

    if let Some(error) = &login.error {
        lines.push(Line::raw(""));
        lines.push(Line::styled(format!("  ✗ {error}"), Style::default().fg(c.error)));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use crate::view::test_support::{draw, text};

    #[test]
    fn password_is_masked() {
        let mut app = App::new(5);
        app.current_page = Page::Login;
        app.login.email = "admin@example.com".into();
        app.login.password = "hunter2".into();

        let screen = text(&draw(&app, 100, 24));
        assert!(screen.contains("admin@example.com"), "{screen}");
        assert!(!screen.contains("hunter2"), "{screen}");
        assert!(screen.contains("•••••••"), "{screen}");
    }

    #[test]
    fn error_is_rendered() {
        let mut app = App::new(5);
        app.current_page = Page::Login;
        app.login.error = Some(t().login.admin_only.to_string());
        let screen = text(&draw(&app, 100, 24));
        assert!(screen.contains("Administrator access required"), "{screen}");
    }
}
