//! 顶栏：应用名与当前登录用户

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let bar = Style::default().bg(c.highlight).fg(c.selected_fg);

    let title = Paragraph::new(format!(" {}", texts.common.app_name)).style(bar);
    frame.render_widget(title, area);

    let right = match app.auth.user.as_ref().filter(|_| app.auth.is_authenticated()) {
        Some(user) => Line::from(vec![
            Span::raw(texts.top_bar.welcome.replace("{email}", &user.email)),
            Span::raw("  "),
            Span::raw(texts.top_bar.logout_hint),
            Span::raw(" "),
        ]),
        None => Line::from(vec![
            Span::raw(texts.top_bar.guest),
            Span::raw(" · "),
            Span::raw(texts.top_bar.login_hint),
            Span::raw(" "),
        ]),
    };
    frame.render_widget(
        Paragraph::new(right).style(bar).alignment(Alignment::Right),
        area,
    );
}
