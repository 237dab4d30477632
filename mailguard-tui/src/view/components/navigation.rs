//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{view_label, App, Page};
use crate::view::theme::{colors, Styles};

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    let items: Vec<ListItem> = app
        .navigation
        .items()
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let is_selected = i == app.navigation.selected;
            let is_current = id.page() == app.current_page;
            let prefix = if is_selected { "▶ " } else { "  " };

            let label = match id.page() {
                Page::Dashboard(view) => view_label(view),
                _ => texts.nav.validator,
            };

            let style = if is_selected && app.focus.is_navigation() {
                Styles::selected()
            } else if is_current {
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(
                format!("{prefix}{} {label}", id.icon()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

