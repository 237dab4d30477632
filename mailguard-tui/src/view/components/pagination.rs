//! 分页栏："Showing x to y of z results" + 页码窗口

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use mailguard_core::services::ResourceTable;
use mailguard_core::{page_window, PageEntry};

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

/// 分页栏高度
pub const HEIGHT: u16 = 2;

pub fn render(table: &ResourceTable, frame: &mut Frame, area: Rect) {
    let texts = &t().table;
    let c = colors();

    let summary = table.footer_range().map_or_else(String::new, |(start, end, total)| {
        texts
            .showing
            .replace("{start}", &start.to_string())
            .replace("{end}", &end.to_string())
            .replace("{total}", &total.to_string())
    });

    let current = table.current_page();
    let total = table.total_pages();
    let enabled = |on: bool| {
        if on {
            Style::default().fg(c.fg)
        } else {
            Styles::muted()
        }
    };

    let mut spans = vec![
        Span::styled(format!("‹ {}", texts.previous), enabled(current > 1)),
        Span::raw("  "),
    ];
    for entry in page_window(current, total) {
        match entry {
            PageEntry::Page(page) if page == current => spans.push(Span::styled(
                format!("[{page}]"),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            )),
            PageEntry::Page(page) => spans.push(Span::raw(format!(" {page} "))),
            PageEntry::Ellipsis => spans.push(Span::styled(" … ", Styles::muted())),
        }
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(format!("{} ›", texts.next), enabled(current < total)));

    let lines = vec![
        Line::styled(summary, Styles::muted()),
        Line::from(spans),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
