//! 资源表页面：搜索框 + 表格 + 分页栏
//!
//! 拉取失败时错误面板替换表格与分页栏，已加载的行不再显示。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use mailguard_core::services::{ResourceTable, TablePhase};
use mailguard_core::types::{ResourceKind, ResourceRow};
use mailguard_core::utils::datetime::display_date;

use crate::i18n::t;
use crate::model::App;
use crate::view::components::pagination;
use crate::view::theme::{colors, Styles};
use crate::view::truncate;

/// 渲染当前视图的资源表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let table = app.active_table();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(pagination::HEIGHT),
        ])
        .split(area);

    render_search(table, app.tables.editing_search, frame, chunks[0]);

    match table.phase() {
        TablePhase::Errored(message) => {
            let body = chunks[1].union(chunks[2]);
            render_error(message, frame, body);
        }
        _ => {
            render_rows(table, frame, chunks[1]);
            pagination::render(table, frame, chunks[2]);
        }
    }
}

fn render_search(table: &ResourceTable, editing: bool, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(editing));

    let term = table.search_term();
    let line = if term.is_empty() && !editing {
        Line::styled(
            t().table
                .search_placeholder
                .replace("{plural}", table.kind().plural()),
            Styles::muted(),
        )
    } else {
        let mut spans = vec![Span::styled("/ ", Styles::muted()), Span::raw(term.to_string())];
        if editing {
            spans.push(Span::styled("▎", Style::default().fg(c.highlight)));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_error(message: &str, frame: &mut Frame, area: Rect) {
    let c = colors();
    let lines = vec![
        Line::raw(""),
        Line::styled(
            format!("  ✗ {message}"),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(format!("  {}", t().table.retry_hint), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// 每种资源的列：(标题, 宽度)
fn columns(kind: ResourceKind) -> Vec<(&'static str, Constraint)> {
    let texts = &t().table;
    match kind {
        ResourceKind::BlacklistedDomains => vec![
            (texts.col_domain, Constraint::Percentage(65)),
            (texts.col_created, Constraint::Percentage(35)),
        ],
        ResourceKind::BlacklistedEmails => vec![
            (texts.col_email, Constraint::Percentage(40)),
            (texts.col_reason, Constraint::Percentage(30)),
            (texts.col_created, Constraint::Percentage(30)),
        ],
        ResourceKind::ValidEmails => vec![
            (texts.col_email, Constraint::Percentage(45)),
            (texts.col_status, Constraint::Percentage(20)),
            (texts.col_validated, Constraint::Percentage(35)),
        ],
    }
}

fn cells(kind: ResourceKind, row: &ResourceRow, widths: &[u16]) -> Vec<String> {
    let date = display_date(&row.created_at);
    let detail = row.detail.as_deref().unwrap_or("-");
    let values = match kind {
        ResourceKind::BlacklistedDomains => vec![row.value.as_str(), date.as_str()],
        ResourceKind::BlacklistedEmails | ResourceKind::ValidEmails => {
            vec![row.value.as_str(), detail, date.as_str()]
        }
    };
    values
        .into_iter()
        .zip(widths)
        .map(|(value, width)| truncate(value, usize::from(*width)))
        .collect()
}

fn render_rows(table: &ResourceTable, frame: &mut Frame, area: Rect) {
    let texts = &t().table;
    let kind = table.kind();
    let columns = columns(kind);
    let constraints: Vec<Constraint> = columns.iter().map(|(_, w)| *w).collect();
    let widths: Vec<u16> = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints.clone())
        .split(area)
        .iter()
        .map(|rect| rect.width.saturating_sub(1))
        .collect();

    let header = Row::new(
        columns
            .iter()
            .map(|(title, _)| Cell::from(*title).style(Styles::title())),
    )
    .bottom_margin(1);

    // loading 与空表各显示一行占位文字
    let placeholder = match table.phase() {
        TablePhase::Idle | TablePhase::Loading => Some(texts.loading.to_string()),
        TablePhase::Loaded if table.items().is_empty() => {
            Some(texts.empty.replace("{plural}", kind.plural()))
        }
        _ => None,
    };

    let has_rows = placeholder.is_none();
    let rows: Vec<Row> = match placeholder {
        Some(text) => vec![Row::new([Cell::from(text).style(Styles::muted())])],
        None => table
            .items()
            .iter()
            .map(|row| Row::new(cells(kind, row, &widths)).style(Style::default().fg(colors().fg)))
            .collect(),
    };

    let widget = Table::new(rows, constraints)
        .header(header)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if has_rows {
        state.select(Some(table.selected()));
    }
    frame.render_stateful_widget(widget, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use crate::update::tests::admin_app;
    use crate::view::test_support::{draw, text};
    use chrono::Utc;
    use mailguard_core::services::View;
    use mailguard_core::types::{ListPage, PaginationMeta};
    use mailguard_core::CoreError;

    fn app_with_page(view: View, values: &[&str], total_items: u32, page: u32) -> App {
        let mut app = admin_app();
        app.dashboard.select_view(view);
        app.current_page = Page::Dashboard(view);
        let ticket = app.active_table_mut().change_page(page);
        let items = values
            .iter()
            .enumerate()
            .map(|(i, value)| ResourceRow {
                id: i.to_string(),
                value: (*value).to_string(),
                created_at: Utc::now(),
                detail: None,
            })
            .collect();
        app.active_table_mut().finish_fetch(
            &ticket,
            Ok(ListPage {
                items,
                pagination: PaginationMeta {
                    total_items,
                    total_pages: total_items.div_ceil(5),
                    current_page: page,
                    items_per_page: 5,
                },
            }),
        );
        app
    }

    #[test]
    fn empty_table_shows_no_rows_message() {
        let app = app_with_page(View::BlacklistedDomains, &[], 0, 1);
        let screen = text(&draw(&app, 100, 24));
        assert!(screen.contains("No domains found"), "{screen}");
    }

    #[test]
    fn footer_reports_visible_range() {
        let values = ["f.com", "g.com", "h.com", "i.com", "j.com"];
        let mut app = app_with_page(View::BlacklistedDomains, &values, 12, 1);
        let items = app.active_table().items().to_vec();
        let ticket = app.active_table_mut().change_page(2);
        app.active_table_mut().finish_fetch(
            &ticket,
            Ok(ListPage {
                items,
                pagination: PaginationMeta {
                    total_items: 12,
                    total_pages: 3,
                    current_page: 2,
                    items_per_page: 5,
                },
            }),
        );

        let screen = text(&draw(&app, 100, 24));
        assert!(screen.contains("Showing 6 to 10 of 12 results"), "{screen}");
        assert!(screen.contains("[2]"), "{screen}");
        assert!(screen.contains("f.com"), "{screen}");
    }

    #[test]
    fn error_panel_replaces_retained_rows() {
        let mut app = app_with_page(View::BlacklistedEmails, &["kept@example.com"], 1, 1);
        let ticket = app.active_table_mut().refresh();
        app.active_table_mut()
            .finish_fetch(&ticket, Err(CoreError::NetworkError("down".into())));
        assert_eq!(app.active_table().items().len(), 1);

        let screen = text(&draw(&app, 100, 24));
        assert!(screen.contains("Failed to fetch emails"), "{screen}");
        assert!(!screen.contains("kept@example.com"), "{screen}");
    }

    #[test]
    fn loading_shows_placeholder_row() {
        let mut app = app_with_page(View::ValidEmails, &["a@b.com"], 1, 1);
        app.active_table_mut().refresh();
        let screen = text(&draw(&app, 100, 24));
        assert!(screen.contains("Loading..."), "{screen}");
    }
}
