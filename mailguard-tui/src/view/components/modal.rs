//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use mailguard_core::services::BulkModal;

use crate::i18n::t;
use crate::model::{App, DeleteFocus, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    if let Some(form) = app.dashboard.modal() {
        render_form(frame, form);
        return;
    }

    match &app.modal.active {
        Some(Modal::ConfirmDelete { value, focus, .. }) => render_confirm_delete(frame, value, *focus),
        Some(Modal::Help) => render_help(frame),
        None => {}
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn modal_block(title: &str) -> Block<'static> {
    let c = colors();
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
}

fn button(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Styles::selected()
    } else {
        Style::default().fg(colors().fg)
    };
    Span::styled(format!(" {label} "), style)
}

/// 批量添加 / 编辑表单
fn render_form(frame: &mut Frame, form: &BulkModal) {
    let texts = t();
    let c = colors();

    let text_rows: u16 = if form.is_multiline() { 6 } else { 1 };
    // 边框(2) + 文本 + 空行 + 按钮 + 上下留白
    let area = centered_rect(60, text_rows + 6, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(&form.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    if form.text().is_empty() {
        lines.push(Line::from(vec![
            Span::styled("▎", Style::default().fg(c.highlight)),
            Span::styled(form.placeholder(), Styles::muted()),
        ]));
    } else {
        let mut rows: Vec<&str> = form.text().split('\n').collect();
        let last = rows.pop().unwrap_or_default();
        lines.extend(rows.into_iter().map(|row| Line::raw(row.to_string())));
        lines.push(Line::from(vec![
            Span::raw(last.to_string()),
            Span::styled("▎", Style::default().fg(c.highlight)),
        ]));
    }
    // 保持按钮在底部
    while lines.len() < usize::from(text_rows) {
        lines.push(Line::raw(""));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        button(texts.common.cancel, false),
        Span::raw("  "),
        button(form.confirm_label(), true),
    ]));

    let body = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
}

fn render_confirm_delete(frame: &mut Frame, value: &str, focus: DeleteFocus) {
    let texts = t();
    let c = colors();

    let area = centered_rect(50, 9, frame.area());
    frame.render_widget(Clear, area);
    let block = modal_block(texts.modal.confirm_delete_title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            texts.modal.confirm_delete_message.replace("{value}", value),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        )),
        Line::styled(texts.modal.confirm_delete_warning, Style::default().fg(c.warning)),
        Line::raw(""),
        Line::from(vec![
            button(texts.common.cancel, focus == DeleteFocus::Cancel),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", texts.common.delete),
                if focus == DeleteFocus::Delete {
                    Style::default().bg(c.error).fg(c.selected_fg).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(c.error)
                },
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.help;

    let sections: [(&str, &[(&str, &str)]); 3] = [
        (
            help.global,
            &[
                ("Tab", help.switch_panel),
                ("Alt+r", help.refresh),
                ("Alt+h", help.help),
                ("Alt+l", help.logout),
                ("q / Ctrl+c", help.quit),
            ],
        ),
        (
            help.table,
            &[
                ("↑ ↓", help.select_row),
                ("← →", help.change_page),
                ("Home End", help.first_last_page),
                ("/", help.search),
                ("Alt+a", help.add),
                ("Alt+e", help.edit),
                ("Alt+d", help.delete),
                ("Alt+b", help.blacklist),
                ("Alt+x", help.export),
            ],
        ),
        (
            help.modal,
            &[
                ("Enter", help.submit),
                ("Alt+Enter", help.newline),
                ("Esc", help.cancel),
            ],
        ),
    ];

    let mut lines = Vec::new();
    for (title, keys) in sections {
        lines.push(Line::styled(title, Styles::title()));
        for (key, desc) in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), Styles::hint_key()),
                Span::raw(*desc),
            ]));
        }
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(format!("Esc {}", texts.common.close), Styles::muted()));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);
    let block = modal_block(texts.modal.help_title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}
