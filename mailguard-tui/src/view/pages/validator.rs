//! 公开邮箱校验页

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use mailguard_core::types::{ValidationReport, ValidationStatus};

use crate::i18n::t;
use crate::model::{App, ValidatorStatus};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().validator;
    let c = colors();
    let state = &app.validator;
    let focused = app.focus.is_content();

    let mut lines = vec![
        Line::raw(""),
        Line::styled(format!("  {}", texts.title), Styles::title()),
        Line::styled(format!("  {}", texts.subtitle), Styles::muted()),
        Line::raw(""),
        Line::styled(format!("  {}", texts.email_label), Style::default().fg(c.fg)),
    ];

    let input = if state.input.is_empty() && !focused {
        Line::styled(format!("  {}", texts.placeholder), Styles::muted())
    } else {
        let mut spans = vec![Span::raw(format!("  {}", state.input))];
        if focused {
            spans.push(Span::styled("▎", Style::default().fg(c.highlight)));
        }
        Line::from(spans)
    };
    lines.push(input);
    lines.push(Line::raw(""));

    let button = if state.is_pending() {
        texts.validating
    } else {
        texts.button
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!(" {button} "),
            Style::default().bg(c.highlight).fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Enter", Styles::hint_key()),
    ]));
    lines.push(Line::raw(""));

    match &state.status {
        ValidatorStatus::Idle | ValidatorStatus::Pending => {}
        ValidatorStatus::Failed => {
            lines.push(Line::styled(format!("  ✗ {}", texts.failed), Style::default().fg(c.error)));
        }
        ValidatorStatus::Done(report) => lines.extend(report_lines(report)),
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn report_lines(report: &ValidationReport) -> Vec<Line<'static>> {
    let texts = &t().validator;
    let common = &t().common;
    let c = colors();

    let badge_color = match report.status() {
        ValidationStatus::Valid => c.success,
        ValidationStatus::Invalid => c.error,
        ValidationStatus::Unknown => c.warning,
    };
    let verdict = if report.result.is_empty() {
        "unknown".to_string()
    } else {
        report.result.to_uppercase()
    };

    let mut badge = vec![
        Span::raw("  "),
        Span::styled(
            format!(" {verdict} "),
            Style::default().bg(badge_color).fg(Color::Black).add_modifier(Modifier::BOLD),
        ),
    ];
    if !report.email.is_empty() {
        badge.push(Span::styled(format!("  {}", report.email), Styles::title()));
    }
    if !report.reason.is_empty() {
        badge.push(Span::styled(format!("  ({})", report.reason), Styles::muted()));
    }

    let mut lines = vec![Line::from(badge)];
    if let Some(note) = report.note() {
        lines.push(Line::styled(format!("  {note}"), Styles::muted()));
    }
    if let Some(suggestion) = report.suggestion() {
        lines.push(Line::styled(
            format!("  {}", texts.did_you_mean.replace("{suggestion}", suggestion)),
            Style::default().fg(c.warning),
        ));
    }
    lines.push(Line::raw(""));

    let detail = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {label:<16}"), Styles::muted()),
            Span::raw(value),
        ])
    };
    let yes_no = |flag: bool| (if flag { common.yes } else { common.no }).to_string();

    lines.push(detail(texts.domain, report.domain.clone()));
    lines.push(detail(texts.user, report.user.clone()));
    lines.push(detail(texts.free, yes_no(report.is_free())));
    lines.push(detail(texts.role, yes_no(report.is_role())));
    lines.push(detail(texts.disposable, yes_no(report.is_disposable())));
    lines.push(detail(texts.accept_all, yes_no(report.is_accept_all())));
    lines.push(detail(texts.safe_to_send, yes_no(report.is_safe_to_send())));
    lines
}
