//! 主题和样式定义

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// 0 = Dark, 1 = Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(37, 99, 235),
            highlight: Color::Rgb(37, 99, 235),
            selected_bg: Color::Rgb(30, 58, 138),
            selected_fg: Color::White,
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            error: Color::Rgb(248, 113, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(31, 41, 55),
            border: Color::Rgb(209, 213, 219),
            border_focused: Color::Rgb(37, 99, 235),
            highlight: Color::Rgb(37, 99, 235),
            selected_bg: Color::Rgb(219, 234, 254),
            selected_fg: Color::Black,
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(220, 38, 38),
            muted: Color::Rgb(107, 114, 128),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 边框，按焦点着色
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn statusbar() -> Style {
        Style::default().bg(colors().highlight).fg(Color::White)
    }

    pub fn hint_key() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(220, 220, 220))
    }
}
