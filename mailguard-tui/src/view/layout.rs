//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::Styles;

/// 侧边导航宽度
const SIDEBAR_WIDTH: u16 = 26;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 顶栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(frame.area());

    components::topbar::render(app, frame, main_layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);

    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Dashboard(_) => pages::resource_table::render(app, frame, inner),
        Page::Validator => pages::validator::render(app, frame, inner),
        Page::Login => pages::login::render(app, frame, inner),
    }
}
