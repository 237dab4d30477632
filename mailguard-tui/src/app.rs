//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一轮：
//!
//! loop {
//!
//!     dispatcher.dispatch(cmd)        // 1. 把 Update 层留下的 Command 交给后台任务
//!     rx.try_recv()                   // 2. 取回已完成任务的 BackendMessage
//!     update(AppMessage::Tick)        // 3. 清理过期提示、把刷新信号转成拉取
//!     terminal.draw(view::render)     // 4. 渲染 UI
//!     if app.should_quit { break }    // 5. 检查是否退出
//!     poll_event(100ms)               // 6. 等待输入，翻译为消息并更新状态
//!
//! }
//!
//! Update 层从不等待 I/O，所以按键始终即时响应；
//! 网络请求在后台进行，完成后通过通道回到第 2 步。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Dispatcher;
use crate::event;
use crate::message::{AppMessage, BackendMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 单轮等待输入的时长
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub async fn run(
    terminal: &mut Term,
    app: &mut App,
    dispatcher: &Dispatcher,
    rx: &mut UnboundedReceiver<BackendMessage>,
) -> Result<()> {
    loop {
        for command in app.take_commands() {
            dispatcher.dispatch(command);
        }

        while let Ok(message) = rx.try_recv() {
            update::update(app, AppMessage::Backend(message));
        }
        update::update(app, AppMessage::Tick);

        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            break;
        }

        // crossterm 的 poll 会阻塞，放到阻塞线程池里避免卡住后台任务
        let polled = tokio::task::spawn_blocking(|| event::poll_event(POLL_INTERVAL)).await??;
        if let Some(event) = polled {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
