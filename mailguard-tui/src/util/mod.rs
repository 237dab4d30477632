//! src/util/mod.rs
//! Util 层：与业务无关的基础设施
//!
//!     mod terminal;       // 终端初始化、恢复与 panic 钩子
//!
//! 启动顺序（见 main.rs）：
//!     install_panic_hook()  →  init_terminal()  →  主循环  →  restore_terminal()
//!
//! restore_terminal 必须在主循环返回后立即执行，无论主循环是否出错；
//! panic 时则由钩子负责恢复，否则终端会停留在原始模式。

mod terminal;

pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
