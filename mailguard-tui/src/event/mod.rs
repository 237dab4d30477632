//! src/event/mod.rs
//! Event 层：把 crossterm 输入事件翻译为 Message
//!
//!     mod handler;        // poll_event / handle_event
//!     mod keymap;         // 快捷键表
//!
//! 按键分发顺序（handler.rs）：
//!     1. Ctrl+C                    → 退出（任何时候）
//!     2. 表单弹窗打开              → 表单按键（Enter 提交，Alt+Enter 换行，Esc 取消）
//!     3. 其他弹窗打开              → 删除确认 / 帮助
//!     4. Alt 全局快捷键            → 帮助 / 刷新 / 登出
//!     5. Tab                       → 切换焦点
//!     6. 非输入状态下的 q          → 退出
//!     7. 按焦点分发到导航或内容面板

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
