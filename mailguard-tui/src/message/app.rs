//! 应用主消息枚举

use super::{BackendMessage, ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    Navigation(NavigationMessage),

    Content(ContentMessage),

    Modal(ModalMessage),

    /// 后台任务完成
    Backend(BackendMessage),

    /// 重新拉取当前表格
    Refresh,

    ShowHelp,

    Logout,

    /// 每轮主循环一次：清理过期提示、处理刷新信号
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
