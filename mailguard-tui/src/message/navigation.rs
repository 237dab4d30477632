//! 导航相关消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 打开选中的页面
    Confirm,
}
