//! 焦点状态

/// 键盘输入当前落在哪个面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧 "Admin Dashboard" 导航
    Navigation,
    /// 右侧页面
    #[default]
    Content,
}

impl FocusPanel {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}
