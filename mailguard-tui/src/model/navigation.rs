//! 导航状态

use mailguard_core::services::View;

use super::Page;

/// 导航项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    ValidEmails,
    BlacklistedDomains,
    BlacklistedEmails,
    Validator,
}

impl NavItemId {
    pub const ALL: [Self; 4] = [
        Self::ValidEmails,
        Self::BlacklistedDomains,
        Self::BlacklistedEmails,
        Self::Validator,
    ];

    pub fn page(self) -> Page {
        match self {
            Self::ValidEmails => Page::Dashboard(View::ValidEmails),
            Self::BlacklistedDomains => Page::Dashboard(View::BlacklistedDomains),
            Self::BlacklistedEmails => Page::Dashboard(View::BlacklistedEmails),
            Self::Validator => Page::Validator,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::ValidEmails => "✓",
            Self::BlacklistedDomains => "●",
            Self::BlacklistedEmails => "@",
            Self::Validator => "?",
        }
    }
}

/// 导航状态
#[derive(Debug, Default)]
pub struct NavigationState {
    /// 当前高亮项的索引
    pub selected: usize,
}

impl NavigationState {
    pub fn items(&self) -> &'static [NavItemId] {
        &NavItemId::ALL
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < NavItemId::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = NavItemId::ALL.len() - 1;
    }

    pub fn current_id(&self) -> Option<NavItemId> {
        NavItemId::ALL.get(self.selected).copied()
    }

    /// 页面切换后同步高亮；登录页没有对应项，保持不变
    pub fn follow(&mut self, page: Page) {
        if let Some(index) = NavItemId::ALL.iter().position(|id| id.page() == page) {
            self.selected = index;
        }
    }
}
