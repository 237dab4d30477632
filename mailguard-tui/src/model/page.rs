//! 页面路由

use mailguard_core::services::View;

use crate::i18n::t;

/// 当前页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 公开的邮箱校验页（未登录时的落地页）
    #[default]
    Validator,
    Login,
    /// 需要管理员会话的三个视图
    Dashboard(View),
}

impl Page {
    pub fn title(self) -> &'static str {
        let texts = t();
        match self {
            Page::Validator => texts.nav.validator,
            Page::Login => texts.login.title,
            Page::Dashboard(view) => view_label(view),
        }
    }

    pub fn view(self) -> Option<View> {
        match self {
            Page::Dashboard(view) => Some(view),
            _ => None,
        }
    }

    /// 页面是否以文本输入为主（此时单字符按键作为输入而非快捷键）
    pub fn is_text_entry(self) -> bool {
        matches!(self, Page::Validator | Page::Login)
    }
}

/// 视图在导航栏与标题中的名称
pub fn view_label(view: View) -> &'static str {
    let nav = &t().nav;
    match view {
        View::ValidEmails => nav.valid_emails,
        View::BlacklistedDomains => nav.blacklisted_domains,
        View::BlacklistedEmails => nav.blacklisted_emails,
    }
}
