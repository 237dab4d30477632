//! 翻译键定义
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **页面内容归对应页面**：如 `table.*`, `validator.*`, `login.*`
//! 4. **跨组件复用归 `common.*`**
//! 5. **键盘提示归 `hints.*`**
//!
//! 带 `{name}` 的文本为模板，使用处以 `str::replace` 填充。
//! 后端返回的通知文案（如 "Domain deleted successfully"）不经过这里。

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub nav: NavTexts,
    pub top_bar: TopBarTexts,
    pub table: TableTexts,
    pub validator: ValidatorTexts,
    pub login: LoginTexts,
    pub modal: ModalTexts,
    pub help: HelpTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub close: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

/// 状态栏快捷键提示（动作词）
pub struct HintTexts {
    pub switch_panel: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub page: &'static str,
    pub search: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub blacklist: &'static str,
    pub export: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub logout: &'static str,
    pub quit: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub newline: &'static str,
    pub next_field: &'static str,
    pub validate: &'static str,
}

/// 侧边导航
pub struct NavTexts {
    pub title: &'static str,
    pub valid_emails: &'static str,
    pub blacklisted_domains: &'static str,
    pub blacklisted_emails: &'static str,
    pub validator: &'static str,
}

/// 顶栏
pub struct TopBarTexts {
    /// `{email}`
    pub welcome: &'static str,
    pub logout_hint: &'static str,
    pub guest: &'static str,
    pub login_hint: &'static str,
}

/// 资源表
pub struct TableTexts {
    pub col_domain: &'static str,
    pub col_email: &'static str,
    pub col_created: &'static str,
    pub col_validated: &'static str,
    pub col_reason: &'static str,
    pub col_status: &'static str,
    /// `{plural}`
    pub search_placeholder: &'static str,
    pub loading: &'static str,
    /// `{plural}`
    pub empty: &'static str,
    /// `{start}` `{end}` `{total}`
    pub showing: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub retry_hint: &'static str,
}

/// 公开校验页
pub struct ValidatorTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email_label: &'static str,
    pub placeholder: &'static str,
    pub button: &'static str,
    pub validating: &'static str,
    pub failed: &'static str,
    /// `{suggestion}`
    pub did_you_mean: &'static str,
    pub domain: &'static str,
    pub user: &'static str,
    pub free: &'static str,
    pub role: &'static str,
    pub disposable: &'static str,
    pub accept_all: &'static str,
    pub safe_to_send: &'static str,
}

/// 登录页
pub struct LoginTexts {
    pub title: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub submit: &'static str,
    pub signing_in: &'static str,
    pub admin_only: &'static str,
    pub failed: &'static str,
    pub logged_out: &'static str,
}

/// 弹窗
pub struct ModalTexts {
    pub confirm_delete_title: &'static str,
    /// `{value}`
    pub confirm_delete_message: &'static str,
    pub confirm_delete_warning: &'static str,
    pub help_title: &'static str,
}

/// 帮助弹窗（快捷键 → 说明）
pub struct HelpTexts {
    pub global: &'static str,
    pub table: &'static str,
    pub modal: &'static str,
    pub quit: &'static str,
    pub switch_panel: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub logout: &'static str,
    pub select_row: &'static str,
    pub change_page: &'static str,
    pub first_last_page: &'static str,
    pub search: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub blacklist: &'static str,
    pub export: &'static str,
    pub submit: &'static str,
    pub newline: &'static str,
    pub cancel: &'static str,
}
