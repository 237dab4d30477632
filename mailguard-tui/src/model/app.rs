//! 应用主状态结构

use mailguard_core::services::{Dashboard, ResourceTable};
use mailguard_core::types::{AuthContext, Notification};

use super::{
    Command, FocusPanel, LoginState, ModalState, NavigationState, Page, TablesState, ToastState,
    ValidatorState,
};

/// 应用主状态
pub struct App {
    pub should_quit: bool,

    pub focus: FocusPanel,
    pub navigation: NavigationState,
    pub current_page: Page,

    /// 当前登录信息；每次发起认证请求前都经过 `guard()`
    pub auth: AuthContext,

    /// 视图、批量表单、编辑目标与刷新信号
    pub dashboard: Dashboard,

    // === 各页面状态 ===
    pub tables: TablesState,
    pub validator: ValidatorState,
    pub login: LoginState,

    pub modal: ModalState,
    pub toasts: ToastState,

    /// 待执行的副作用，由主循环取走
    pub pending: Vec<Command>,
}

impl App {
    pub fn new(page_size: u32) -> Self {
        let dashboard = Dashboard::new();
        let tables = TablesState::new(page_size, dashboard.refresh_signal());

        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            navigation: NavigationState::default(),
            current_page: Page::default(),
            auth: AuthContext::default(),
            dashboard,
            tables,
            validator: ValidatorState::default(),
            login: LoginState::default(),
            modal: ModalState::default(),
            toasts: ToastState::default(),
            pending: vec![Command::RestoreSession],
        }
    }

    /// 当前视图的资源表
    pub fn active_table(&self) -> &ResourceTable {
        self.tables.get(self.dashboard.view().kind())
    }

    pub fn active_table_mut(&mut self) -> &mut ResourceTable {
        self.tables.get_mut(self.dashboard.view().kind())
    }

    pub fn notify(&mut self, notification: Notification) {
        self.toasts.push(notification);
    }

    /// 取走待执行命令
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }

    /// 当前是否在文本输入中（单字符按键不作为快捷键）
    pub fn is_typing(&self) -> bool {
        self.focus.is_content()
            && (self.current_page.is_text_entry()
                || (self.current_page.view().is_some() && self.tables.editing_search))
    }
}
