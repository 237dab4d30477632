//! 登录页状态

use mailguard_core::services::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub pending: bool,
    pub error: Option<String>,
    /// 被守卫拦下的视图，登录成功后跳转
    pub redirect: Option<View>,
}

impl LoginState {
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn focused_input(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// 登录成功后清空表单（保留 redirect 由调用方取走）
    pub fn reset(&mut self) {
        self.password.clear();
        self.focus = LoginField::Email;
        self.pending = false;
        self.error = None;
    }
}
