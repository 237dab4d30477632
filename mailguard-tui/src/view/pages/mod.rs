//! 页面视图

pub mod login;
pub mod resource_table;
pub mod validator;
