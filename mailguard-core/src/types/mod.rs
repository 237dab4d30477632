//! 类型定义模块

mod auth;
mod notification;
mod pagination;
mod resource;
mod validation;

pub use auth::{AuthContext, GuardRejection, Role, Session, User};
pub use notification::{Notification, NotificationLevel};
pub(crate) use notification::capitalize;
pub use pagination::{ListPage, ListQuery, PaginationMeta, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use resource::{
    BlacklistedDomain, BlacklistedEmail, ResourceKind, ResourceRow, ValidEmail,
};
pub use validation::{ValidationReport, ValidationStatus};
