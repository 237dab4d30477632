//! 可复用组件

pub mod modal;
pub mod navigation;
pub mod pagination;
pub mod statusbar;
pub mod topbar;
