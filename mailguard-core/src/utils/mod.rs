//! Shared helpers

pub mod datetime;
pub mod lenient;
pub mod log_sanitizer;
