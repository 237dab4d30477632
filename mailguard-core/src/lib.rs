//! MailGuard Core Library
//!
//! Provides the business logic behind the MailGuard admin console:
//! - Admin API client (blacklisted domains, blacklisted emails, valid emails, validator)
//! - Resource tables (fetch / search / paginate / delete lifecycle)
//! - Dashboard shell (view selection, bulk add/edit modal, mutation routing)
//! - Auth guard and session persistence contract
//!
//! The library performs no terminal I/O. Front ends drive the state machines
//! and execute the requests they hand out.

pub mod client;
pub mod error;
pub mod http_client;
pub mod page_window;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use client::HttpAdminClient;
pub use error::{CoreError, CoreResult};
pub use page_window::{page_window, PageEntry};
pub use services::ServiceContext;
pub use traits::{AdminApi, SessionStore};
