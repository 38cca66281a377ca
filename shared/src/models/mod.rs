//! Data models
//!
//! Shared between attend-server and frontends (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Business dates are `YYYY-MM-DD` strings and clock times are `HH:MM`
//! strings (validated at the API boundary); audit timestamps are Unix millis.

pub mod admin;
pub mod category;
pub mod employee;
pub mod leave;
pub mod otp;
pub mod session;

// Re-exports
pub use admin::*;
pub use category::*;
pub use employee::*;
pub use leave::*;
pub use otp::*;
pub use session::*;
