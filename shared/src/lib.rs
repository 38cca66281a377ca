//! Shared types for the attendance platform
//!
//! Data models and request/response DTOs used by attend-server and its
//! clients. DB row types derive `sqlx::FromRow` behind the `db` feature so
//! frontends can depend on this crate without pulling in sqlx.

pub mod models;
pub mod page;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use page::{PageQuery, Paged};
