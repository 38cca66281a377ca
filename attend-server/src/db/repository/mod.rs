//! Repository Module
//!
//! Free functions over `&SqlitePool`, one module per table. All business
//! dates are validated strings by the time they reach this layer; audit
//! timestamps are `i64` Unix millis from `shared::util::now_millis`.

// Accounts
pub mod admin;
pub mod category;
pub mod employee;

// Workflow ledgers
pub mod leave;
pub mod otp;
pub mod session;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
