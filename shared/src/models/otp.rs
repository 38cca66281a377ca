//! OTP Challenge Models
//!
//! A challenge is (principal, email, code, expiry). Multiple live challenges
//! per email are allowed by the schema; any matching unexpired pair is valid,
//! and a successful validation consumes (deletes) the row.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which account table an OTP challenge belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum Principal {
    Employee,
    Admin,
}

impl Principal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Principal::Employee => "employee",
            Principal::Admin => "admin",
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OTP ledger row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OtpChallenge {
    pub principal: Principal,
    pub email: String,
    pub otp: String,
    /// Unix millis after which the code is no longer valid
    pub expire_time: i64,
    pub created_at: i64,
}

/// Forgot-password request (starts the reset flow)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// OTP validation request (finishes the reset flow)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOtpRequest {
    pub email: String,
    pub otp: String,
}
