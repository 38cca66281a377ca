//! Employee Model
//!
//! The employee row carries a current-session snapshot (work_date,
//! login_time, logout_time, login_status, last location, last work note)
//! that is kept in lockstep with the work-history ledger by the session
//! engine — the two are only ever written together in one transaction.

use serde::{Deserialize, Serialize};

/// Sentinel marking "awaiting the other half of a two-step action"
/// (open session awaiting logout, work note awaiting upload).
pub const PENDING: &str = "pending";

/// Employee row as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub employee_id: String,
    pub admin_id: String,
    pub category_id: String,
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub position: String,
    // Current-session snapshot
    pub work_date: String,
    pub login_time: String,
    pub logout_time: String,
    pub login_status: bool,
    pub latitude: String,
    pub longitude: String,
    pub uploaded_work: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload (admin action)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub category_id: String,
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub position: String,
}

/// Employee listing entry (admin view, joined with category)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeResponse {
    pub employee_id: String,
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone_number: String,
    pub position: String,
    pub category_id: String,
    pub category_name: String,
    pub login_status: bool,
    pub latitude: String,
    pub longitude: String,
}

/// Employee profile view (self view, joined with category)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeProfile {
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone_number: String,
    pub position: String,
    pub category_id: String,
    pub category_name: String,
    pub login_status: bool,
    pub latitude: String,
    pub longitude: String,
    pub updated_at: i64,
}

/// Profile info update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub category_id: String,
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone_number: String,
    pub position: String,
}

/// Login request (admin or employee)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
