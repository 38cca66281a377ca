//! Admin Model

use serde::{Deserialize, Serialize};

/// Admin row as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Admin {
    pub admin_id: String,
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub position: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create admin payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreate {
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub position: String,
}

/// Admin response (without password)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AdminResponse {
    pub admin_id: String,
    pub name: String,
    pub dob: String,
    pub email: String,
    pub phone_number: String,
    pub position: String,
    pub created_at: i64,
}

/// Admin password update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordUpdate {
    pub password: String,
}
