//! Employee Category Model

use serde::{Deserialize, Serialize};

/// Employee category row - groups employees under an admin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeCategory {
    pub category_id: String,
    pub admin_id: String,
    pub category_name: String,
    pub category_description: String,
    pub created_at: i64,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub category_name: String,
    pub category_description: String,
}
