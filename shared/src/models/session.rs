//! Work Session Models
//!
//! One history row per (employee, work date) once a login occurs. The row is
//! "open" while its `logout_time` equals the `pending` sentinel.

use serde::{Deserialize, Serialize};

/// Work-history ledger row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WorkHistory {
    pub employee_id: String,
    pub work_date: String,
    pub login_time: String,
    pub logout_time: String,
    pub latitude: String,
    pub longitude: String,
    pub uploaded_work: String,
    pub created_at: i64,
}

/// Work login payload (start of day session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLogin {
    pub employee_id: String,
    pub login_date: String,
    pub login_time: String,
    pub latitude: String,
    pub longitude: String,
}

/// Work logout payload (end of day session, carries the work summary)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLogout {
    pub employee_id: String,
    pub logout_date: String,
    pub logout_time: String,
    pub work: String,
}

/// Work-history entry (employee view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct WorkHistoryEntry {
    pub work_date: String,
    pub login_time: String,
    pub logout_time: String,
    pub latitude: String,
    pub longitude: String,
    pub uploaded_work: String,
    pub created_at: i64,
}

/// Work-history entry across all employees under an admin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AdminWorkHistoryEntry {
    pub name: String,
    pub work_date: String,
    pub login_time: String,
    pub logout_time: String,
    pub latitude: String,
    pub longitude: String,
    pub uploaded_work: String,
    pub created_at: i64,
}
