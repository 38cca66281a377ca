//! Leave Request Models
//!
//! Status transitions are one-way: `pending -> granted` or
//! `pending -> canceled`; both end states are terminal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Leave request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum LeaveStatus {
    Pending,
    Granted,
    Canceled,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Granted => "granted",
            LeaveStatus::Canceled => "canceled",
        }
    }

    /// Whether the status admits no further transitions
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(LeaveStatus::Pending),
            "granted" => Ok(LeaveStatus::Granted),
            "canceled" => Ok(LeaveStatus::Canceled),
            other => Err(format!("invalid leave status: {other}")),
        }
    }
}

/// Who last changed a leave request's status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum LeaveActor {
    Employee,
    Admin,
}

impl LeaveActor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveActor::Employee => "employee",
            LeaveActor::Admin => "admin",
        }
    }
}

impl fmt::Display for LeaveActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leave ledger row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LeaveRequest {
    pub leave_id: String,
    pub employee_id: String,
    pub leave_from: String,
    pub leave_to: String,
    pub leave_reason: String,
    pub status: LeaveStatus,
    pub status_updated_by: LeaveActor,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Apply-for-leave payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApply {
    pub employee_id: String,
    pub leave_from: String,
    pub leave_to: String,
    pub leave_reason: String,
}

/// Leave listing entry (employee view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LeaveEntry {
    pub leave_id: String,
    pub leave_from: String,
    pub leave_to: String,
    pub leave_reason: String,
    pub status: LeaveStatus,
    pub status_updated_by: LeaveActor,
    pub updated_at: i64,
}

/// Pending leave entry across all employees under an admin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PendingLeaveEntry {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub category_name: String,
    pub leave_id: String,
    pub leave_from: String,
    pub leave_to: String,
    pub leave_reason: String,
    pub created_at: i64,
}
