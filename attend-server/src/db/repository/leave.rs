//! Leave Request Repository
//!
//! 请假状态机：pending -> granted | canceled，终态不可再变。
//! 状态迁移统一走条件 UPDATE，rows_affected = 0 再区分不存在和终态。

use super::{RepoError, RepoResult};
use shared::models::{LeaveActor, LeaveApply, LeaveEntry, LeaveRequest, LeaveStatus, PendingLeaveEntry};
use sqlx::SqlitePool;

const LEAVE_COLUMNS: &str = "leave_id, employee_id, leave_from, leave_to, leave_reason, status, status_updated_by, created_at, updated_at";

pub async fn find_by_id(pool: &SqlitePool, leave_id: &str) -> RepoResult<Option<LeaveRequest>> {
    let leave = sqlx::query_as::<_, LeaveRequest>(&format!(
        "SELECT {LEAVE_COLUMNS} FROM leave_history WHERE leave_id = ?"
    ))
    .bind(leave_id)
    .fetch_optional(pool)
    .await?;
    Ok(leave)
}

/// File a new leave request. At most one pending request per employee;
/// the partial unique index backs the fast-path check under concurrency.
pub async fn apply(pool: &SqlitePool, data: LeaveApply) -> RepoResult<LeaveRequest> {
    let pending: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM leave_history WHERE employee_id = ? AND status = 'pending'",
    )
    .bind(&data.employee_id)
    .fetch_one(pool)
    .await?;

    if pending > 0 {
        return Err(RepoError::Conflict(
            "A pending leave request already exists".into(),
        ));
    }

    let leave_id = shared::util::new_id();
    let now = shared::util::now_millis();

    sqlx::query(
        "INSERT INTO leave_history (leave_id, employee_id, leave_from, leave_to, leave_reason, status, status_updated_by, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&leave_id)
    .bind(&data.employee_id)
    .bind(&data.leave_from)
    .bind(&data.leave_to)
    .bind(&data.leave_reason)
    .bind(LeaveStatus::Pending)
    .bind(LeaveActor::Employee)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Conflict("A pending leave request already exists".into())
        }
        other => other,
    })?;

    find_by_id(pool, &leave_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create leave request".into()))
}

/// Move a pending request to a terminal state, recording who acted.
/// Fails with a conflict once the request has already left `pending`.
pub async fn update_status(
    pool: &SqlitePool,
    leave_id: &str,
    status: LeaveStatus,
    actor: LeaveActor,
) -> RepoResult<LeaveRequest> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE leave_history SET status = ?, status_updated_by = ?, updated_at = ? WHERE leave_id = ? AND status = 'pending'",
    )
    .bind(status)
    .bind(actor)
    .bind(now)
    .bind(leave_id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return match find_by_id(pool, leave_id).await? {
            Some(leave) => Err(RepoError::Conflict(format!(
                "Leave request already {}",
                leave.status
            ))),
            None => Err(RepoError::NotFound(format!(
                "Leave request not found: {leave_id}"
            ))),
        };
    }

    find_by_id(pool, leave_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Leave request not found: {leave_id}")))
}

pub async fn find_by_employee(
    pool: &SqlitePool,
    employee_id: &str,
    status: Option<LeaveStatus>,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<LeaveEntry>> {
    let entries = sqlx::query_as::<_, LeaveEntry>(
        "SELECT leave_id, leave_from, leave_to, leave_reason, status, status_updated_by, updated_at FROM leave_history WHERE employee_id = ?1 AND (?2 IS NULL OR status = ?2) ORDER BY updated_at DESC LIMIT ?3 OFFSET ?4",
    )
    .bind(employee_id)
    .bind(status)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

pub async fn count_by_employee(
    pool: &SqlitePool,
    employee_id: &str,
    status: Option<LeaveStatus>,
) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM leave_history WHERE employee_id = ?1 AND (?2 IS NULL OR status = ?2)",
    )
    .bind(employee_id)
    .bind(status)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

pub async fn find_pending_by_admin(
    pool: &SqlitePool,
    admin_id: &str,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<PendingLeaveEntry>> {
    let entries = sqlx::query_as::<_, PendingLeaveEntry>(
        "SELECT e.employee_id, e.name, e.email, c.category_name, l.leave_id, l.leave_from, l.leave_to, l.leave_reason, l.created_at FROM leave_history l JOIN employees e ON e.employee_id = l.employee_id JOIN employee_categories c ON c.category_id = e.category_id WHERE e.admin_id = ? AND l.status = 'pending' ORDER BY l.created_at DESC LIMIT ? OFFSET ?",
    )
    .bind(admin_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

pub async fn count_pending_by_admin(pool: &SqlitePool, admin_id: &str) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM leave_history l JOIN employees e ON e.employee_id = l.employee_id WHERE e.admin_id = ? AND l.status = 'pending'",
    )
    .bind(admin_id)
    .fetch_one(pool)
    .await?;
    Ok(count)
}
