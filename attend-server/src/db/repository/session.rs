//! Work Session Repository
//!
//! 工作会话引擎：history 流水表和 employees 快照列只在同一事务内一起写，
//! 两者永不分离提交。一天一条记录，`logout_time = 'pending'` 表示会话开放。

use super::{RepoError, RepoResult};
use shared::models::{AdminWorkHistoryEntry, PENDING, WorkHistoryEntry, WorkLogin, WorkLogout};
use sqlx::SqlitePool;

/// Open a work session: append the history row and flip the employee
/// snapshot in one transaction.
pub async fn login(pool: &SqlitePool, data: WorkLogin) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    // Fast-path check; the UNIQUE(employee_id, work_date) constraint is
    // the authoritative guard under concurrency.
    let existing: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM work_history WHERE employee_id = ? AND work_date = ?",
    )
    .bind(&data.employee_id)
    .bind(&data.login_date)
    .fetch_one(&mut *tx)
    .await?;

    if existing > 0 {
        return Err(RepoError::Conflict(format!(
            "Already logged in on {}",
            data.login_date
        )));
    }

    sqlx::query(
        "INSERT INTO work_history (employee_id, work_date, login_time, logout_time, latitude, longitude, uploaded_work, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.employee_id)
    .bind(&data.login_date)
    .bind(&data.login_time)
    .bind(PENDING)
    .bind(&data.latitude)
    .bind(&data.longitude)
    .bind(PENDING)
    .bind(now)
    .execute(&mut *tx)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Conflict(format!("Already logged in on {}", data.login_date))
        }
        other => other,
    })?;

    let rows = sqlx::query(
        "UPDATE employees SET work_date = ?, login_time = ?, logout_time = ?, login_status = 1, latitude = ?, longitude = ?, uploaded_work = ?, updated_at = ? WHERE employee_id = ?",
    )
    .bind(&data.login_date)
    .bind(&data.login_time)
    .bind(PENDING)
    .bind(&data.latitude)
    .bind(&data.longitude)
    .bind(PENDING)
    .bind(now)
    .bind(&data.employee_id)
    .execute(&mut *tx)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Employee not found: {}",
            data.employee_id
        )));
    }

    tx.commit().await?;
    Ok(())
}

/// Close the open session for the given day: fill in logout time and the
/// work summary, then flip the snapshot. The conditional UPDATE makes a
/// second logout a no-op we surface as a conflict.
pub async fn logout(pool: &SqlitePool, data: WorkLogout) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;

    let rows = sqlx::query(
        "UPDATE work_history SET logout_time = ?, uploaded_work = ? WHERE employee_id = ? AND work_date = ? AND logout_time = ?",
    )
    .bind(&data.logout_time)
    .bind(&data.work)
    .bind(&data.employee_id)
    .bind(&data.logout_date)
    .bind(PENDING)
    .execute(&mut *tx)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Conflict(format!(
            "No open session on {}",
            data.logout_date
        )));
    }

    let rows = sqlx::query(
        "UPDATE employees SET logout_time = ?, uploaded_work = ?, login_status = 0, updated_at = ? WHERE employee_id = ?",
    )
    .bind(&data.logout_time)
    .bind(&data.work)
    .bind(now)
    .bind(&data.employee_id)
    .execute(&mut *tx)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Employee not found: {}",
            data.employee_id
        )));
    }

    tx.commit().await?;
    Ok(())
}

pub async fn find_by_employee(
    pool: &SqlitePool,
    employee_id: &str,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<WorkHistoryEntry>> {
    let entries = sqlx::query_as::<_, WorkHistoryEntry>(
        "SELECT work_date, login_time, logout_time, latitude, longitude, uploaded_work, created_at FROM work_history WHERE employee_id = ? ORDER BY created_at DESC LIMIT ? OFFSET ?",
    )
    .bind(employee_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

pub async fn count_by_employee(pool: &SqlitePool, employee_id: &str) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM work_history WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn find_by_admin(
    pool: &SqlitePool,
    admin_id: &str,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<AdminWorkHistoryEntry>> {
    let entries = sqlx::query_as::<_, AdminWorkHistoryEntry>(
        "SELECT e.name, h.work_date, h.login_time, h.logout_time, h.latitude, h.longitude, h.uploaded_work, h.created_at FROM work_history h JOIN employees e ON e.employee_id = h.employee_id WHERE e.admin_id = ? ORDER BY h.created_at DESC LIMIT ? OFFSET ?",
    )
    .bind(admin_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

pub async fn count_by_admin(pool: &SqlitePool, admin_id: &str) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM work_history h JOIN employees e ON e.employee_id = h.employee_id WHERE e.admin_id = ?",
    )
    .bind(admin_id)
    .fetch_one(pool)
    .await?;
    Ok(count)
}
