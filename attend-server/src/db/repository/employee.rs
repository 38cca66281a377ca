//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeCreate, EmployeeProfile, EmployeeResponse, ProfileUpdate};
use sqlx::SqlitePool;

const EMPLOYEE_COLUMNS: &str = "employee_id, admin_id, category_id, name, dob, email, phone_number, password, position, work_date, login_time, logout_time, login_status, latitude, longitude, uploaded_work, created_at, updated_at";

pub async fn find_by_id(pool: &SqlitePool, employee_id: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_id = ?"
    ))
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE email = ?"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

/// Insert a new employee under an admin. `data.password` must already be hashed.
pub async fn create(
    pool: &SqlitePool,
    admin_id: &str,
    data: EmployeeCreate,
) -> RepoResult<Employee> {
    let employee_id = shared::util::new_id();
    let now = shared::util::now_millis();

    sqlx::query(
        "INSERT INTO employees (employee_id, admin_id, category_id, name, dob, email, phone_number, password, position, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&employee_id)
    .bind(admin_id)
    .bind(&data.category_id)
    .bind(&data.name)
    .bind(&data.dob)
    .bind(&data.email)
    .bind(&data.phone_number)
    .bind(&data.password)
    .bind(&data.position)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Employee email already registered: {}", data.email))
        }
        other => other,
    })?;

    find_by_id(pool, &employee_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn find_all_by_admin(
    pool: &SqlitePool,
    admin_id: &str,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<EmployeeResponse>> {
    let employees = sqlx::query_as::<_, EmployeeResponse>(
        "SELECT e.employee_id, e.name, e.dob, e.email, e.phone_number, e.position, e.category_id, c.category_name, e.login_status, e.latitude, e.longitude FROM employees e JOIN employee_categories c ON c.category_id = e.category_id WHERE e.admin_id = ? ORDER BY e.name LIMIT ? OFFSET ?",
    )
    .bind(admin_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn count_by_admin(pool: &SqlitePool, admin_id: &str) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE admin_id = ?")
        .bind(admin_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn find_profile(
    pool: &SqlitePool,
    employee_id: &str,
) -> RepoResult<Option<EmployeeProfile>> {
    let profile = sqlx::query_as::<_, EmployeeProfile>(
        "SELECT e.name, e.dob, e.email, e.phone_number, e.position, e.category_id, c.category_name, e.login_status, e.latitude, e.longitude, e.updated_at FROM employees e JOIN employee_categories c ON c.category_id = e.category_id WHERE e.employee_id = ?",
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;
    Ok(profile)
}

pub async fn update_profile(
    pool: &SqlitePool,
    employee_id: &str,
    data: ProfileUpdate,
) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE employees SET category_id = ?, name = ?, dob = ?, email = ?, phone_number = ?, position = ?, updated_at = ? WHERE employee_id = ?",
    )
    .bind(&data.category_id)
    .bind(&data.name)
    .bind(&data.dob)
    .bind(&data.email)
    .bind(&data.phone_number)
    .bind(&data.position)
    .bind(now)
    .bind(employee_id)
    .execute(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => {
            RepoError::Duplicate(format!("Employee email already registered: {}", data.email))
        }
        other => other,
    })?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Employee not found: {employee_id}"
        )));
    }
    Ok(())
}

/// Replace the stored password hash.
pub async fn update_password(pool: &SqlitePool, email: &str, password_hash: &str) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE employees SET password = ?, updated_at = ? WHERE email = ?")
        .bind(password_hash)
        .bind(now)
        .bind(email)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee not found: {email}")));
    }
    Ok(())
}

/// Delete an employee owned by the given admin. Cascades to the ledgers.
pub async fn delete(pool: &SqlitePool, admin_id: &str, employee_id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employees WHERE employee_id = ? AND admin_id = ?")
        .bind(employee_id)
        .bind(admin_id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn email_exists(pool: &SqlitePool, email: &str) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}
