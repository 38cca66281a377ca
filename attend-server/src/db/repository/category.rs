//! Employee Category Repository

use super::{RepoError, RepoResult};
use shared::models::{CategoryCreate, EmployeeCategory};
use sqlx::SqlitePool;

const CATEGORY_COLUMNS: &str =
    "category_id, admin_id, category_name, category_description, created_at";

pub async fn find_by_id(pool: &SqlitePool, category_id: &str) -> RepoResult<Option<EmployeeCategory>> {
    let category = sqlx::query_as::<_, EmployeeCategory>(&format!(
        "SELECT {CATEGORY_COLUMNS} FROM employee_categories WHERE category_id = ?"
    ))
    .bind(category_id)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

pub async fn find_all_by_admin(
    pool: &SqlitePool,
    admin_id: &str,
) -> RepoResult<Vec<EmployeeCategory>> {
    let categories = sqlx::query_as::<_, EmployeeCategory>(&format!(
        "SELECT {CATEGORY_COLUMNS} FROM employee_categories WHERE admin_id = ? ORDER BY category_name"
    ))
    .bind(admin_id)
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn create(
    pool: &SqlitePool,
    admin_id: &str,
    data: CategoryCreate,
) -> RepoResult<EmployeeCategory> {
    let category_id = shared::util::new_id();
    let now = shared::util::now_millis();

    sqlx::query(
        "INSERT INTO employee_categories (category_id, admin_id, category_name, category_description, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&category_id)
    .bind(admin_id)
    .bind(&data.category_name)
    .bind(&data.category_description)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => RepoError::Duplicate(format!(
            "Category already exists: {}",
            data.category_name
        )),
        other => other,
    })?;

    find_by_id(pool, &category_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

/// Delete a category owned by the given admin. Cascades to its employees.
pub async fn delete(pool: &SqlitePool, admin_id: &str, category_id: &str) -> RepoResult<bool> {
    let rows =
        sqlx::query("DELETE FROM employee_categories WHERE category_id = ? AND admin_id = ?")
            .bind(category_id)
            .bind(admin_id)
            .execute(pool)
            .await?;
    Ok(rows.rows_affected() > 0)
}
