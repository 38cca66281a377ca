//! Admin Repository

use super::{RepoError, RepoResult};
use shared::models::{Admin, AdminCreate};
use sqlx::SqlitePool;

const ADMIN_COLUMNS: &str =
    "admin_id, name, dob, email, phone_number, password, position, created_at, updated_at";

pub async fn find_by_id(pool: &SqlitePool, admin_id: &str) -> RepoResult<Option<Admin>> {
    let admin = sqlx::query_as::<_, Admin>(&format!(
        "SELECT {ADMIN_COLUMNS} FROM admins WHERE admin_id = ?"
    ))
    .bind(admin_id)
    .fetch_optional(pool)
    .await?;
    Ok(admin)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Admin>> {
    let admin = sqlx::query_as::<_, Admin>(&format!(
        "SELECT {ADMIN_COLUMNS} FROM admins WHERE email = ?"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(admin)
}

/// Insert a new admin account. `data.password` must already be hashed.
pub async fn create(pool: &SqlitePool, data: AdminCreate) -> RepoResult<Admin> {
    let admin_id = shared::util::new_id();
    let now = shared::util::now_millis();

    sqlx::query(
        "INSERT INTO admins (admin_id, name, dob, email, phone_number, password, position, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&admin_id)
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
            RepoError::Duplicate(format!("Admin email already registered: {}", data.email))
        }
        other => other,
    })?;

    find_by_id(pool, &admin_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create admin".into()))
}

/// Replace the stored password hash.
pub async fn update_password(pool: &SqlitePool, email: &str, password_hash: &str) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE admins SET password = ?, updated_at = ? WHERE email = ?")
        .bind(password_hash)
        .bind(now)
        .bind(email)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Admin not found: {email}")));
    }
    Ok(())
}

pub async fn email_exists(pool: &SqlitePool, email: &str) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}
