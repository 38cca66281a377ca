//! OTP Challenge Repository

use super::RepoResult;
use shared::models::{OtpChallenge, Principal};
use sqlx::SqlitePool;

pub async fn create(pool: &SqlitePool, challenge: &OtpChallenge) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO otp_challenges (principal, email, otp, expire_time, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(challenge.principal)
    .bind(&challenge.email)
    .bind(&challenge.otp)
    .bind(challenge.expire_time)
    .bind(challenge.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Find a challenge that matches and has not yet expired at `now`.
pub async fn find_valid(
    pool: &SqlitePool,
    principal: Principal,
    email: &str,
    otp: &str,
    now: i64,
) -> RepoResult<Option<OtpChallenge>> {
    let challenge = sqlx::query_as::<_, OtpChallenge>(
        "SELECT principal, email, otp, expire_time, created_at FROM otp_challenges WHERE principal = ? AND email = ? AND otp = ? AND expire_time > ? LIMIT 1",
    )
    .bind(principal)
    .bind(email)
    .bind(otp)
    .bind(now)
    .fetch_optional(pool)
    .await?;
    Ok(challenge)
}

/// Delete a challenge row. Idempotent: both the expiry sweep and a
/// successful validation may race to remove the same row.
pub async fn delete(
    pool: &SqlitePool,
    principal: Principal,
    email: &str,
    otp: &str,
) -> RepoResult<u64> {
    let rows =
        sqlx::query("DELETE FROM otp_challenges WHERE principal = ? AND email = ? AND otp = ?")
            .bind(principal)
            .bind(email)
            .bind(otp)
            .execute(pool)
            .await?;
    Ok(rows.rows_affected())
}
