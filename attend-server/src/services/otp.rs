//! One-Time Password Flow
//!
//! 找回口令流程：签发 6 位验证码并邮件投递，TTL 到期后由后台任务清理。
//! 验证成功即消费 (删除) 该验证码，一码一用。

use std::sync::Arc;
use std::time::Duration;

use ring::rand::{SecureRandom, SystemRandom};
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::db::repository::otp as otp_repo;
use crate::services::{EmailMessage, Notifier};
use crate::utils::{AppError, AppResult};
use shared::models::{OtpChallenge, Principal};

const OTP_DIGITS: u32 = 6;

/// Generate a uniformly distributed 6-digit code (100000..=999999).
///
/// Rejection sampling over the raw 32-bit draw keeps the distribution
/// unbiased.
pub fn generate_code() -> AppResult<String> {
    let range = 9 * 10u32.pow(OTP_DIGITS - 1); // 900000
    let low = 10u32.pow(OTP_DIGITS - 1); // 100000
    let zone = u32::MAX - u32::MAX % range;

    let rng = SystemRandom::new();
    loop {
        let mut buf = [0u8; 4];
        rng.fill(&mut buf)
            .map_err(|_| AppError::internal("CSPRNG failure"))?;
        let draw = u32::from_be_bytes(buf);
        if draw < zone {
            return Ok((low + draw % range).to_string());
        }
    }
}

/// OTP issue/validate service
#[derive(Clone)]
pub struct OtpFlow {
    pool: SqlitePool,
    notifier: Arc<dyn Notifier>,
    ttl_minutes: i64,
}

impl OtpFlow {
    pub fn new(pool: SqlitePool, notifier: Arc<dyn Notifier>, ttl_minutes: i64) -> Self {
        Self {
            pool,
            notifier,
            ttl_minutes,
        }
    }

    /// Issue a fresh code for the account owning `email` and dispatch it
    /// by mail. The row is stored before dispatch; a failed dispatch
    /// removes it again and fails the whole operation.
    pub async fn issue(&self, principal: Principal, email: &str) -> AppResult<()> {
        let code = generate_code()?;
        let now = shared::util::now_millis();
        let challenge = OtpChallenge {
            principal,
            email: email.to_string(),
            otp: code.clone(),
            expire_time: now + self.ttl_minutes * 60_000,
            created_at: now,
        };

        otp_repo::create(&self.pool, &challenge).await?;

        if let Err(e) = self
            .notifier
            .send(EmailMessage::otp(email, &code, self.ttl_minutes))
            .await
        {
            // Best-effort rollback of the stored challenge
            if let Err(del) = otp_repo::delete(&self.pool, principal, email, &code).await {
                warn!(email = %email, error = %del, "Failed to remove undeliverable OTP");
            }
            return Err(AppError::internal(format!("OTP dispatch failed: {e}")));
        }

        info!(principal = %principal, email = %email, "OTP issued");
        self.spawn_expiry(principal, email.to_string(), code);
        Ok(())
    }

    /// Check a submitted code against the ledger. A match that has not
    /// expired is consumed; everything else is rejected.
    pub async fn validate(&self, principal: Principal, email: &str, code: &str) -> AppResult<()> {
        let now = shared::util::now_millis();
        let Some(challenge) =
            otp_repo::find_valid(&self.pool, principal, email, code, now).await?
        else {
            return Err(AppError::invalid("Invalid or expired OTP"));
        };

        otp_repo::delete(&self.pool, principal, email, &challenge.otp).await?;
        info!(principal = %principal, email = %email, "OTP validated");
        Ok(())
    }

    /// Detached expiry sweep: sleep out the TTL, then drop the pair.
    /// The delete is idempotent, so racing a successful validation is
    /// harmless; failures are logged and dropped.
    fn spawn_expiry(&self, principal: Principal, email: String, code: String) {
        let pool = self.pool.clone();
        let ttl = Duration::from_secs((self.ttl_minutes * 60) as u64);
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            match otp_repo::delete(&pool, principal, &email, &code).await {
                Ok(0) => {} // already consumed
                Ok(_) => info!(email = %email, "Expired OTP removed"),
                Err(e) => warn!(email = %email, error = %e, "OTP expiry sweep failed"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_six_digits_without_leading_zero() {
        for _ in 0..100 {
            let code = generate_code().unwrap();
            assert_eq!(code.len(), 6);
            let n: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&n));
        }
    }
}
