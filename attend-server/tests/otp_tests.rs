//! 验证码流程集成测试

mod common;

use attend_server::db::repository::otp as otp_repo;
use attend_server::services::OtpFlow;
use common::{RecordingNotifier, seed_admin, seed_category, seed_employee, test_pool};
use shared::models::{OtpChallenge, Principal};

#[tokio::test]
async fn issued_code_validates_exactly_once() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    seed_employee(&pool, &admin.admin_id, &cat.category_id, "jane@example.com").await;

    let notifier = RecordingNotifier::new();
    let flow = OtpFlow::new(pool.clone(), notifier.clone(), 5);

    flow.issue(Principal::Employee, "jane@example.com")
        .await
        .unwrap();
    assert_eq!(notifier.sent_count(), 1);

    // Pull the code out of the recorded mail body; the sentence puts
    // punctuation right after the digits, so strip it before matching.
    let code = {
        let sent = notifier.sent.lock().unwrap();
        sent[0]
            .body
            .split_whitespace()
            .map(|w| w.trim_end_matches(['.', ',']))
            .find(|w| w.len() == 6 && w.chars().all(|c| c.is_ascii_digit()))
            .expect("code in mail body")
            .to_string()
    };

    flow.validate(Principal::Employee, "jane@example.com", &code)
        .await
        .unwrap();

    // Single use: the same code is gone
    let err = flow
        .validate(Principal::Employee, "jane@example.com", &code)
        .await
        .unwrap_err();
    assert!(format!("{err}").contains("Invalid or expired"));
}

#[tokio::test]
async fn expired_code_is_rejected() {
    let (_dir, pool) = test_pool().await;

    let now = shared::util::now_millis();
    otp_repo::create(
        &pool,
        &OtpChallenge {
            principal: Principal::Employee,
            email: "jane@example.com".into(),
            otp: "123456".into(),
            expire_time: now - 1_000,
            created_at: now - 301_000,
        },
    )
    .await
    .unwrap();

    let notifier = RecordingNotifier::new();
    let flow = OtpFlow::new(pool.clone(), notifier, 5);

    let err = flow
        .validate(Principal::Employee, "jane@example.com", "123456")
        .await
        .unwrap_err();
    assert!(format!("{err}").contains("Invalid or expired"));
}

#[tokio::test]
async fn wrong_principal_scope_does_not_match() {
    let (_dir, pool) = test_pool().await;

    let now = shared::util::now_millis();
    otp_repo::create(
        &pool,
        &OtpChallenge {
            principal: Principal::Admin,
            email: "boss@example.com".into(),
            otp: "654321".into(),
            expire_time: now + 300_000,
            created_at: now,
        },
    )
    .await
    .unwrap();

    // An employee-scope lookup must not see the admin challenge
    let found = otp_repo::find_valid(&pool, Principal::Employee, "boss@example.com", "654321", now)
        .await
        .unwrap();
    assert!(found.is_none());

    let found = otp_repo::find_valid(&pool, Principal::Admin, "boss@example.com", "654321", now)
        .await
        .unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (_dir, pool) = test_pool().await;

    let now = shared::util::now_millis();
    otp_repo::create(
        &pool,
        &OtpChallenge {
            principal: Principal::Employee,
            email: "jane@example.com".into(),
            otp: "111222".into(),
            expire_time: now + 300_000,
            created_at: now,
        },
    )
    .await
    .unwrap();

    let removed = otp_repo::delete(&pool, Principal::Employee, "jane@example.com", "111222")
        .await
        .unwrap();
    assert_eq!(removed, 1);

    let removed = otp_repo::delete(&pool, Principal::Employee, "jane@example.com", "111222")
        .await
        .unwrap();
    assert_eq!(removed, 0);
}

#[tokio::test]
async fn failed_dispatch_fails_issue_and_clears_row() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    seed_employee(&pool, &admin.admin_id, &cat.category_id, "jane@example.com").await;

    let notifier = RecordingNotifier::failing();
    let flow = OtpFlow::new(pool.clone(), notifier, 5);

    let err = flow
        .issue(Principal::Employee, "jane@example.com")
        .await
        .unwrap_err();
    assert!(format!("{err}").contains("dispatch failed"));

    // No live challenge remains for the email
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM otp_challenges WHERE email = ?")
            .bind("jane@example.com")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 0);
}
