//! 工作会话和请假流程集成测试

mod common;

use attend_server::db::repository::{RepoError, employee, leave, session};
use common::{seed_admin, seed_category, seed_employee, test_pool};
use shared::models::{LeaveActor, LeaveApply, LeaveStatus, PENDING, WorkLogin, WorkLogout};
use shared::page::PageQuery;

fn work_login(employee_id: &str, date: &str) -> WorkLogin {
    WorkLogin {
        employee_id: employee_id.into(),
        login_date: date.into(),
        login_time: "09:00".into(),
        latitude: "41.15".into(),
        longitude: "-8.62".into(),
    }
}

fn work_logout(employee_id: &str, date: &str) -> WorkLogout {
    WorkLogout {
        employee_id: employee_id.into(),
        logout_date: date.into(),
        logout_time: "17:30".into(),
        work: "Shipped the quarterly report".into(),
    }
}

fn leave_apply(employee_id: &str) -> LeaveApply {
    LeaveApply {
        employee_id: employee_id.into(),
        leave_from: "2026-03-02".into(),
        leave_to: "2026-03-04".into(),
        leave_reason: "Family trip".into(),
    }
}

#[tokio::test]
async fn login_updates_snapshot_and_appends_history() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    let emp = seed_employee(&pool, &admin.admin_id, &cat.category_id, "e1@example.com").await;

    session::login(&pool, work_login(&emp.employee_id, "2026-03-02"))
        .await
        .unwrap();

    let snapshot = employee::find_by_id(&pool, &emp.employee_id)
        .await
        .unwrap()
        .unwrap();
    assert!(snapshot.login_status);
    assert_eq!(snapshot.work_date, "2026-03-02");
    assert_eq!(snapshot.logout_time, PENDING);
    assert_eq!(snapshot.uploaded_work, PENDING);

    let history = session::find_by_employee(&pool, &emp.employee_id, 10, 0)
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].logout_time, PENDING);
}

#[tokio::test]
async fn duplicate_same_day_login_rejected() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    let emp = seed_employee(&pool, &admin.admin_id, &cat.category_id, "e1@example.com").await;

    session::login(&pool, work_login(&emp.employee_id, "2026-03-02"))
        .await
        .unwrap();
    let err = session::login(&pool, work_login(&emp.employee_id, "2026-03-02"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)), "got {err:?}");

    // A different day opens a fresh session
    session::login(&pool, work_login(&emp.employee_id, "2026-03-03"))
        .await
        .unwrap();
}

#[tokio::test]
async fn logout_without_open_session_rejected() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    let emp = seed_employee(&pool, &admin.admin_id, &cat.category_id, "e1@example.com").await;

    // Never logged in that day
    let err = session::logout(&pool, work_logout(&emp.employee_id, "2026-03-02"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));

    // Close a real session, then a second logout must fail
    session::login(&pool, work_login(&emp.employee_id, "2026-03-02"))
        .await
        .unwrap();
    session::logout(&pool, work_logout(&emp.employee_id, "2026-03-02"))
        .await
        .unwrap();
    let err = session::logout(&pool, work_logout(&emp.employee_id, "2026-03-02"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));

    let snapshot = employee::find_by_id(&pool, &emp.employee_id)
        .await
        .unwrap()
        .unwrap();
    assert!(!snapshot.login_status);
    assert_eq!(snapshot.uploaded_work, "Shipped the quarterly report");
}

#[tokio::test]
async fn single_pending_leave_per_employee() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    let emp = seed_employee(&pool, &admin.admin_id, &cat.category_id, "e1@example.com").await;

    let first = leave::apply(&pool, leave_apply(&emp.employee_id)).await.unwrap();
    assert_eq!(first.status, LeaveStatus::Pending);
    assert_eq!(first.status_updated_by, LeaveActor::Employee);

    let err = leave::apply(&pool, leave_apply(&emp.employee_id))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));

    // Resolving the pending request frees the slot
    leave::update_status(&pool, &first.leave_id, LeaveStatus::Canceled, LeaveActor::Employee)
        .await
        .unwrap();
    leave::apply(&pool, leave_apply(&emp.employee_id)).await.unwrap();
}

#[tokio::test]
async fn terminal_leave_states_are_final() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    let emp = seed_employee(&pool, &admin.admin_id, &cat.category_id, "e1@example.com").await;

    let request = leave::apply(&pool, leave_apply(&emp.employee_id)).await.unwrap();

    let granted =
        leave::update_status(&pool, &request.leave_id, LeaveStatus::Granted, LeaveActor::Admin)
            .await
            .unwrap();
    assert_eq!(granted.status, LeaveStatus::Granted);
    assert_eq!(granted.status_updated_by, LeaveActor::Admin);

    // Granted request can no longer be canceled, by anyone
    let err = leave::update_status(
        &pool,
        &request.leave_id,
        LeaveStatus::Canceled,
        LeaveActor::Employee,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));

    // Unknown id is NotFound, not Conflict
    let err = leave::update_status(&pool, "missing", LeaveStatus::Granted, LeaveActor::Admin)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn history_pagination_sweep_matches_total() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    let emp = seed_employee(&pool, &admin.admin_id, &cat.category_id, "e1@example.com").await;

    for day in 1..=25 {
        let date = format!("2026-03-{day:02}");
        session::login(&pool, work_login(&emp.employee_id, &date))
            .await
            .unwrap();
        session::logout(&pool, work_logout(&emp.employee_id, &date))
            .await
            .unwrap();
    }

    let total = session::count_by_employee(&pool, &emp.employee_id)
        .await
        .unwrap();
    assert_eq!(total, 25);

    let mut seen = 0;
    let mut offset = 0;
    loop {
        let page = PageQuery::new(10, offset);
        let items = session::find_by_employee(&pool, &emp.employee_id, page.limit, page.offset)
            .await
            .unwrap();
        if items.is_empty() {
            break;
        }
        seen += items.len() as i64;
        offset += page.limit;
    }
    assert_eq!(seen, total);

    // Admin-scope history sees the same ledger
    let admin_total = session::count_by_admin(&pool, &admin.admin_id).await.unwrap();
    assert_eq!(admin_total, 25);
}

#[tokio::test]
async fn leave_status_filter_counts_match() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    let emp = seed_employee(&pool, &admin.admin_id, &cat.category_id, "e1@example.com").await;

    let a = leave::apply(&pool, leave_apply(&emp.employee_id)).await.unwrap();
    leave::update_status(&pool, &a.leave_id, LeaveStatus::Granted, LeaveActor::Admin)
        .await
        .unwrap();
    let b = leave::apply(&pool, leave_apply(&emp.employee_id)).await.unwrap();
    leave::update_status(&pool, &b.leave_id, LeaveStatus::Canceled, LeaveActor::Employee)
        .await
        .unwrap();
    leave::apply(&pool, leave_apply(&emp.employee_id)).await.unwrap();

    let all = leave::count_by_employee(&pool, &emp.employee_id, None)
        .await
        .unwrap();
    assert_eq!(all, 3);
    for (status, expected) in [
        (LeaveStatus::Pending, 1),
        (LeaveStatus::Granted, 1),
        (LeaveStatus::Canceled, 1),
    ] {
        let count = leave::count_by_employee(&pool, &emp.employee_id, Some(status))
            .await
            .unwrap();
        assert_eq!(count, expected, "status {status}");
        let items =
            leave::find_by_employee(&pool, &emp.employee_id, Some(status), 10, 0)
                .await
                .unwrap();
        assert_eq!(items.len() as i64, expected);
    }
}

#[tokio::test]
async fn admin_pending_queue_covers_all_employees() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let other = seed_admin(&pool, "other@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    let other_cat = seed_category(&pool, &other.admin_id).await;

    let e1 = seed_employee(&pool, &admin.admin_id, &cat.category_id, "e1@example.com").await;
    let e2 = seed_employee(&pool, &admin.admin_id, &cat.category_id, "e2@example.com").await;
    let outsider =
        seed_employee(&pool, &other.admin_id, &other_cat.category_id, "e3@example.com").await;

    leave::apply(&pool, leave_apply(&e1.employee_id)).await.unwrap();
    leave::apply(&pool, leave_apply(&e2.employee_id)).await.unwrap();
    leave::apply(&pool, leave_apply(&outsider.employee_id)).await.unwrap();

    let total = leave::count_pending_by_admin(&pool, &admin.admin_id)
        .await
        .unwrap();
    assert_eq!(total, 2);

    let entries = leave::find_pending_by_admin(&pool, &admin.admin_id, 10, 0)
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.category_name == "Engineering"));
    assert!(entries.iter().all(|e| e.employee_id != outsider.employee_id));
}

#[tokio::test]
async fn admin_pending_queue_newest_first() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    let e1 = seed_employee(&pool, &admin.admin_id, &cat.category_id, "e1@example.com").await;
    let e2 = seed_employee(&pool, &admin.admin_id, &cat.category_id, "e2@example.com").await;

    let older = leave::apply(&pool, leave_apply(&e1.employee_id)).await.unwrap();
    // Distinct created_at millis for a deterministic order
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    let newer = leave::apply(&pool, leave_apply(&e2.employee_id)).await.unwrap();

    let entries = leave::find_pending_by_admin(&pool, &admin.admin_id, 10, 0)
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].leave_id, newer.leave_id);
    assert_eq!(entries[1].leave_id, older.leave_id);
    assert!(entries[0].created_at > entries[1].created_at);
}

/// 端到端：建号、打卡一整天、请假获批、历史汇总
#[tokio::test]
async fn full_workflow_scenario() {
    let (_dir, pool) = test_pool().await;
    let admin = seed_admin(&pool, "boss@example.com").await;
    let cat = seed_category(&pool, &admin.admin_id).await;
    let emp = seed_employee(&pool, &admin.admin_id, &cat.category_id, "jane@example.com").await;

    // Day 1: full session
    session::login(&pool, work_login(&emp.employee_id, "2026-03-02"))
        .await
        .unwrap();
    session::logout(&pool, work_logout(&emp.employee_id, "2026-03-02"))
        .await
        .unwrap();

    // Leave request, granted by the admin
    let request = leave::apply(&pool, leave_apply(&emp.employee_id)).await.unwrap();
    let granted =
        leave::update_status(&pool, &request.leave_id, LeaveStatus::Granted, LeaveActor::Admin)
            .await
            .unwrap();
    assert_eq!(granted.status, LeaveStatus::Granted);

    // Day 5: back at work
    session::login(&pool, work_login(&emp.employee_id, "2026-03-05"))
        .await
        .unwrap();

    let history = session::find_by_admin(&pool, &admin.admin_id, 10, 0)
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].name, "Test Employee");
    // Newest first: day 5 is still open
    assert_eq!(history[0].work_date, "2026-03-05");
    assert_eq!(history[0].logout_time, PENDING);
    assert_eq!(history[1].work_date, "2026-03-02");
    assert_eq!(history[1].logout_time, "17:30");
}
