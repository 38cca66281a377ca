//! 集成测试共享辅助：临时数据库和测试账号
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tempfile::TempDir;

use attend_server::auth::hash_password;
use attend_server::db::DbService;
use attend_server::db::repository::{admin, category, employee};
use attend_server::services::{EmailMessage, Notifier, NotifyError};
use shared::models::{Admin, AdminCreate, CategoryCreate, Employee, EmployeeCategory, EmployeeCreate};

/// Fresh on-disk database with migrations applied. Keep the TempDir
/// alive for the duration of the test.
pub async fn test_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.db");
    let db = DbService::new(path.to_str().unwrap())
        .await
        .expect("database init");
    (dir, db.pool)
}

/// Notifier that records every message; can be switched to fail.
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<EmailMessage>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: EmailMessage) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError("relay unavailable".into()));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

pub async fn seed_admin(pool: &SqlitePool, email: &str) -> Admin {
    admin::create(
        pool,
        AdminCreate {
            name: "Test Admin".into(),
            dob: "1980-01-01".into(),
            email: email.into(),
            phone_number: "+351000000000".into(),
            password: hash_password("admin-password").unwrap(),
            position: "Manager".into(),
        },
    )
    .await
    .expect("seed admin")
}

pub async fn seed_category(pool: &SqlitePool, admin_id: &str) -> EmployeeCategory {
    category::create(
        pool,
        admin_id,
        CategoryCreate {
            category_name: "Engineering".into(),
            category_description: "Product engineers".into(),
        },
    )
    .await
    .expect("seed category")
}

pub async fn seed_employee(
    pool: &SqlitePool,
    admin_id: &str,
    category_id: &str,
    email: &str,
) -> Employee {
    employee::create(
        pool,
        admin_id,
        EmployeeCreate {
            category_id: category_id.into(),
            name: "Test Employee".into(),
            dob: "1995-06-15".into(),
            email: email.into(),
            phone_number: "+351111111111".into(),
            password: hash_password("employee-password").unwrap(),
            position: "Engineer".into(),
        },
    )
    .await
    .expect("seed employee")
}
