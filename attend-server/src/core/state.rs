use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::services::{LogNotifier, Notifier, OtpFlow, WebhookNotifier};
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆的成本极低。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | pool | SQLite 连接池 |
/// | jwt_service | JWT 认证服务 |
/// | notifier | 邮件投递服务 |
/// | otp | 验证码流程 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// JWT 认证服务
    pub jwt_service: Arc<JwtService>,
    /// 邮件投递服务
    pub notifier: Arc<dyn Notifier>,
    /// 验证码流程
    pub otp: OtpFlow,
}

impl ServerState {
    /// 初始化所有服务
    pub async fn initialize(config: Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db = DbService::new(&config.database_path()).await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let notifier: Arc<dyn Notifier> = match &config.email_webhook_url {
            Some(url) => Arc::new(WebhookNotifier::new(url.clone())),
            None => {
                tracing::warn!("EMAIL_WEBHOOK_URL not set, emails will only be logged");
                Arc::new(LogNotifier)
            }
        };

        let otp = OtpFlow::new(db.pool.clone(), notifier.clone(), config.otp_ttl_minutes);

        Ok(Self {
            config,
            pool: db.pool,
            jwt_service,
            notifier,
            otp,
        })
    }

    /// 构造测试状态 (内存外的临时数据库由调用方提供)
    pub fn for_tests(pool: SqlitePool, notifier: Arc<dyn Notifier>) -> Self {
        let config = Config {
            work_dir: ".".into(),
            http_port: 0,
            database_file: "test.db".into(),
            jwt: crate::auth::JwtConfig {
                secret: "test-secret-key-at-least-32-bytes-long!".into(),
                expiration_minutes: 60,
                issuer: "attend-server".into(),
                audience: "attend-clients".into(),
            },
            otp_ttl_minutes: 5,
            email_webhook_url: None,
            environment: "test".into(),
        };
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let otp = OtpFlow::new(pool.clone(), notifier.clone(), config.otp_ttl_minutes);
        Self {
            config,
            pool,
            jwt_service,
            notifier,
            otp,
        }
    }
}
