use crate::auth::JwtConfig;

/// 服务器配置
///
/// 环境变量只在这里读取一次，其余代码一律通过 [`Config`] 取值。
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_FILE | attend.db | 数据库文件名 (相对 WORK_DIR) |
/// | JWT_SECRET | (开发默认值) | JWT 密钥，至少 32 字节 |
/// | JWT_EXPIRATION_MINUTES | 1440 | 令牌有效期 (分钟) |
/// | JWT_ISSUER | attend-server | 令牌签发者 |
/// | JWT_AUDIENCE | attend-clients | 令牌受众 |
/// | OTP_TTL_MINUTES | 5 | 验证码有效期 (分钟) |
/// | EMAIL_WEBHOOK_URL | (无) | 邮件中继 webhook，未设置时仅记录日志 |
/// | ENVIRONMENT | development | 运行环境 |
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库文件名 (相对 work_dir)
    pub database_file: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 验证码有效期 (分钟)
    pub otp_ttl_minutes: i64,
    /// 邮件中继 webhook URL
    pub email_webhook_url: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_file: std::env::var("DATABASE_FILE").unwrap_or_else(|_| "attend.db".into()),
            jwt: JwtConfig {
                secret: std::env::var("JWT_SECRET").unwrap_or_else(|_| {
                    tracing::warn!("JWT_SECRET not set, using development-only default");
                    "attend-server-development-secret-key!".into()
                }),
                expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(1440),
                issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "attend-server".into()),
                audience: std::env::var("JWT_AUDIENCE")
                    .unwrap_or_else(|_| "attend-clients".into()),
            },
            otp_ttl_minutes: std::env::var("OTP_TTL_MINUTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            email_webhook_url: std::env::var("EMAIL_WEBHOOK_URL").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 数据库文件完整路径
    pub fn database_path(&self) -> String {
        format!("{}/{}", self.work_dir, self.database_file)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
