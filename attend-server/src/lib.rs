//! Attend Server - 考勤与请假流程服务
//!
//! # 架构概述
//!
//! 本模块是 Attend Server 的主入口，提供以下核心功能：
//!
//! - **工作会话** (`db/repository/session`): 一天一会话的打卡状态机
//! - **请假流程** (`db/repository/leave`): pending -> granted/canceled 状态机
//! - **找回口令** (`services/otp`): 限时一次性验证码，后台到期清理
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! attend-server/src/
//! ├── core/          # 配置、状态
//! ├── auth/          # JWT 认证、口令哈希
//! ├── services/      # 邮件投递、验证码流程
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、日志、校验、时间
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, ServerState};
pub use routes::{build_app, build_router};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
