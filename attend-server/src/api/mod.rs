//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录、注册、找回口令
//! - [`admins`] - 管理员账号接口
//! - [`categories`] - 员工分组管理接口
//! - [`employees`] - 员工管理和个人资料接口
//! - [`sessions`] - 工作打卡和历史接口
//! - [`leaves`] - 请假流程接口

pub mod admins;
pub mod auth;
pub mod categories;
pub mod employees;
pub mod health;
pub mod leaves;
pub mod sessions;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
