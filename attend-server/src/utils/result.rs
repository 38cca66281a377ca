//! 应用统一结果类型

use super::error::AppError;

/// 应用统一结果类型
pub type AppResult<T> = Result<T, AppError>;
