//! Auth API Handlers
//!
//! 登录口令校验失败和邮箱不存在统一返回同一错误，避免账号枚举。
//! OTP 验证通过后签发正常令牌，改口令走已认证的 password 接口。

use axum::{Json, extract::State};
use tracing::info;

use crate::auth::{Role, hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::{admin, employee};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_password, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};
use shared::models::{
    AdminCreate, AdminResponse, ForgotPasswordRequest, LoginRequest, LoginResponse, Principal,
    ValidateOtpRequest,
};

/// POST /api/auth/admin/register - 注册管理员账号
pub async fn register_admin(
    State(state): State<ServerState>,
    Json(mut payload): Json<AdminCreate>,
) -> AppResult<Json<AppResponse<AdminResponse>>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.dob, "dob", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.phone_number, "phone_number", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.position, "position", MAX_NAME_LEN)?;
    validate_email(&payload.email)?;
    validate_password(&payload.password)?;

    payload.password = hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let created = admin::create(&state.pool, payload).await?;
    info!(admin_id = %created.admin_id, "Admin registered");

    Ok(ok(AdminResponse {
        admin_id: created.admin_id,
        name: created.name,
        dob: created.dob,
        email: created.email,
        phone_number: created.phone_number,
        position: created.position,
        created_at: created.created_at,
    }))
}

/// POST /api/auth/admin/login - 管理员登录
pub async fn login_admin(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    let account = admin::find_by_email(&state.pool, &payload.email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&payload.password, &account.password) {
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(
            &account.admin_id,
            &account.email,
            &account.name,
            Role::Admin,
            &account.admin_id,
        )
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    info!(admin_id = %account.admin_id, "Admin logged in");
    Ok(ok(LoginResponse { token }))
}

/// POST /api/auth/employee/login - 员工登录
pub async fn login_employee(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    let account = employee::find_by_email(&state.pool, &payload.email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&payload.password, &account.password) {
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(
            &account.employee_id,
            &account.email,
            &account.name,
            Role::Employee,
            &account.admin_id,
        )
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    info!(employee_id = %account.employee_id, "Employee logged in");
    Ok(ok(LoginResponse { token }))
}

/// POST /api/auth/admin/forgot-password - 管理员找回口令
pub async fn forgot_password_admin(
    State(state): State<ServerState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> AppResult<Json<AppResponse<()>>> {
    validate_email(&payload.email)?;
    if !admin::email_exists(&state.pool, &payload.email).await? {
        return Err(AppError::not_found("Email not registered"));
    }

    state.otp.issue(Principal::Admin, &payload.email).await?;
    Ok(ok_with_message((), "OTP sent"))
}

/// POST /api/auth/employee/forgot-password - 员工找回口令
pub async fn forgot_password_employee(
    State(state): State<ServerState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> AppResult<Json<AppResponse<()>>> {
    validate_email(&payload.email)?;
    if !employee::email_exists(&state.pool, &payload.email).await? {
        return Err(AppError::not_found("Email not registered"));
    }

    state.otp.issue(Principal::Employee, &payload.email).await?;
    Ok(ok_with_message((), "OTP sent"))
}

/// POST /api/auth/admin/validate-otp - 校验验证码并签发令牌
pub async fn validate_otp_admin(
    State(state): State<ServerState>,
    Json(payload): Json<ValidateOtpRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    let account = admin::find_by_email(&state.pool, &payload.email)
        .await?
        .ok_or_else(|| AppError::not_found("Email not registered"))?;

    state
        .otp
        .validate(Principal::Admin, &payload.email, &payload.otp)
        .await?;

    let token = state
        .jwt_service
        .generate_token(
            &account.admin_id,
            &account.email,
            &account.name,
            Role::Admin,
            &account.admin_id,
        )
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    Ok(ok(LoginResponse { token }))
}

/// POST /api/auth/employee/validate-otp - 校验验证码并签发令牌
pub async fn validate_otp_employee(
    State(state): State<ServerState>,
    Json(payload): Json<ValidateOtpRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    let account = employee::find_by_email(&state.pool, &payload.email)
        .await?
        .ok_or_else(|| AppError::not_found("Email not registered"))?;

    state
        .otp
        .validate(Principal::Employee, &payload.email, &payload.otp)
        .await?;

    let token = state
        .jwt_service
        .generate_token(
            &account.employee_id,
            &account.email,
            &account.name,
            Role::Employee,
            &account.admin_id,
        )
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    Ok(ok(LoginResponse { token }))
}
