//! Admin API Handlers

use axum::{Json, extract::State};
use tracing::info;

use crate::auth::{CurrentUser, hash_password, require_admin};
use crate::core::ServerState;
use crate::db::repository::admin;
use crate::utils::validation::validate_password;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};
use shared::models::{AdminResponse, PasswordUpdate};

/// GET /api/admins/me - 当前管理员资料
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<AppResponse<AdminResponse>>> {
    require_admin(&user)?;

    let account = admin::find_by_id(&state.pool, &user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Admin account not found"))?;

    Ok(ok(AdminResponse {
        admin_id: account.admin_id,
        name: account.name,
        dob: account.dob,
        email: account.email,
        phone_number: account.phone_number,
        position: account.position,
        created_at: account.created_at,
    }))
}

/// PUT /api/admins/password - 修改口令
pub async fn update_password(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PasswordUpdate>,
) -> AppResult<Json<AppResponse<()>>> {
    require_admin(&user)?;
    validate_password(&payload.password)?;

    let hash = hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
    admin::update_password(&state.pool, &user.email, &hash).await?;

    info!(admin_id = %user.id, "Admin password updated");
    Ok(ok_with_message((), "Password updated"))
}
