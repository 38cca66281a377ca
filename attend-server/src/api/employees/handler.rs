//! Employee API Handlers
//!
//! 管理员维护员工账号，员工维护自己的资料和口令。
//! 新员工建号后投递欢迎邮件，投递失败只记日志，不回滚建号。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::{info, warn};

use crate::auth::{CurrentUser, hash_password, require_admin};
use crate::core::ServerState;
use crate::db::repository::{category, employee};
use crate::services::EmailMessage;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_password, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};
use shared::models::{
    EmployeeCreate, EmployeeProfile, EmployeeResponse, PasswordUpdate, ProfileUpdate,
};
use shared::page::{Paged, PageQuery};

fn validate_person_fields(
    name: &str,
    dob: &str,
    email: &str,
    phone_number: &str,
    position: &str,
) -> AppResult<()> {
    validate_required_text(name, "name", MAX_NAME_LEN)?;
    validate_required_text(dob, "dob", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(phone_number, "phone_number", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(position, "position", MAX_NAME_LEN)?;
    validate_email(email)?;
    Ok(())
}

/// GET /api/employees - 当前管理员的员工分页列表
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<AppResponse<Paged<EmployeeResponse>>>> {
    require_admin(&user)?;
    let page = page.normalized();

    let total = employee::count_by_admin(&state.pool, &user.id).await?;
    let items =
        employee::find_all_by_admin(&state.pool, &user.id, page.limit, page.offset).await?;

    Ok(ok(Paged { total, items }))
}

/// POST /api/employees - 创建员工账号
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(mut payload): Json<EmployeeCreate>,
) -> AppResult<Json<AppResponse<EmployeeResponse>>> {
    require_admin(&user)?;
    validate_person_fields(
        &payload.name,
        &payload.dob,
        &payload.email,
        &payload.phone_number,
        &payload.position,
    )?;
    validate_password(&payload.password)?;

    // Category must belong to this admin
    let cat = category::find_by_id(&state.pool, &payload.category_id)
        .await?
        .filter(|c| c.admin_id == user.id)
        .ok_or_else(|| {
            AppError::not_found(format!("Category not found: {}", payload.category_id))
        })?;

    let initial_password = payload.password.clone();
    payload.password = hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let created = employee::create(&state.pool, &user.id, payload).await?;
    info!(employee_id = %created.employee_id, "Employee created");

    let mail = EmailMessage::welcome(&created.email, &created.name, &initial_password);
    if let Err(e) = state.notifier.send(mail).await {
        warn!(employee_id = %created.employee_id, error = %e, "Welcome email failed");
    }

    Ok(ok(EmployeeResponse {
        employee_id: created.employee_id,
        name: created.name,
        dob: created.dob,
        email: created.email,
        phone_number: created.phone_number,
        position: created.position,
        category_id: created.category_id,
        category_name: cat.category_name,
        login_status: created.login_status,
        latitude: created.latitude,
        longitude: created.longitude,
    }))
}

/// DELETE /api/employees/:id - 删除员工 (级联删除其流水)
pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    require_admin(&user)?;

    if !employee::delete(&state.pool, &user.id, &id).await? {
        return Err(AppError::not_found(format!("Employee not found: {id}")));
    }

    info!(employee_id = %id, "Employee deleted");
    Ok(ok_with_message((), "Employee deleted"))
}

/// GET /api/employees/me - 当前员工资料
pub async fn profile(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<AppResponse<EmployeeProfile>>> {
    let profile = employee::find_profile(&state.pool, &user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee account not found"))?;
    Ok(ok(profile))
}

/// PUT /api/employees/me - 更新当前员工资料
pub async fn update_profile(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ProfileUpdate>,
) -> AppResult<Json<AppResponse<()>>> {
    validate_person_fields(
        &payload.name,
        &payload.dob,
        &payload.email,
        &payload.phone_number,
        &payload.position,
    )?;

    // The target category must exist under the employee's admin
    category::find_by_id(&state.pool, &payload.category_id)
        .await?
        .filter(|c| c.admin_id == user.admin_id)
        .ok_or_else(|| {
            AppError::not_found(format!("Category not found: {}", payload.category_id))
        })?;

    employee::update_profile(&state.pool, &user.id, payload).await?;
    info!(employee_id = %user.id, "Profile updated");
    Ok(ok_with_message((), "Profile updated"))
}

/// PUT /api/employees/password - 修改口令
pub async fn update_password(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PasswordUpdate>,
) -> AppResult<Json<AppResponse<()>>> {
    validate_password(&payload.password)?;

    let hash = hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
    employee::update_password(&state.pool, &user.email, &hash).await?;

    info!(employee_id = %user.id, "Employee password updated");
    Ok(ok_with_message((), "Password updated"))
}
