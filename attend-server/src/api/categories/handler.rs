//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::auth::{CurrentUser, require_admin};
use crate::core::ServerState;
use crate::db::repository::category;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};
use shared::models::{CategoryCreate, EmployeeCategory};

/// GET /api/categories - 当前管理员的分组列表
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<AppResponse<Vec<EmployeeCategory>>>> {
    require_admin(&user)?;
    let categories = category::find_all_by_admin(&state.pool, &user.id).await?;
    Ok(ok(categories))
}

/// POST /api/categories - 创建分组
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<AppResponse<EmployeeCategory>>> {
    require_admin(&user)?;
    validate_required_text(&payload.category_name, "category_name", MAX_NAME_LEN)?;
    validate_required_text(
        &payload.category_description,
        "category_description",
        MAX_NOTE_LEN,
    )?;

    let created = category::create(&state.pool, &user.id, payload).await?;
    info!(category_id = %created.category_id, "Category created");
    Ok(ok(created))
}

/// DELETE /api/categories/:id - 删除分组 (级联删除其员工)
pub async fn remove(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    require_admin(&user)?;

    if !category::delete(&state.pool, &user.id, &id).await? {
        return Err(AppError::not_found(format!("Category not found: {id}")));
    }

    info!(category_id = %id, "Category deleted");
    Ok(ok_with_message((), "Category deleted"))
}
