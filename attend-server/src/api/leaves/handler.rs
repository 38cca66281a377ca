//! Leave API Handlers
//!
//! 取消操作员工和管理员共用：员工只能取消自己的申请，管理员
//! 只能取消名下员工的申请，记录的操作者取决于调用方角色。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::info;

use crate::auth::{CurrentUser, require_admin};
use crate::core::ServerState;
use crate::db::repository::{employee, leave};
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResponse, AppResult, ok, time};
use shared::models::{
    LeaveActor, LeaveApply, LeaveEntry, LeaveRequest, LeaveStatus, PendingLeaveEntry,
};
use shared::page::{Paged, PageQuery};

/// 请假申请请求体
#[derive(Debug, Deserialize)]
pub struct LeaveApplyRequest {
    pub leave_from: String,
    pub leave_to: String,
    pub leave_reason: String,
}

/// 请假列表查询参数 (分页 + 可选状态过滤)
///
/// 分页字段内联而非嵌套: serde_urlencoded 不支持 flatten 的数字字段。
#[derive(Debug, Deserialize)]
pub struct LeaveListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    pub status: Option<LeaveStatus>,
}

fn default_limit() -> i64 {
    shared::page::DEFAULT_PAGE_LIMIT
}

/// POST /api/leaves - 提交请假申请
pub async fn apply(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<LeaveApplyRequest>,
) -> AppResult<Json<AppResponse<LeaveRequest>>> {
    time::validate_date_range(&payload.leave_from, &payload.leave_to)?;
    validate_required_text(&payload.leave_reason, "leave_reason", MAX_NOTE_LEN)?;

    let created = leave::apply(
        &state.pool,
        LeaveApply {
            employee_id: user.id.clone(),
            leave_from: payload.leave_from,
            leave_to: payload.leave_to,
            leave_reason: payload.leave_reason,
        },
    )
    .await?;

    info!(leave_id = %created.leave_id, employee_id = %user.id, "Leave requested");
    Ok(ok(created))
}

/// GET /api/leaves - 当前员工的请假历史 (分页, 可按状态过滤)
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<LeaveListQuery>,
) -> AppResult<Json<AppResponse<Paged<LeaveEntry>>>> {
    let page = PageQuery::new(query.limit, query.offset);

    let total = leave::count_by_employee(&state.pool, &user.id, query.status).await?;
    let items = leave::find_by_employee(
        &state.pool,
        &user.id,
        query.status,
        page.limit,
        page.offset,
    )
    .await?;

    Ok(ok(Paged { total, items }))
}

/// GET /api/leaves/pending - 名下员工的待审批申请 (管理员, 分页)
pub async fn pending(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<AppResponse<Paged<PendingLeaveEntry>>>> {
    require_admin(&user)?;
    let page = page.normalized();

    let total = leave::count_pending_by_admin(&state.pool, &user.id).await?;
    let items =
        leave::find_pending_by_admin(&state.pool, &user.id, page.limit, page.offset).await?;

    Ok(ok(Paged { total, items }))
}

/// POST /api/leaves/:id/grant - 批准申请 (管理员)
pub async fn grant(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<LeaveRequest>>> {
    require_admin(&user)?;
    authorize(&state, &user, &id).await?;

    let updated =
        leave::update_status(&state.pool, &id, LeaveStatus::Granted, LeaveActor::Admin).await?;

    info!(leave_id = %id, admin_id = %user.id, "Leave granted");
    Ok(ok(updated))
}

/// POST /api/leaves/:id/cancel - 取消申请 (员工或管理员)
pub async fn cancel(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<LeaveRequest>>> {
    authorize(&state, &user, &id).await?;

    let actor = if user.is_admin() {
        LeaveActor::Admin
    } else {
        LeaveActor::Employee
    };
    let updated = leave::update_status(&state.pool, &id, LeaveStatus::Canceled, actor).await?;

    info!(leave_id = %id, actor = %actor, "Leave canceled");
    Ok(ok(updated))
}

/// 校验请求者对该申请的操作权
async fn authorize(state: &ServerState, user: &CurrentUser, leave_id: &str) -> AppResult<()> {
    let request = leave::find_by_id(&state.pool, leave_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Leave request not found: {leave_id}")))?;

    if user.is_admin() {
        let owner = employee::find_by_id(&state.pool, &request.employee_id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee account not found"))?;
        if owner.admin_id != user.id {
            return Err(AppError::forbidden("Leave request belongs to another team"));
        }
    } else if request.employee_id != user.id {
        return Err(AppError::forbidden("Leave request belongs to another employee"));
    }
    Ok(())
}
