//! Session API Handlers
//!
//! 打卡主体永远取自令牌，请求体只携带日期、时刻和位置。

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::info;

use crate::auth::{CurrentUser, require_admin};
use crate::core::ServerState;
use crate::db::repository::session;
use crate::utils::validation::{MAX_NOTE_LEN, validate_coordinates, validate_required_text};
use crate::utils::{AppResponse, AppResult, ok, ok_with_message, time};
use shared::models::{AdminWorkHistoryEntry, WorkHistoryEntry, WorkLogin, WorkLogout};
use shared::page::{Paged, PageQuery};

/// 打卡上班请求体
#[derive(Debug, Deserialize)]
pub struct WorkLoginRequest {
    pub login_date: String,
    pub login_time: String,
    pub latitude: String,
    pub longitude: String,
}

/// 打卡下班请求体
#[derive(Debug, Deserialize)]
pub struct WorkLogoutRequest {
    pub logout_date: String,
    pub logout_time: String,
    /// 当日工作内容
    pub work: String,
}

/// POST /api/sessions/login - 打卡上班
pub async fn work_login(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<WorkLoginRequest>,
) -> AppResult<Json<AppResponse<()>>> {
    time::parse_date(&payload.login_date)?;
    time::parse_clock(&payload.login_time)?;
    validate_coordinates(&payload.latitude, &payload.longitude)?;

    session::login(
        &state.pool,
        WorkLogin {
            employee_id: user.id.clone(),
            login_date: payload.login_date.clone(),
            login_time: payload.login_time,
            latitude: payload.latitude,
            longitude: payload.longitude,
        },
    )
    .await?;

    info!(employee_id = %user.id, work_date = %payload.login_date, "Work session opened");
    Ok(ok_with_message((), "Logged in"))
}

/// POST /api/sessions/logout - 打卡下班
pub async fn work_logout(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<WorkLogoutRequest>,
) -> AppResult<Json<AppResponse<()>>> {
    time::parse_date(&payload.logout_date)?;
    time::parse_clock(&payload.logout_time)?;
    validate_required_text(&payload.work, "work", MAX_NOTE_LEN)?;

    session::logout(
        &state.pool,
        WorkLogout {
            employee_id: user.id.clone(),
            logout_date: payload.logout_date.clone(),
            logout_time: payload.logout_time,
            work: payload.work,
        },
    )
    .await?;

    info!(employee_id = %user.id, work_date = %payload.logout_date, "Work session closed");
    Ok(ok_with_message((), "Logged out"))
}

/// GET /api/sessions/history - 当前员工的打卡历史 (分页)
pub async fn my_history(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<AppResponse<Paged<WorkHistoryEntry>>>> {
    let page = page.normalized();

    let total = session::count_by_employee(&state.pool, &user.id).await?;
    let items =
        session::find_by_employee(&state.pool, &user.id, page.limit, page.offset).await?;

    Ok(ok(Paged { total, items }))
}

/// GET /api/sessions/history/all - 名下所有员工的打卡历史 (管理员, 分页)
pub async fn admin_history(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<AppResponse<Paged<AdminWorkHistoryEntry>>>> {
    require_admin(&user)?;
    let page = page.normalized();

    let total = session::count_by_admin(&state.pool, &user.id).await?;
    let items = session::find_by_admin(&state.pool, &user.id, page.limit, page.offset).await?;

    Ok(ok(Paged { total, items }))
}
