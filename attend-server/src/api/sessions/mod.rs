//! Session API 模块 (工作打卡与历史)

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sessions", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::work_login))
        .route("/logout", post(handler::work_logout))
        .route("/history", get(handler::my_history))
        .route("/history/all", get(handler::admin_history))
}
