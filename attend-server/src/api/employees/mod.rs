//! Employee API 模块 (员工管理与个人资料)

mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", delete(handler::remove))
        .route("/me", get(handler::profile).put(handler::update_profile))
        .route("/password", put(handler::update_password))
}
