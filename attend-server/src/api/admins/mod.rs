//! Admin API 模块 (管理员账号)

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admins", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/me", get(handler::me))
        .route("/password", put(handler::update_password))
}
