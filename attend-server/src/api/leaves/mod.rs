//! Leave API 模块 (请假流程)

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/leaves", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::apply))
        .route("/pending", get(handler::pending))
        .route("/{id}/grant", post(handler::grant))
        .route("/{id}/cancel", post(handler::cancel))
}
