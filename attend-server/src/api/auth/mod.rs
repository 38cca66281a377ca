//! Auth API 模块 (登录、注册、找回口令)
//!
//! 本模块下所有路由均为公开路由，认证中间件放行 `/api/auth/*`。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/admin/register", post(handler::register_admin))
        .route("/admin/login", post(handler::login_admin))
        .route("/admin/forgot-password", post(handler::forgot_password_admin))
        .route("/admin/validate-otp", post(handler::validate_otp_admin))
        .route("/employee/login", post(handler::login_employee))
        .route(
            "/employee/forgot-password",
            post(handler::forgot_password_employee),
        )
        .route(
            "/employee/validate-otp",
            post(handler::validate_otp_employee),
        )
}
