use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::handlers::{auth, health, records, settings};
use crate::middleware::SessionContext;

pub fn create_router(
    records_state: records::RecordsState,
    auth_state: auth::AuthState,
    session_ctx: SessionContext,
) -> Router {
    Router::new()
        // Log routes
        .route("/", get(records::index))
        .route("/records", post(records::create))
        .route("/records/previous", get(records::previous))
        .with_state(records_state)
        // Auth routes
        .route(
            "/auth/login",
            get(auth::login_page).post(auth::login_submit),
        )
        .route(
            "/auth/register",
            get(auth::register_page).post(auth::register_submit),
        )
        .route("/auth/logout", post(auth::logout))
        .with_state(auth_state)
        // Settings routes
        .route("/settings", get(settings::index))
        // Health check
        .route("/healthz", get(health::health_check))
        // Session lookup via Extension layer
        .layer(Extension(session_ctx))
}
