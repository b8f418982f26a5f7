use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::features::reports::dtos::MAX_PHOTO_SIZE;
use crate::features::reports::handlers::{self, ReportState};

/// Protected report routes (require JWT authentication)
pub fn protected_routes(state: ReportState) -> Router {
    Router::new()
        .route(
            "/api/reports",
            // Allow body size up to MAX_PHOTO_SIZE + buffer for multipart overhead
            post(handlers::create_report)
                .layer(DefaultBodyLimit::max(MAX_PHOTO_SIZE + 1024 * 1024)),
        )
        .route(
            "/api/reports/{id}/confirmations",
            post(handlers::confirm_report),
        )
        .route("/api/reports/{id}", delete(handlers::delete_report))
        .with_state(state)
}

/// Public report routes (no authentication required)
pub fn public_routes(state: ReportState) -> Router {
    Router::new()
        .route("/api/reports", get(handlers::list_reports))
        .route("/api/reports/stream", get(handlers::stream_reports))
        .route("/api/reports/{id}", get(handlers::get_report))
        .with_state(state)
}
