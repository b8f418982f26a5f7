use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::admins::handlers;
use crate::features::admins::services::AdminService;

/// Create routes for the admins feature
///
/// All routes require authentication; everything except `/me` is
/// additionally gated on the caller being an admin.
pub fn routes(service: Arc<AdminService>) -> Router {
    Router::new()
        .route(
            "/api/admins",
            get(handlers::list_admins).post(handlers::add_admin),
        )
        .route("/api/admins/me", get(handlers::admin_status))
        .route("/api/admins/{email}", delete(handlers::remove_admin))
        .with_state(service)
}
