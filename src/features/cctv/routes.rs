use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::cctv::handlers;
use crate::features::cctv::services::CctvService;

/// Create routes for the CCTV feature
///
/// The camera directory is public, same as the feed it comes from.
pub fn routes(service: Arc<CctvService>) -> Router {
    Router::new()
        .route("/api/cctv", get(handlers::list_cameras))
        .route("/api/cctv/districts", get(handlers::list_districts))
        .route("/api/cctv/{id}", get(handlers::get_camera))
        .with_state(service)
}
