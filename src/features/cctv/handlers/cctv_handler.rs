use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::cctv::dtos::CctvListQuery;
use crate::features::cctv::models::CctvCamera;
use crate::features::cctv::services::CctvService;
use crate::shared::types::{ApiResponse, Meta};

/// List active CCTV cameras (public)
#[utoipa::path(
    get,
    path = "/api/cctv",
    params(CctvListQuery),
    responses(
        (status = 200, description = "List of active cameras", body = ApiResponse<Vec<CctvCamera>>)
    ),
    tag = "cctv"
)]
pub async fn list_cameras(
    State(service): State<Arc<CctvService>>,
    Query(query): Query<CctvListQuery>,
) -> Result<Json<ApiResponse<Vec<CctvCamera>>>> {
    let cameras = service.search(query.q.as_deref(), query.district.as_deref());
    let total = cameras.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(cameras),
        None,
        Some(Meta { total }),
    )))
}

/// List districts that have active cameras (public)
#[utoipa::path(
    get,
    path = "/api/cctv/districts",
    responses(
        (status = 200, description = "Sorted district names", body = ApiResponse<Vec<String>>)
    ),
    tag = "cctv"
)]
pub async fn list_districts(
    State(service): State<Arc<CctvService>>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let districts = service.districts();
    Ok(Json(ApiResponse::success(Some(districts), None, None)))
}

/// Get a camera by ID (public)
#[utoipa::path(
    get,
    path = "/api/cctv/{id}",
    params(
        ("id" = String, Path, description = "Camera ID")
    ),
    responses(
        (status = 200, description = "Camera found", body = ApiResponse<CctvCamera>),
        (status = 404, description = "Camera not found")
    ),
    tag = "cctv"
)]
pub async fn get_camera(
    State(service): State<Arc<CctvService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CctvCamera>>> {
    let camera = service.get_by_id(&id)?;
    Ok(Json(ApiResponse::success(Some(camera), None, None)))
}
