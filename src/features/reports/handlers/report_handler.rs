use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::admins::services::AdminService;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{
    is_photo_mime_type_allowed, CreateReportDto, CreateReportForm, DeleteReportResponseDto,
    PhotoUpload, ReportListQuery, ReportResponseDto, ALLOWED_PHOTO_MIME_TYPES, MAX_PHOTO_SIZE,
};
use crate::features::reports::events::ReportEventHub;
use crate::features::reports::models::{ReportKind, WaterLevel};
use crate::features::reports::policy;
use crate::features::reports::services::{ConfirmationService, ReportService};
use crate::shared::types::{ApiResponse, Meta};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
    pub confirmation_service: Arc<ConfirmationService>,
    pub admin_service: Arc<AdminService>,
    pub events: ReportEventHub,
}

/// List reports, newest first (public)
#[utoipa::path(
    get,
    path = "/api/reports",
    params(ReportListQuery),
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<ReportResponseDto>>)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(state): State<ReportState>,
    Query(query): Query<ReportListQuery>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = state.report_service.list().await?;
    let reports = policy::filter_reports(reports, query.filter);

    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get report by ID (public)
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(state): State<ReportState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = state.report_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Submit a report
///
/// Accepts multipart/form-data with:
/// - `kind`: "flood" or "dry_route" (required)
/// - `severity`: "siaga", "bahaya" or "evakuasi" (required for floods)
/// - `latitude` / `longitude`: map coordinates (required)
/// - `photo`: photo proof (optional)
/// - `social_url`: Instagram/Twitter/TikTok link as proof (optional)
///
/// Flood reports need at least one proof channel; when both are sent
/// the photo wins.
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "reports",
    request_body(
        content = CreateReportDto,
        content_type = "multipart/form-data",
        description = "Report form with an optional photo or social media link as proof",
    ),
    responses(
        (status = 201, description = "Report created", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Invalid or incomplete report form"),
        (status = 401, description = "Authentication required"),
        (status = 413, description = "Photo too large")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_report(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    let mut kind: Option<ReportKind> = None;
    let mut severity: Option<WaterLevel> = None;
    let mut latitude = 0.0_f64;
    let mut longitude = 0.0_f64;
    let mut social_url: Option<String> = None;
    let mut photo: Option<PhotoUpload> = None;

    // Process multipart fields
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "kind" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read kind field: {}", e))
                })?;
                kind = match text.as_str() {
                    "flood" => Some(ReportKind::Flood),
                    "dry_route" => Some(ReportKind::DryRoute),
                    other => {
                        return Err(AppError::BadRequest(format!(
                            "Unknown report kind '{}'",
                            other
                        )))
                    }
                };
            }
            "severity" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read severity field: {}", e))
                })?;
                severity = match text.as_str() {
                    "" => None,
                    "siaga" => Some(WaterLevel::Siaga),
                    "bahaya" => Some(WaterLevel::Bahaya),
                    "evakuasi" => Some(WaterLevel::Evakuasi),
                    other => {
                        return Err(AppError::BadRequest(format!(
                            "Unknown water level '{}'",
                            other
                        )))
                    }
                };
            }
            "latitude" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read latitude field: {}", e))
                })?;
                if !text.trim().is_empty() {
                    latitude = text.trim().parse().map_err(|_| {
                        AppError::BadRequest(format!("Invalid latitude '{}'", text))
                    })?;
                }
            }
            "longitude" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read longitude field: {}", e))
                })?;
                if !text.trim().is_empty() {
                    longitude = text.trim().parse().map_err(|_| {
                        AppError::BadRequest(format!("Invalid longitude '{}'", text))
                    })?;
                }
            }
            "social_url" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read social_url field: {}", e))
                })?;
                if !text.is_empty() {
                    social_url = Some(text);
                }
            }
            "photo" => {
                // Get content type
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                // Get filename
                let fname = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                // Read photo data
                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read photo bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read photo data: {}", e))
                })?;

                // Browsers send an empty part for a blank file input
                if !data.is_empty() {
                    photo = Some(PhotoUpload {
                        data: data.to_vec(),
                        file_name: fname,
                        content_type: ct,
                    });
                }
            }
            _ => {
                // Ignore unknown fields
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let kind = kind.ok_or_else(|| AppError::BadRequest("Report kind is required".to_string()))?;

    if let Some(ref photo) = photo {
        // Validate photo size
        if photo.data.len() > MAX_PHOTO_SIZE {
            return Err(AppError::BadRequest(format!(
                "Photo too large. Maximum size is {} bytes ({} MB)",
                MAX_PHOTO_SIZE,
                MAX_PHOTO_SIZE / 1024 / 1024
            )));
        }

        // Validate MIME type
        if !is_photo_mime_type_allowed(&photo.content_type) {
            return Err(AppError::BadRequest(format!(
                "Photo type '{}' is not allowed. Allowed types: {}",
                photo.content_type,
                ALLOWED_PHOTO_MIME_TYPES.join(", ")
            )));
        }
    }

    let form = CreateReportForm {
        kind,
        severity,
        latitude,
        longitude,
        social_url,
        photo,
    };

    let report = state.report_service.create(&user.sub, form).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(report.into()), None, None)),
    ))
}

/// Confirm a report is still accurate
#[utoipa::path(
    post,
    path = "/api/reports/{id}/confirmations",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report confirmed", body = ApiResponse<ReportResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Report not found"),
        (status = 429, description = "Already confirmed within the last hour")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "reports"
)]
pub async fn confirm_report(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = state.confirmation_service.confirm(id, &user.sub).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Delete a report (admin only)
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report deleted", body = ApiResponse<DeleteReportResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Report not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "reports"
)]
pub async fn delete_report(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<DeleteReportResponseDto>>> {
    let email = state
        .admin_service
        .require_admin(user.email.as_deref())
        .await?;

    state.report_service.delete(id, &email).await?;

    Ok(Json(ApiResponse::success(
        Some(DeleteReportResponseDto { deleted: true }),
        Some("Report deleted successfully".to_string()),
        None,
    )))
}
