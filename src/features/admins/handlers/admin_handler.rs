use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::admins::dtos::{
    AddAdminDto, AdminResponseDto, AdminStatusResponseDto, RemoveAdminResponseDto,
};
use crate::features::admins::services::AdminService;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::{ApiResponse, Meta};

/// List admins (admin only)
#[utoipa::path(
    get,
    path = "/api/admins",
    responses(
        (status = 200, description = "List of admins", body = ApiResponse<Vec<AdminResponseDto>>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "admins"
)]
pub async fn list_admins(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<Vec<AdminResponseDto>>>> {
    service.require_admin(user.email.as_deref()).await?;

    let admins = service.list().await?;
    let total = admins.len() as i64;
    let dtos: Vec<AdminResponseDto> = admins.into_iter().map(|a| a.into()).collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Grant admin access to an email (admin only)
#[utoipa::path(
    post,
    path = "/api/admins",
    request_body = AddAdminDto,
    responses(
        (status = 201, description = "Admin added", body = ApiResponse<AdminResponseDto>),
        (status = 400, description = "Invalid email"),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required"),
        (status = 409, description = "Email is already an admin")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "admins"
)]
pub async fn add_admin(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
    AppJson(dto): AppJson<AddAdminDto>,
) -> Result<(StatusCode, Json<ApiResponse<AdminResponseDto>>)> {
    let actor = service.require_admin(user.email.as_deref()).await?;

    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let admin = service.add(&dto.email, &actor).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(admin.into()), None, None)),
    ))
}

/// Revoke admin access (admin only)
#[utoipa::path(
    delete,
    path = "/api/admins/{email}",
    params(
        ("email" = String, Path, description = "Admin email address")
    ),
    responses(
        (status = 200, description = "Admin removed", body = ApiResponse<RemoveAdminResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Admin access required, or target is the primary admin"),
        (status = 404, description = "Admin not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "admins"
)]
pub async fn remove_admin(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<RemoveAdminResponseDto>>> {
    let actor = service.require_admin(user.email.as_deref()).await?;

    service.remove(&email, &actor).await?;

    Ok(Json(ApiResponse::success(
        Some(RemoveAdminResponseDto { removed: true }),
        Some("Admin removed successfully".to_string()),
        None,
    )))
}

/// Admin status of the calling user
#[utoipa::path(
    get,
    path = "/api/admins/me",
    responses(
        (status = 200, description = "Admin status", body = ApiResponse<AdminStatusResponseDto>),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "admins"
)]
pub async fn admin_status(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<AdminStatusResponseDto>>> {
    let is_admin = match user.email.as_deref() {
        Some(email) => service.is_admin(email).await?,
        None => false,
    };

    Ok(Json(ApiResponse::success(
        Some(AdminStatusResponseDto {
            email: user.email,
            is_admin,
        }),
        None,
        None,
    )))
}
