use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admins::{dtos as admins_dtos, handlers as admins_handlers};
use crate::features::auth;
use crate::features::cctv::{handlers as cctv_handlers, models as cctv_models};
use crate::features::reports::{
    dtos as reports_dtos, events as reports_events, handlers as reports_handlers,
    models as reports_models, policy as reports_policy,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::get_report,
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::confirm_report,
        reports_handlers::report_handler::delete_report,
        reports_handlers::stream_handler::stream_reports,
        // Admins
        admins_handlers::admin_handler::list_admins,
        admins_handlers::admin_handler::add_admin,
        admins_handlers::admin_handler::remove_admin,
        admins_handlers::admin_handler::admin_status,
        // CCTV (public)
        cctv_handlers::cctv_handler::list_cameras,
        cctv_handlers::cctv_handler::list_districts,
        cctv_handlers::cctv_handler::get_camera,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            // Reports
            reports_models::ReportKind,
            reports_models::WaterLevel,
            reports_models::SocialPlatform,
            reports_policy::ReportFilter,
            reports_events::ReportEvent,
            reports_dtos::CreateReportDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::DeleteReportResponseDto,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<reports_dtos::DeleteReportResponseDto>,
            // Admins
            admins_dtos::AddAdminDto,
            admins_dtos::AdminResponseDto,
            admins_dtos::RemoveAdminResponseDto,
            admins_dtos::AdminStatusResponseDto,
            ApiResponse<Vec<admins_dtos::AdminResponseDto>>,
            ApiResponse<admins_dtos::AdminResponseDto>,
            ApiResponse<admins_dtos::RemoveAdminResponseDto>,
            ApiResponse<admins_dtos::AdminStatusResponseDto>,
            // CCTV
            cctv_models::CctvCamera,
            ApiResponse<Vec<cctv_models::CctvCamera>>,
            ApiResponse<cctv_models::CctvCamera>,
            ApiResponse<Vec<String>>,
        )
    ),
    tags(
        (name = "reports", description = "Crowdsourced flood and dry route reports"),
        (name = "admins", description = "Admin directory (admin only)"),
        (name = "cctv", description = "Public CCTV camera directory"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "BanjirMap API",
        version = "0.1.0",
        description = "API documentation for BanjirMap",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
