use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::reports::models::{Report, ReportKind, SocialPlatform, WaterLevel};
use crate::features::reports::policy::{self, ReportFilter};
use crate::features::reports::validation::validate_social_url;

/// Query parameters for listing reports
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ReportListQuery {
    /// Map display category: "all" (default), "passable", "blocked" or "dry"
    #[serde(default)]
    pub filter: ReportFilter,
}

/// Create report request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CreateReportDto {
    /// Report kind: "flood" or "dry_route"
    #[schema(example = "flood")]
    pub kind: String,
    /// Water level for flood reports: "siaga", "bahaya" or "evakuasi"
    #[schema(example = "siaga")]
    pub severity: Option<String>,
    /// Latitude in degrees
    #[schema(example = -7.2575)]
    pub latitude: f64,
    /// Longitude in degrees
    #[schema(example = 112.7521)]
    pub longitude: f64,
    /// Social media proof URL (Instagram, Twitter/X or TikTok)
    #[schema(example = "https://www.instagram.com/p/ABC123xyz/")]
    pub social_url: Option<String>,
    /// Photo proof
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub photo: Option<String>,
}

/// Photo bytes collected from a multipart field
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub data: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

/// Collected submission form, built by the handler from multipart
/// fields and validated before any write
#[derive(Debug, Clone)]
pub struct CreateReportForm {
    pub kind: ReportKind,
    pub severity: Option<WaterLevel>,
    pub latitude: f64,
    pub longitude: f64,
    pub social_url: Option<String>,
    pub photo: Option<PhotoUpload>,
}

/// Response DTO for a report, including the display attributes the map
/// derives from it (staleness, marker color/opacity, level label)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub user_id: String,
    pub kind: ReportKind,
    pub severity: Option<WaterLevel>,
    pub latitude: f64,
    pub longitude: f64,
    pub photo_url: Option<String>,
    pub social_url: Option<String>,
    pub social_platform: Option<SocialPlatform>,
    /// Embed URL for the social proof, when one is attached
    pub social_embed_url: Option<String>,
    pub confirmation_count: i32,
    pub created_at: DateTime<Utc>,
    pub last_confirmed_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Whether the report has passed its expiry time, derived at read time
    pub expired: bool,
    pub marker_color: String,
    pub marker_opacity: f64,
    pub water_level_label: String,
}

impl ReportResponseDto {
    /// Build the response shape for a report as seen at `now`
    pub fn from_report(r: Report, now: DateTime<Utc>) -> Self {
        let expired = policy::is_expired(&r, now);
        let marker_opacity = policy::marker_opacity(&r, now);
        let social_embed_url = r
            .social_url
            .as_deref()
            .and_then(validate_social_url)
            .map(|parse| parse.embed_url);

        Self {
            id: r.id,
            user_id: r.user_id,
            kind: r.kind,
            severity: r.severity,
            latitude: r.latitude,
            longitude: r.longitude,
            photo_url: r.photo_url,
            social_url: r.social_url,
            social_platform: r.social_platform,
            social_embed_url,
            confirmation_count: r.confirmation_count,
            created_at: r.created_at,
            last_confirmed_at: r.last_confirmed_at,
            expires_at: r.expires_at,
            expired,
            marker_color: policy::marker_color(r.severity).to_string(),
            marker_opacity,
            water_level_label: policy::water_level_label(r.severity).to_string(),
        }
    }
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self::from_report(r, Utc::now())
    }
}

/// Response DTO for report deletion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteReportResponseDto {
    /// Confirmation that the report was deleted
    pub deleted: bool,
}

/// Allowed MIME types for report photos
pub const ALLOWED_PHOTO_MIME_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Maximum photo size in bytes (10MB)
pub const MAX_PHOTO_SIZE: usize = 10 * 1024 * 1024;

/// Check if a MIME type is an accepted photo type
pub fn is_photo_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_PHOTO_MIME_TYPES.contains(&content_type)
}

/// Get file extension from content type
pub fn get_extension_from_content_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}
