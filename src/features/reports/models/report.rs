use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Report kind enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Flood,
    DryRoute,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Flood => write!(f, "flood"),
            ReportKind::DryRoute => write!(f, "dry_route"),
        }
    }
}

/// Flood water level enum matching database enum, ascending danger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "water_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WaterLevel {
    Siaga,
    Bahaya,
    Evakuasi,
}

impl std::fmt::Display for WaterLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterLevel::Siaga => write!(f, "siaga"),
            WaterLevel::Bahaya => write!(f, "bahaya"),
            WaterLevel::Evakuasi => write!(f, "evakuasi"),
        }
    }
}

/// Social platform enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "social_platform", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Twitter,
    Tiktok,
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialPlatform::Instagram => write!(f, "instagram"),
            SocialPlatform::Twitter => write!(f, "twitter"),
            SocialPlatform::Tiktok => write!(f, "tiktok"),
        }
    }
}

/// Database model for a flood/dry-route report
///
/// `expires_at` always equals `last_confirmed_at` plus the report TTL.
/// Whether a report is expired is derived from it on read, never stored.
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub user_id: String,
    pub kind: ReportKind,
    pub severity: Option<WaterLevel>,
    pub latitude: f64,
    pub longitude: f64,
    pub photo_url: Option<String>,
    pub social_url: Option<String>,
    pub social_platform: Option<SocialPlatform>,
    pub confirmation_count: i32,
    pub created_at: DateTime<Utc>,
    pub last_confirmed_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Data for inserting a new report; ids, timestamps and the
/// confirmation count come from store-side defaults
#[derive(Debug)]
pub struct CreateReport {
    pub user_id: String,
    pub kind: ReportKind,
    pub severity: Option<WaterLevel>,
    pub latitude: f64,
    pub longitude: f64,
    pub photo_url: Option<String>,
    pub social_url: Option<String>,
    pub social_platform: Option<SocialPlatform>,
}
