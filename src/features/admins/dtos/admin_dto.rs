use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for granting admin access
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddAdminDto {
    /// Email address to grant admin access to
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "admin@example.com")]
    pub email: String,
}

/// Response DTO for an admin directory entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminResponseDto {
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// Email of the admin who added this entry, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Response DTO for removing an admin
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RemoveAdminResponseDto {
    /// Confirmation that the admin was removed
    pub removed: bool,
}

/// Admin status of the calling user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminStatusResponseDto {
    /// Email from the caller's token, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub is_admin: bool,
}
