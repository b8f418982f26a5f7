use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity extracted from a validated bearer token.
///
/// Handlers receive this through the request extensions and pass the
/// fields into services explicitly. Admin rights are not a token claim
/// here; they are resolved against the admin directory by email.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub sub: String,
    /// Email claim, when the token carries one. Required for admin checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
