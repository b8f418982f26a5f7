use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for listing CCTV cameras
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct CctvListQuery {
    /// Case-insensitive search over camera name and street
    pub q: Option<String>,
    /// Limit results to one district ("all" disables the filter)
    pub district: Option<String>,
}
