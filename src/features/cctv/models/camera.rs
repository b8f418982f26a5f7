use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A camera entry as published in the city CCTV feed.
///
/// The feed is taken as-is: coordinates are strings and flags are
/// numeric, with the occasional camelCase key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CctvCamera {
    pub id: String,
    pub name: String,
    pub stream_id: String,
    pub host: String,
    pub status: i32,
    #[serde(rename = "isIntersection")]
    pub is_intersection: i32,
    #[serde(rename = "isPublic")]
    pub is_public: i32,
    pub street: String,
    pub district: String,
    pub city: String,
    pub province: String,
    pub formatted_address: String,
    pub camera_type: String,
    pub location_type: String,
    pub priority: String,
    pub district_category: String,
    pub webrtc_url: String,
    pub hls_url: String,
    pub latitude: String,
    pub longitude: String,
}

impl CctvCamera {
    /// Whether the camera should be exposed: live, public and placed
    /// on the map
    pub fn is_active(&self) -> bool {
        self.status == 1
            && self.is_public == 1
            && !self.latitude.is_empty()
            && !self.longitude.is_empty()
    }
}

/// The feed groups cameras per district
pub type CctvData = HashMap<String, Vec<CctvCamera>>;
