use std::collections::BTreeSet;
use std::path::Path;

use thiserror::Error;

use crate::core::error::{AppError, Result};
use crate::features::cctv::models::{CctvCamera, CctvData};

#[derive(Debug, Error)]
pub enum CctvLoadError {
    #[error("Failed to read CCTV data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CCTV data file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory CCTV camera directory, loaded once at startup
pub struct CctvService {
    cameras: Vec<CctvCamera>,
}

impl CctvService {
    /// Load the camera directory from the city data file.
    ///
    /// Only active public cameras with coordinates are kept. A missing
    /// or malformed file degrades to an empty directory so the rest of
    /// the API stays up.
    pub fn load(path: &str) -> Self {
        let cameras = match Self::read_data(path) {
            Ok(data) => {
                let mut cameras: Vec<CctvCamera> = data
                    .into_values()
                    .flatten()
                    .filter(CctvCamera::is_active)
                    .collect();
                cameras.sort_by(|a, b| a.name.cmp(&b.name));
                tracing::info!("Loaded {} active CCTV cameras from {}", cameras.len(), path);
                cameras
            }
            Err(e) => {
                tracing::warn!("Failed to load CCTV data from {}: {}", path, e);
                Vec::new()
            }
        };

        Self { cameras }
    }

    fn read_data(path: &str) -> std::result::Result<CctvData, CctvLoadError> {
        let content = std::fs::read_to_string(Path::new(path))?;
        let data: CctvData = serde_json::from_str(&content)?;
        Ok(data)
    }

    /// Search cameras by name or street, optionally scoped to one
    /// district. An empty query matches everything.
    pub fn search(&self, query: Option<&str>, district: Option<&str>) -> Vec<CctvCamera> {
        self.cameras
            .iter()
            .filter(|camera| {
                let matches_query = match query {
                    Some(q) if !q.trim().is_empty() => {
                        let q = q.trim().to_lowercase();
                        camera.name.to_lowercase().contains(&q)
                            || camera.street.to_lowercase().contains(&q)
                    }
                    _ => true,
                };
                let matches_district = match district {
                    Some(d) if !d.is_empty() && d != "all" => camera.district == d,
                    _ => true,
                };
                matches_query && matches_district
            })
            .cloned()
            .collect()
    }

    /// Look up a camera by ID
    pub fn get_by_id(&self, id: &str) -> Result<CctvCamera> {
        self.cameras
            .iter()
            .find(|camera| camera.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("CCTV camera {} not found", id)))
    }

    /// Districts with at least one active camera, sorted
    pub fn districts(&self) -> Vec<String> {
        self.cameras
            .iter()
            .map(|camera| camera.district.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(id: &str, name: &str, street: &str, district: &str) -> CctvCamera {
        CctvCamera {
            id: id.to_string(),
            name: name.to_string(),
            stream_id: format!("stream-{}", id),
            host: "cctv.example.com".to_string(),
            status: 1,
            is_intersection: 0,
            is_public: 1,
            street: street.to_string(),
            district: district.to_string(),
            city: "Malang".to_string(),
            province: "Jawa Timur".to_string(),
            formatted_address: format!("{}, {}", street, district),
            camera_type: "PTZ".to_string(),
            location_type: "street".to_string(),
            priority: "1".to_string(),
            district_category: "city".to_string(),
            webrtc_url: format!("https://cctv.example.com/webrtc/{}", id),
            hls_url: format!("https://cctv.example.com/hls/{}.m3u8", id),
            latitude: "-7.977".to_string(),
            longitude: "112.634".to_string(),
        }
    }

    fn service_with(cameras: Vec<CctvCamera>) -> CctvService {
        CctvService { cameras }
    }

    #[test]
    fn test_active_filter() {
        let active = camera("1", "Alun-Alun Utara", "Jl. Merdeka", "Klojen");

        let mut offline = camera("2", "Offline", "Jl. Mati", "Klojen");
        offline.status = 0;

        let mut private = camera("3", "Private", "Jl. Tertutup", "Klojen");
        private.is_public = 0;

        let mut unplaced = camera("4", "Unplaced", "Jl. Hilang", "Klojen");
        unplaced.latitude = String::new();

        assert!(active.is_active());
        assert!(!offline.is_active());
        assert!(!private.is_active());
        assert!(!unplaced.is_active());
    }

    #[test]
    fn test_search_matches_name_and_street() {
        let service = service_with(vec![
            camera("1", "Alun-Alun Utara", "Jl. Merdeka", "Klojen"),
            camera("2", "Simpang Balapan", "Jl. Ijen", "Klojen"),
        ]);

        let by_name = service.search(Some("alun"), None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "1");

        let by_street = service.search(Some("ijen"), None);
        assert_eq!(by_street.len(), 1);
        assert_eq!(by_street[0].id, "2");

        assert!(service.search(Some("tidak ada"), None).is_empty());
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let service = service_with(vec![
            camera("1", "Alun-Alun Utara", "Jl. Merdeka", "Klojen"),
            camera("2", "Simpang Balapan", "Jl. Ijen", "Lowokwaru"),
        ]);

        assert_eq!(service.search(None, None).len(), 2);
        assert_eq!(service.search(Some("  "), None).len(), 2);
    }

    #[test]
    fn test_search_by_district() {
        let service = service_with(vec![
            camera("1", "Alun-Alun Utara", "Jl. Merdeka", "Klojen"),
            camera("2", "Simpang Balapan", "Jl. Ijen", "Lowokwaru"),
        ]);

        let klojen = service.search(None, Some("Klojen"));
        assert_eq!(klojen.len(), 1);
        assert_eq!(klojen[0].id, "1");

        // "all" is the UI's no-filter sentinel
        assert_eq!(service.search(None, Some("all")).len(), 2);
    }

    #[test]
    fn test_get_by_id() {
        let service = service_with(vec![camera("1", "Alun-Alun Utara", "Jl. Merdeka", "Klojen")]);

        assert_eq!(service.get_by_id("1").unwrap().id, "1");
        assert!(service.get_by_id("missing").is_err());
    }

    #[test]
    fn test_districts_sorted_unique() {
        let service = service_with(vec![
            camera("1", "A", "Jl. A", "Lowokwaru"),
            camera("2", "B", "Jl. B", "Klojen"),
            camera("3", "C", "Jl. C", "Lowokwaru"),
        ]);

        assert_eq!(service.districts(), vec!["Klojen", "Lowokwaru"]);
    }

    #[test]
    fn test_load_missing_file_degrades_to_empty() {
        let service = CctvService::load("/nonexistent/cctv.json");
        assert!(service.search(None, None).is_empty());
        assert!(service.districts().is_empty());
    }
}
