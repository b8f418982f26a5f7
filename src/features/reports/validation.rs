use crate::features::reports::dtos::CreateReportForm;
use crate::features::reports::models::{ReportKind, SocialPlatform};
use crate::shared::validation::{INSTAGRAM_URL_REGEX, TIKTOK_URL_REGEX, TWITTER_URL_REGEX};

/// Successful parse of a social proof URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialUrlParse {
    pub platform: SocialPlatform,
    pub content_id: String,
    pub embed_url: String,
}

/// A rule violated by a report submission.
///
/// Submission validation collects every violated rule, each at most
/// once, so the caller sees the complete picture in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormIssue {
    MissingLocation,
    MissingSeverity,
    MissingProof,
    InvalidProofUrl,
}

impl ReportFormIssue {
    pub fn message(&self) -> &'static str {
        match self {
            ReportFormIssue::MissingLocation => "Lokasi harus dipilih di peta",
            ReportFormIssue::MissingSeverity => "Tingkat ketinggian air harus dipilih",
            ReportFormIssue::MissingProof => "Bukti foto atau link sosial media harus disertakan",
            ReportFormIssue::InvalidProofUrl => {
                "Link sosial media tidak valid (harus Instagram, Twitter/X, atau TikTok)"
            }
        }
    }
}

impl std::fmt::Display for ReportFormIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Detect the platform of a social proof URL and extract its content id
/// and embed URL. Returns None for anything that is not a recognizable
/// Instagram, Twitter/X or TikTok post link.
pub fn validate_social_url(url: &str) -> Option<SocialUrlParse> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    if let Some(caps) = INSTAGRAM_URL_REGEX.captures(url) {
        let content_id = caps[1].to_string();
        return Some(SocialUrlParse {
            platform: SocialPlatform::Instagram,
            embed_url: format!("https://www.instagram.com/p/{}/embed", content_id),
            content_id,
        });
    }

    if let Some(caps) = TWITTER_URL_REGEX.captures(url) {
        let content_id = caps[1].to_string();
        return Some(SocialUrlParse {
            platform: SocialPlatform::Twitter,
            embed_url: format!("https://platform.twitter.com/embed/Tweet.html?id={}", content_id),
            content_id,
        });
    }

    if let Some(caps) = TIKTOK_URL_REGEX.captures(url) {
        let content_id = caps[1].to_string();
        return Some(SocialUrlParse {
            platform: SocialPlatform::Tiktok,
            embed_url: format!("https://www.tiktok.com/embed/v2/{}", content_id),
            content_id,
        });
    }

    None
}

/// Validate a report submission before any write.
///
/// On success returns the parsed social proof, if one was supplied.
/// On failure returns every violated rule exactly once.
pub fn validate_report_form(
    form: &CreateReportForm,
) -> Result<Option<SocialUrlParse>, Vec<ReportFormIssue>> {
    let mut issues = Vec::new();

    // Location must be picked on the map; the client sends 0.0 for an
    // unset coordinate, and str::parse also accepts "NaN" and "inf"
    if form.latitude == 0.0
        || form.longitude == 0.0
        || !form.latitude.is_finite()
        || !form.longitude.is_finite()
    {
        issues.push(ReportFormIssue::MissingLocation);
    }

    // Flood reports carry a water level; dry routes never do
    if form.kind == ReportKind::Flood && form.severity.is_none() {
        issues.push(ReportFormIssue::MissingSeverity);
    }

    let has_photo = form.photo.is_some();
    let social_url = form
        .social_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    if !has_photo && social_url.is_none() {
        issues.push(ReportFormIssue::MissingProof);
    }

    let mut parsed = None;
    if let Some(url) = social_url {
        parsed = validate_social_url(url);
        if parsed.is_none() {
            issues.push(ReportFormIssue::InvalidProofUrl);
        }
    }

    if issues.is_empty() {
        Ok(parsed)
    } else {
        Err(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::dtos::PhotoUpload;
    use crate::features::reports::models::WaterLevel;

    fn photo() -> PhotoUpload {
        PhotoUpload {
            data: vec![0xFF, 0xD8, 0xFF],
            file_name: "photo.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
        }
    }

    fn flood_form() -> CreateReportForm {
        CreateReportForm {
            kind: ReportKind::Flood,
            severity: Some(WaterLevel::Siaga),
            latitude: -7.2575,
            longitude: 112.7521,
            social_url: None,
            photo: Some(photo()),
        }
    }

    #[test]
    fn test_validate_social_url_instagram() {
        let parse = validate_social_url("https://www.instagram.com/p/ABC123xyz/").unwrap();
        assert_eq!(parse.platform, SocialPlatform::Instagram);
        assert_eq!(parse.content_id, "ABC123xyz");
        assert!(parse.embed_url.contains("/p/ABC123xyz/embed"));
    }

    #[test]
    fn test_validate_social_url_twitter() {
        let parse = validate_social_url("https://x.com/someuser/status/1234567890").unwrap();
        assert_eq!(parse.platform, SocialPlatform::Twitter);
        assert_eq!(parse.content_id, "1234567890");
        assert_eq!(
            parse.embed_url,
            "https://platform.twitter.com/embed/Tweet.html?id=1234567890"
        );
    }

    #[test]
    fn test_validate_social_url_tiktok() {
        let parse =
            validate_social_url("https://www.tiktok.com/@user.name/video/7123456789").unwrap();
        assert_eq!(parse.platform, SocialPlatform::Tiktok);
        assert_eq!(parse.content_id, "7123456789");
        assert_eq!(parse.embed_url, "https://www.tiktok.com/embed/v2/7123456789");
    }

    #[test]
    fn test_validate_social_url_rejects_malformed() {
        assert!(validate_social_url("https://instagram.com/notapost").is_none());
        assert!(validate_social_url("https://example.com/p/ABC123").is_none());
        assert!(validate_social_url("").is_none());
        assert!(validate_social_url("   ").is_none());
    }

    #[test]
    fn test_valid_flood_form_passes() {
        let parsed = validate_report_form(&flood_form()).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_flood_without_severity_fails_with_exactly_that() {
        let mut form = flood_form();
        form.severity = None;

        let issues = validate_report_form(&form).unwrap_err();
        assert_eq!(issues, vec![ReportFormIssue::MissingSeverity]);
    }

    #[test]
    fn test_missing_location_detected() {
        let mut form = flood_form();
        form.latitude = 0.0;

        let issues = validate_report_form(&form).unwrap_err();
        assert_eq!(issues, vec![ReportFormIssue::MissingLocation]);
    }

    #[test]
    fn test_non_finite_location_detected() {
        let mut form = flood_form();
        form.latitude = f64::NAN;

        let issues = validate_report_form(&form).unwrap_err();
        assert_eq!(issues, vec![ReportFormIssue::MissingLocation]);

        let mut form = flood_form();
        form.longitude = f64::INFINITY;

        let issues = validate_report_form(&form).unwrap_err();
        assert_eq!(issues, vec![ReportFormIssue::MissingLocation]);
    }

    #[test]
    fn test_missing_proof_detected() {
        let mut form = flood_form();
        form.photo = None;

        let issues = validate_report_form(&form).unwrap_err();
        assert_eq!(issues, vec![ReportFormIssue::MissingProof]);

        // A blank social URL is not a proof either
        form.social_url = Some("   ".to_string());
        let issues = validate_report_form(&form).unwrap_err();
        assert_eq!(issues, vec![ReportFormIssue::MissingProof]);
    }

    #[test]
    fn test_unparseable_social_url_detected() {
        let mut form = flood_form();
        form.photo = None;
        form.social_url = Some("https://instagram.com/notapost".to_string());

        let issues = validate_report_form(&form).unwrap_err();
        assert_eq!(issues, vec![ReportFormIssue::InvalidProofUrl]);
    }

    #[test]
    fn test_each_issue_reported_once() {
        let form = CreateReportForm {
            kind: ReportKind::Flood,
            severity: None,
            latitude: 0.0,
            longitude: 0.0,
            social_url: None,
            photo: None,
        };

        let issues = validate_report_form(&form).unwrap_err();
        assert_eq!(
            issues,
            vec![
                ReportFormIssue::MissingLocation,
                ReportFormIssue::MissingSeverity,
                ReportFormIssue::MissingProof,
            ]
        );
    }

    #[test]
    fn test_dry_route_needs_no_severity() {
        let mut form = flood_form();
        form.kind = ReportKind::DryRoute;
        form.severity = None;
        form.photo = None;
        form.social_url = Some("https://x.com/someuser/status/1234567890".to_string());

        let parsed = validate_report_form(&form).unwrap();
        assert_eq!(parsed.unwrap().platform, SocialPlatform::Twitter);
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(
            ReportFormIssue::MissingLocation.message(),
            "Lokasi harus dipilih di peta"
        );
        assert_eq!(
            ReportFormIssue::MissingSeverity.message(),
            "Tingkat ketinggian air harus dipilih"
        );
        assert_eq!(
            ReportFormIssue::MissingProof.message(),
            "Bukti foto atau link sosial media harus disertakan"
        );
        assert_eq!(
            ReportFormIssue::InvalidProofUrl.message(),
            "Link sosial media tidak valid (harus Instagram, Twitter/X, atau TikTok)"
        );
    }
}
