use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{get_extension_from_content_type, CreateReportForm};
use crate::features::reports::events::{ReportEvent, ReportEventHub};
use crate::features::reports::models::{CreateReport, Report, ReportKind, SocialPlatform};
use crate::features::reports::validation::validate_report_form;
use crate::modules::storage::MinIOClient;

/// Pick the proof columns for a new report. An uploaded photo wins;
/// otherwise the social link, when one was supplied, is stored.
fn proof_columns(
    photo_url: Option<String>,
    social: Option<(String, SocialPlatform)>,
) -> (Option<String>, Option<String>, Option<SocialPlatform>) {
    match (photo_url, social) {
        (Some(photo), _) => (Some(photo), None, None),
        (None, Some((url, platform))) => (None, Some(url), Some(platform)),
        (None, None) => (None, None, None),
    }
}

/// Service for report submission and retrieval
pub struct ReportService {
    pool: PgPool,
    storage: Arc<MinIOClient>,
    events: ReportEventHub,
}

impl ReportService {
    pub fn new(pool: PgPool, storage: Arc<MinIOClient>, events: ReportEventHub) -> Self {
        Self {
            pool,
            storage,
            events,
        }
    }

    /// Create a new report for an authenticated user.
    ///
    /// The submission is validated first; every violated rule is
    /// reported back in one pass. A failed photo upload does not block
    /// the submission, the report then keeps the social link when one
    /// was supplied and is stored without any proof otherwise.
    pub async fn create(&self, user_id: &str, form: CreateReportForm) -> Result<Report> {
        let parsed_social = validate_report_form(&form).map_err(|issues| {
            AppError::ValidationErrors(issues.iter().map(|i| i.message().to_string()).collect())
        })?;

        // Dry routes never carry a water level, whatever the client sent
        let severity = match form.kind {
            ReportKind::Flood => form.severity,
            ReportKind::DryRoute => None,
        };

        // One proof channel is stored. An uploaded photo wins; the
        // social link covers a missing photo or a failed upload.
        let social_proof = parsed_social.and_then(|parse| {
            form.social_url
                .as_deref()
                .map(str::trim)
                .map(|url| (url.to_string(), parse.platform))
        });

        let uploaded = match form.photo {
            Some(photo) => match self.upload_photo(&photo.data, &photo.content_type).await {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::warn!("Photo upload failed, submitting report without photo: {}", e);
                    None
                }
            },
            None => None,
        };

        let (photo_url, social_url, social_platform) = proof_columns(uploaded, social_proof);

        let data = CreateReport {
            user_id: user_id.to_string(),
            kind: form.kind,
            severity,
            latitude: form.latitude,
            longitude: form.longitude,
            photo_url,
            social_url,
            social_platform,
        };

        let report = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO flood_reports (user_id, kind, severity, latitude, longitude,
                                       photo_url, social_url, social_platform)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, kind, severity, latitude, longitude,
                      photo_url, social_url, social_platform, confirmation_count,
                      created_at, last_confirmed_at, expires_at
            "#,
        )
        .bind(&data.user_id)
        .bind(data.kind)
        .bind(data.severity)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(&data.photo_url)
        .bind(&data.social_url)
        .bind(data.social_platform)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Created {} report {} by user {}",
            report.kind,
            report.id,
            user_id
        );

        self.events.publish(ReportEvent::Insert {
            report: report.clone().into(),
        });

        Ok(report)
    }

    /// List all reports, newest first
    pub async fn list(&self) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(
            r#"
            SELECT id, user_id, kind, severity, latitude, longitude,
                   photo_url, social_url, social_platform, confirmation_count,
                   created_at, last_confirmed_at, expires_at
            FROM flood_reports
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list reports: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(reports)
    }

    /// Get report by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            SELECT id, user_id, kind, severity, latitude, longitude,
                   photo_url, social_url, social_platform, confirmation_count,
                   created_at, last_confirmed_at, expires_at
            FROM flood_reports
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get report {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        report.ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Hard-delete a report. Caller is responsible for the admin check;
    /// confirmations go with the report via the FK cascade.
    pub async fn delete(&self, id: Uuid, deleted_by: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM flood_reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete report {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Report {} not found", id)));
        }

        tracing::info!("Report {} deleted by admin {}", id, deleted_by);

        self.events.publish(ReportEvent::Delete { report_id: id });

        Ok(())
    }

    async fn upload_photo(&self, data: &[u8], content_type: &str) -> Result<String> {
        let extension = get_extension_from_content_type(content_type).unwrap_or("jpg");
        let key = self
            .storage
            .photo_key(&format!("{}.{}", Uuid::new_v4(), extension));

        self.storage.upload(&key, data, content_type).await?;

        Ok(self.storage.public_url(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_photo_wins_over_social_link() {
        let (photo, social, platform) = proof_columns(
            Some("https://cdn.example.com/reports/a.jpg".to_string()),
            Some((
                "https://x.com/user/status/123".to_string(),
                SocialPlatform::Twitter,
            )),
        );

        assert_eq!(photo.as_deref(), Some("https://cdn.example.com/reports/a.jpg"));
        assert!(social.is_none());
        assert!(platform.is_none());
    }

    #[test]
    fn test_social_link_kept_when_photo_never_uploads() {
        let (photo, social, platform) = proof_columns(
            None,
            Some((
                "https://www.instagram.com/p/ABC123/".to_string(),
                SocialPlatform::Instagram,
            )),
        );

        assert!(photo.is_none());
        assert_eq!(social.as_deref(), Some("https://www.instagram.com/p/ABC123/"));
        assert_eq!(platform, Some(SocialPlatform::Instagram));
    }

    #[test]
    fn test_no_proof_columns_without_photo_or_link() {
        assert_eq!(proof_columns(None, None), (None, None, None));
    }
}
