use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::events::{ReportEvent, ReportEventHub};
use crate::features::reports::models::{Report, ReportConfirmation};
use crate::shared::constants::{CONFIRMATION_WINDOW_HOURS, REPORT_TTL_HOURS};

/// Whether a confirmation made at `confirmed_at` still blocks the same
/// user from confirming again at `now`. The boundary counts as inside.
fn is_within_window(confirmed_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    confirmed_at >= now - Duration::hours(CONFIRMATION_WINDOW_HOURS)
}

/// The expiry a confirmation at `now` pushes the report out to.
fn extended_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::hours(REPORT_TTL_HOURS)
}

/// Service for "still flooded?" confirmations
pub struct ConfirmationService {
    pool: PgPool,
    events: ReportEventHub,
}

impl ConfirmationService {
    pub fn new(pool: PgPool, events: ReportEventHub) -> Self {
        Self { pool, events }
    }

    /// Confirm a report is still accurate.
    ///
    /// Each user may confirm a given report once per hour. A successful
    /// confirmation bumps the counter and pushes the expiry out to
    /// three hours from now, which also revives an already expired
    /// report.
    pub async fn confirm(&self, report_id: Uuid, user_id: &str) -> Result<Report> {
        let now = Utc::now();

        let last = sqlx::query_as::<_, ReportConfirmation>(
            r#"
            SELECT id, report_id, user_id, confirmed_at
            FROM report_confirmations
            WHERE report_id = $1 AND user_id = $2
            ORDER BY confirmed_at DESC
            LIMIT 1
            "#,
        )
        .bind(report_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to check confirmation window for report {}: {:?}",
                report_id,
                e
            );
            AppError::Database(e)
        })?;

        if let Some(last) = last {
            if is_within_window(last.confirmed_at, now) {
                tracing::debug!(
                    "User {} already confirmed report {} at {}",
                    user_id,
                    report_id,
                    last.confirmed_at
                );
                return Err(AppError::RateLimitExceeded(
                    "Anda sudah mengkonfirmasi laporan ini dalam 1 jam terakhir".to_string(),
                ));
            }
        }

        sqlx::query(
            r#"
            INSERT INTO report_confirmations (report_id, user_id, confirmed_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(report_id)
        .bind(user_id)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // Foreign key violation: the report is gone
                if db_err.code().as_deref() == Some("23503") {
                    return AppError::NotFound(format!("Report {} not found", report_id));
                }
            }
            tracing::error!(
                "Failed to record confirmation for report {}: {:?}",
                report_id,
                e
            );
            AppError::Database(e)
        })?;

        let report = sqlx::query_as::<_, Report>(
            r#"
            UPDATE flood_reports
            SET confirmation_count = confirmation_count + 1,
                last_confirmed_at = $2,
                expires_at = $3
            WHERE id = $1
            RETURNING id, user_id, kind, severity, latitude, longitude,
                      photo_url, social_url, social_platform, confirmation_count,
                      created_at, last_confirmed_at, expires_at
            "#,
        )
        .bind(report_id)
        .bind(now)
        .bind(extended_expiry(now))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to bump confirmation for report {}: {:?}", report_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))?;

        tracing::info!(
            "Report {} confirmed by user {} ({} total)",
            report_id,
            user_id,
            report.confirmation_count
        );

        self.events.publish(ReportEvent::Update {
            report: report.clone().into(),
        });

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_confirmation_inside_the_window_is_blocked() {
        let now = Utc::now();

        assert!(is_within_window(now, now));
        assert!(is_within_window(now - Duration::minutes(59), now));
        // The boundary itself still blocks
        assert!(is_within_window(
            now - Duration::hours(CONFIRMATION_WINDOW_HOURS),
            now
        ));
    }

    #[test]
    fn test_confirmation_allowed_once_the_window_has_passed() {
        let now = Utc::now();

        assert!(!is_within_window(
            now - Duration::hours(CONFIRMATION_WINDOW_HOURS) - Duration::seconds(1),
            now
        ));
        assert!(!is_within_window(now - Duration::hours(2), now));
    }

    #[test]
    fn test_confirmation_extends_expiry_three_hours_exactly() {
        let now = Utc::now();
        let expiry = extended_expiry(now);

        assert_eq!(expiry, now + Duration::hours(3));
        assert_eq!((expiry - now).num_seconds(), 3 * 3600);
    }
}
