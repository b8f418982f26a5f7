use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a report confirmation
///
/// Rows are insert-only. A (report, user) pair may accumulate many rows
/// over time; the anti-spam window only limits how often a new one may
/// be added.
#[derive(Debug, Clone, FromRow)]
pub struct ReportConfirmation {
    pub id: Uuid,
    pub report_id: Uuid,
    pub user_id: String,
    pub confirmed_at: DateTime<Utc>,
}
