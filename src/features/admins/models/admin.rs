use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::admins::dtos::AdminResponseDto;

/// Database model for an admin directory entry, keyed by email
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl From<Admin> for AdminResponseDto {
    fn from(a: Admin) -> Self {
        Self {
            email: a.email,
            created_at: a.created_at,
            created_by: a.created_by,
        }
    }
}
