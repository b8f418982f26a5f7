use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::admins::models::Admin;
use crate::shared::constants::PRIMARY_ADMIN_EMAIL;

/// Whether this email belongs to the protected primary admin
fn is_primary_admin(email: &str) -> bool {
    email.trim().to_lowercase() == PRIMARY_ADMIN_EMAIL
}

/// Service for the admin directory
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List admins, oldest first
    pub async fn list(&self) -> Result<Vec<Admin>> {
        let admins = sqlx::query_as::<_, Admin>(
            r#"
            SELECT email, created_at, created_by
            FROM admins
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list admins: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(admins)
    }

    /// Grant admin access to an email address
    pub async fn add(&self, email: &str, added_by: &str) -> Result<Admin> {
        let email = email.trim().to_lowercase();

        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (email, created_by)
            VALUES ($1, $2)
            RETURNING email, created_at, created_by
            "#,
        )
        .bind(&email)
        .bind(added_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // Unique violation: the email is already an admin
                if db_err.code().as_deref() == Some("23505") {
                    return AppError::Conflict("Email sudah terdaftar sebagai admin".to_string());
                }
            }
            tracing::error!("Failed to add admin {}: {:?}", email, e);
            AppError::Database(e)
        })?;

        tracing::info!("Admin {} added by {}", admin.email, added_by);

        Ok(admin)
    }

    /// Revoke admin access. The primary admin can never be removed.
    pub async fn remove(&self, email: &str, removed_by: &str) -> Result<()> {
        let email = email.trim().to_lowercase();

        if is_primary_admin(&email) {
            return Err(AppError::Forbidden(
                "Tidak bisa menghapus admin utama".to_string(),
            ));
        }

        let result = sqlx::query("DELETE FROM admins WHERE email = $1")
            .bind(&email)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to remove admin {}: {:?}", email, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Admin {} not found", email)));
        }

        tracing::info!("Admin {} removed by {}", email, removed_by);

        Ok(())
    }

    /// Check whether an email has admin access
    pub async fn is_admin(&self, email: &str) -> Result<bool> {
        let email = email.trim().to_lowercase();

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1)")
                .bind(&email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check admin status for {}: {:?}", email, e);
                    AppError::Database(e)
                })?;

        Ok(exists)
    }

    /// Resolve the caller's email and require admin access
    pub async fn require_admin(&self, email: Option<&str>) -> Result<String> {
        let email =
            email.ok_or_else(|| AppError::Forbidden("Admin access required".to_string()))?;

        if !self.is_admin(email).await? {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(email.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_admin_guard_ignores_case_and_whitespace() {
        assert!(is_primary_admin("bangundwir@gmail.com"));
        assert!(is_primary_admin("BangunDwir@Gmail.Com"));
        assert!(is_primary_admin("  bangundwir@gmail.com  "));
        assert!(!is_primary_admin("someone@example.com"));
    }
}
