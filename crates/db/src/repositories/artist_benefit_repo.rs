//! Repository for the `artist_benefits` table.

use inkstudio_core::types::DbId;
use sqlx::PgPool;

use crate::models::artist_benefit::{ArtistBenefit, CreateArtistBenefit, UpdateArtistBenefit};

const COLUMNS: &str =
    "id, tenant_id, user_id, share_percent, description, is_active, created_at, updated_at";

/// Provides CRUD operations for per-artist commission overrides.
pub struct ArtistBenefitRepo;

impl ArtistBenefitRepo {
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateArtistBenefit,
    ) -> Result<ArtistBenefit, sqlx::Error> {
        let query = format!(
            "INSERT INTO artist_benefits (tenant_id, user_id, share_percent, description, is_active)
             VALUES ($1, $2, $3, $4, COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArtistBenefit>(&query)
            .bind(tenant_id)
            .bind(input.user_id)
            .bind(input.share_percent)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<ArtistBenefit>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM artist_benefits WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, ArtistBenefit>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, tenant_id: DbId) -> Result<Vec<ArtistBenefit>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM artist_benefits WHERE tenant_id = $1 ORDER BY user_id");
        sqlx::query_as::<_, ArtistBenefit>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// `(user_id, share_percent)` for every active override of the tenant.
    pub async fn active_overrides(
        pool: &PgPool,
        tenant_id: DbId,
    ) -> Result<Vec<(DbId, f64)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, f64)>(
            "SELECT user_id, share_percent FROM artist_benefits
             WHERE tenant_id = $1 AND is_active = true",
        )
        .bind(tenant_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateArtistBenefit,
    ) -> Result<Option<ArtistBenefit>, sqlx::Error> {
        let query = format!(
            "UPDATE artist_benefits SET
                share_percent = COALESCE($3, share_percent),
                description = COALESCE($4, description),
                is_active = COALESCE($5, is_active)
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArtistBenefit>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(input.share_percent)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artist_benefits WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
