//! Repository for the `seed_training_data` table.
//!
//! Rows with a NULL `tenant_id` are a read-only baseline visible to every
//! tenant; tenants may add and remove their own rows.

use inkstudio_core::types::DbId;
use sqlx::PgPool;

use crate::models::seed_training_data::{CreateSeedTrainingData, SeedTrainingData};
use crate::models::tattoo_session::PriceFilter;

const COLUMNS: &str = "id, tenant_id, service_category, style, body_region, size_cm, is_color, \
                        price_cents, created_at, updated_at";

pub struct SeedTrainingDataRepo;

impl SeedTrainingDataRepo {
    /// Baseline rows plus the tenant's own, tenant rows first.
    pub async fn list_visible(
        pool: &PgPool,
        tenant_id: DbId,
    ) -> Result<Vec<SeedTrainingData>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM seed_training_data
             WHERE tenant_id IS NULL OR tenant_id = $1
             ORDER BY tenant_id IS NULL, id"
        );
        sqlx::query_as::<_, SeedTrainingData>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a tenant-owned sample. `service_category` must already be resolved.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateSeedTrainingData,
        service_category: &str,
    ) -> Result<SeedTrainingData, sqlx::Error> {
        let query = format!(
            "INSERT INTO seed_training_data
                (tenant_id, service_category, style, body_region, size_cm, is_color, price_cents)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, false), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SeedTrainingData>(&query)
            .bind(tenant_id)
            .bind(service_category)
            .bind(&input.style)
            .bind(&input.body_region)
            .bind(input.size_cm)
            .bind(input.is_color)
            .bind(input.price_cents)
            .fetch_one(pool)
            .await
    }

    /// Delete a tenant-owned sample. Baseline rows never match.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM seed_training_data WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Prices of visible samples matching `filter`, tenant rows first.
    ///
    /// `filter.service_type_id` is ignored here; callers map it to
    /// `filter.service_category`.
    pub async fn matching_prices(
        pool: &PgPool,
        tenant_id: DbId,
        filter: &PriceFilter,
        limit: i64,
    ) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT price_cents FROM seed_training_data
             WHERE (tenant_id IS NULL OR tenant_id = $1)
               AND ($2::text IS NULL OR service_category = $2)
               AND ($3::text IS NULL OR lower(style) = lower($3))
               AND ($4::text IS NULL OR lower(body_region) = lower($4))
               AND ($5::float8 IS NULL OR size_cm >= $5)
               AND ($6::float8 IS NULL OR size_cm < $6)
               AND ($7::bool IS NULL OR is_color = $7)
             ORDER BY tenant_id IS NULL, id DESC
             LIMIT $8",
        )
        .bind(tenant_id)
        .bind(&filter.service_category)
        .bind(&filter.style)
        .bind(&filter.body_region)
        .bind(filter.size_min_cm)
        .bind(filter.size_max_cm)
        .bind(filter.is_color)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
