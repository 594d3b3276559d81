//! Repository for the `studio_configs` table (one row per tenant).

use inkstudio_core::types::DbId;
use sqlx::PgPool;

use crate::models::studio_config::StudioConfig;

const COLUMNS: &str = "id, tenant_id, default_artist_share_percent, studio_covers_materials, \
                        payout_day, created_at, updated_at";

pub struct StudioConfigRepo;

impl StudioConfigRepo {
    pub async fn find(pool: &PgPool, tenant_id: DbId) -> Result<Option<StudioConfig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM studio_configs WHERE tenant_id = $1");
        sqlx::query_as::<_, StudioConfig>(&query)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the tenant's configuration.
    pub async fn upsert(
        pool: &PgPool,
        tenant_id: DbId,
        default_artist_share_percent: f64,
        studio_covers_materials: bool,
        payout_day: i16,
    ) -> Result<StudioConfig, sqlx::Error> {
        let query = format!(
            "INSERT INTO studio_configs
                (tenant_id, default_artist_share_percent, studio_covers_materials, payout_day)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_studio_configs_tenant DO UPDATE SET
                default_artist_share_percent = EXCLUDED.default_artist_share_percent,
                studio_covers_materials = EXCLUDED.studio_covers_materials,
                payout_day = EXCLUDED.payout_day
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudioConfig>(&query)
            .bind(tenant_id)
            .bind(default_artist_share_percent)
            .bind(studio_covers_materials)
            .bind(payout_day)
            .fetch_one(pool)
            .await
    }
}
