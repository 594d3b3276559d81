//! Repository for the `work_settings` table (one row per tenant).

use inkstudio_core::pricing::WorkParameters;
use inkstudio_core::types::DbId;
use sqlx::PgPool;

use crate::models::work_settings::WorkSettings;

const COLUMNS: &str = "id, tenant_id, working_days_per_month, hours_per_day, \
                        profit_margin_percent, tax_percent, card_fee_percent, created_at, updated_at";

pub struct WorkSettingsRepo;

impl WorkSettingsRepo {
    /// The tenant's stored settings, or `None` if defaults apply.
    pub async fn find(pool: &PgPool, tenant_id: DbId) -> Result<Option<WorkSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_settings WHERE tenant_id = $1");
        sqlx::query_as::<_, WorkSettings>(&query)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// The tenant's effective calculator parameters.
    pub async fn parameters(pool: &PgPool, tenant_id: DbId) -> Result<WorkParameters, sqlx::Error> {
        Ok(Self::find(pool, tenant_id)
            .await?
            .as_ref()
            .map(WorkParameters::from)
            .unwrap_or_default())
    }

    /// Insert or replace the tenant's settings.
    pub async fn upsert(
        pool: &PgPool,
        tenant_id: DbId,
        params: &WorkParameters,
    ) -> Result<WorkSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_settings
                (tenant_id, working_days_per_month, hours_per_day, profit_margin_percent,
                 tax_percent, card_fee_percent)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT ON CONSTRAINT uq_work_settings_tenant DO UPDATE SET
                working_days_per_month = EXCLUDED.working_days_per_month,
                hours_per_day = EXCLUDED.hours_per_day,
                profit_margin_percent = EXCLUDED.profit_margin_percent,
                tax_percent = EXCLUDED.tax_percent,
                card_fee_percent = EXCLUDED.card_fee_percent
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkSettings>(&query)
            .bind(tenant_id)
            .bind(params.working_days_per_month)
            .bind(params.hours_per_day)
            .bind(params.profit_margin_percent)
            .bind(params.tax_percent)
            .bind(params.card_fee_percent)
            .fetch_one(pool)
            .await
    }
}
