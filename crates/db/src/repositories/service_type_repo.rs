//! Repository for the `service_types` table.

use inkstudio_core::types::DbId;
use sqlx::PgPool;

use crate::models::service_type::{CreateServiceType, ServiceType, UpdateServiceType};

const COLUMNS: &str = "id, tenant_id, name, category, default_duration_minutes, \
                        base_price_cents, is_active, created_at, updated_at";

/// Provides CRUD operations for service types.
pub struct ServiceTypeRepo;

impl ServiceTypeRepo {
    /// Insert a new service type. `category` must already be resolved.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateServiceType,
        category: &str,
    ) -> Result<ServiceType, sqlx::Error> {
        let query = format!(
            "INSERT INTO service_types
                (tenant_id, name, category, default_duration_minutes, base_price_cents, is_active)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceType>(&query)
            .bind(tenant_id)
            .bind(&input.name)
            .bind(category)
            .bind(input.default_duration_minutes)
            .bind(input.base_price_cents)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<ServiceType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_types WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, ServiceType>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List service types by name. Inactive rows only when asked for.
    pub async fn list(
        pool: &PgPool,
        tenant_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<ServiceType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM service_types
             WHERE tenant_id = $1 AND ($2 OR is_active = true)
             ORDER BY name"
        );
        sqlx::query_as::<_, ServiceType>(&query)
            .bind(tenant_id)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateServiceType,
    ) -> Result<Option<ServiceType>, sqlx::Error> {
        let query = format!(
            "UPDATE service_types SET
                name = COALESCE($3, name),
                category = COALESCE($4, category),
                default_duration_minutes = COALESCE($5, default_duration_minutes),
                base_price_cents = COALESCE($6, base_price_cents),
                is_active = COALESCE($7, is_active)
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceType>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.default_duration_minutes)
            .bind(input.base_price_cents)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service type. Sessions and procedures keep their rows with
    /// `service_type_id` cleared.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service_types WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
