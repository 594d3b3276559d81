//! Repository for the `fixed_costs` and `variable_costs` tables.
//!
//! The two tables are identical in shape; every method takes a
//! [`CostTable`] that selects which one is queried.

use inkstudio_core::types::DbId;
use sqlx::PgPool;

use crate::models::cost::{Cost, CostTable, CostTotals, CreateCost, UpdateCost};

const COLUMNS: &str = "id, tenant_id, name, amount_cents, is_active, created_at, updated_at";

/// Provides CRUD operations for fixed and variable costs.
pub struct CostRepo;

impl CostRepo {
    pub async fn create(
        pool: &PgPool,
        table: CostTable,
        tenant_id: DbId,
        input: &CreateCost,
    ) -> Result<Cost, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (tenant_id, name, amount_cents, is_active)
             VALUES ($1, $2, $3, COALESCE($4, true))
             RETURNING {COLUMNS}",
            table.table_name()
        );
        sqlx::query_as::<_, Cost>(&query)
            .bind(tenant_id)
            .bind(&input.name)
            .bind(input.amount_cents)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        table: CostTable,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Cost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE id = $1 AND tenant_id = $2",
            table.table_name()
        );
        sqlx::query_as::<_, Cost>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List all costs of a table, active first, then by name.
    pub async fn list(
        pool: &PgPool,
        table: CostTable,
        tenant_id: DbId,
    ) -> Result<Vec<Cost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE tenant_id = $1 ORDER BY is_active DESC, name, id",
            table.table_name()
        );
        sqlx::query_as::<_, Cost>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        table: CostTable,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateCost,
    ) -> Result<Option<Cost>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET
                name = COALESCE($3, name),
                amount_cents = COALESCE($4, amount_cents),
                is_active = COALESCE($5, is_active)
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}",
            table.table_name()
        );
        sqlx::query_as::<_, Cost>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(&input.name)
            .bind(input.amount_cents)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(
        pool: &PgPool,
        table: CostTable,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE id = $1 AND tenant_id = $2",
            table.table_name()
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Totals over active rows of both tables.
    pub async fn totals(pool: &PgPool, tenant_id: DbId) -> Result<CostTotals, sqlx::Error> {
        let (monthly_fixed_cents, fixed_count) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COALESCE(SUM(amount_cents), 0)::bigint, COUNT(*)
             FROM fixed_costs WHERE tenant_id = $1 AND is_active = true",
        )
        .bind(tenant_id)
        .fetch_one(pool)
        .await?;

        let (per_session_variable_cents, variable_count) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COALESCE(SUM(amount_cents), 0)::bigint, COUNT(*)
             FROM variable_costs WHERE tenant_id = $1 AND is_active = true",
        )
        .bind(tenant_id)
        .fetch_one(pool)
        .await?;

        Ok(CostTotals {
            monthly_fixed_cents,
            per_session_variable_cents,
            fixed_count,
            variable_count,
        })
    }
}
