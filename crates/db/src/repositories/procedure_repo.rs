//! Repository for the `procedures` table.

use inkstudio_core::status::StatusId;
use inkstudio_core::types::DbId;
use sqlx::PgPool;

use crate::models::procedure::{CreateProcedure, Procedure, UpdateProcedure};

const COLUMNS: &str = "id, tenant_id, client_id, service_type_id, title, description, \
                        body_region, style, estimated_sessions, quoted_price_cents, status_id, \
                        created_at, updated_at";

/// Provides CRUD operations for procedures.
pub struct ProcedureRepo;

impl ProcedureRepo {
    /// Insert a new procedure with an already resolved status.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateProcedure,
        status_id: StatusId,
    ) -> Result<Procedure, sqlx::Error> {
        let query = format!(
            "INSERT INTO procedures
                (tenant_id, client_id, service_type_id, title, description, body_region, style,
                 estimated_sessions, quoted_price_cents, status_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Procedure>(&query)
            .bind(tenant_id)
            .bind(input.client_id)
            .bind(input.service_type_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.body_region)
            .bind(&input.style)
            .bind(input.estimated_sessions)
            .bind(input.quoted_price_cents)
            .bind(status_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Procedure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM procedures WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, Procedure>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List procedures, newest first, optionally for one client.
    pub async fn list(
        pool: &PgPool,
        tenant_id: DbId,
        client_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Procedure>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM procedures
             WHERE tenant_id = $1 AND ($2::bigint IS NULL OR client_id = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Procedure>(&query)
            .bind(tenant_id)
            .bind(client_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a procedure. `status_id` is the resolved form of `input.status`.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateProcedure,
        status_id: Option<StatusId>,
    ) -> Result<Option<Procedure>, sqlx::Error> {
        let query = format!(
            "UPDATE procedures SET
                service_type_id = COALESCE($3, service_type_id),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                body_region = COALESCE($6, body_region),
                style = COALESCE($7, style),
                estimated_sessions = COALESCE($8, estimated_sessions),
                quoted_price_cents = COALESCE($9, quoted_price_cents),
                status_id = COALESCE($10, status_id)
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Procedure>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(input.service_type_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.body_region)
            .bind(&input.style)
            .bind(input.estimated_sessions)
            .bind(input.quoted_price_cents)
            .bind(status_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a procedure. Its sessions keep their rows with `procedure_id` cleared.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM procedures WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
