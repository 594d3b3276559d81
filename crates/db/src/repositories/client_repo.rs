//! Repository for the `clients` table.

use inkstudio_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient, UpdateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, name, email, phone, birth_date, instagram, allergies, \
                        notes, created_at, updated_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateClient,
    ) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (tenant_id, name, email, phone, birth_date, instagram, allergies, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(tenant_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.birth_date)
            .bind(&input.instagram)
            .bind(&input.allergies)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List clients alphabetically, optionally filtered by an `ILIKE`
    /// pattern matched against name, e-mail and phone.
    pub async fn list(
        pool: &PgPool,
        tenant_id: DbId,
        pattern: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clients
             WHERE tenant_id = $1
               AND ($2::text IS NULL
                    OR name ILIKE $2
                    OR email ILIKE $2
                    OR phone ILIKE $2)
             ORDER BY lower(name), id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(tenant_id)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, tenant_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clients WHERE tenant_id = $1")
            .bind(tenant_id)
            .fetch_one(pool)
            .await
    }

    /// Update a client. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = COALESCE($3, name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                birth_date = COALESCE($6, birth_date),
                instagram = COALESCE($7, instagram),
                allergies = COALESCE($8, allergies),
                notes = COALESCE($9, notes)
             WHERE id = $1 AND tenant_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.birth_date)
            .bind(&input.instagram)
            .bind(&input.allergies)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client. Procedures and sessions go with it (FK cascade);
    /// ledger entries stay with their `session_id` cleared.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
