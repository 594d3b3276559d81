//! Repository for the `tenants` table.

use inkstudio_core::types::DbId;
use sqlx::PgPool;

use crate::models::tenant::{CreateTenant, Tenant, UpdateTenant};
use crate::models::user::{CreateUser, User};
use crate::repositories::user_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, kind, created_at, updated_at";

/// Provides operations for tenants.
pub struct TenantRepo;

impl TenantRepo {
    /// Create a tenant together with its first (owner) user.
    ///
    /// Runs in a transaction so a duplicate e-mail leaves no orphan tenant.
    /// `owner.tenant_id` is ignored and replaced by the new tenant's id.
    pub async fn create_with_owner(
        pool: &PgPool,
        tenant: &CreateTenant,
        owner: &CreateUser,
    ) -> Result<(Tenant, User), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO tenants (name, kind) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Tenant>(&query)
            .bind(&tenant.name)
            .bind(&tenant.kind)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO users (tenant_id, name, email, password_hash, role_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            user_repo::COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(created.id)
            .bind(&owner.name)
            .bind(&owner.email)
            .bind(&owner.password_hash)
            .bind(owner.role_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((created, user))
    }

    /// Find a tenant by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE id = $1");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a tenant. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTenant,
    ) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!(
            "UPDATE tenants SET
                name = COALESCE($2, name),
                kind = COALESCE($3, kind)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.kind)
            .fetch_optional(pool)
            .await
    }
}
