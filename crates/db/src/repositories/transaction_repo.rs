//! Repository for the `transactions` table (the ledger).

use inkstudio_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::models::transaction::{
    CreateTransaction, LedgerRow, Transaction, TransactionListFilter, UpdateTransaction,
};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, tenant_id, kind, category, amount_cents, occurred_on, \
                        description, payment_method, session_id, created_at, updated_at";

/// Provides CRUD operations for ledger entries.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a manual (not session-linked) transaction.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions
                (tenant_id, kind, category, amount_cents, occurred_on, description, payment_method)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(tenant_id)
            .bind(&input.kind)
            .bind(&input.category)
            .bind(input.amount_cents)
            .bind(input.occurred_on)
            .bind(&input.description)
            .bind(&input.payment_method)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM transactions WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// The income entry generated for a session, if any.
    pub async fn find_by_session(
        pool: &PgPool,
        tenant_id: DbId,
        session_id: DbId,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions WHERE session_id = $1 AND tenant_id = $2"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(session_id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List transactions, most recent first.
    pub async fn list(
        pool: &PgPool,
        tenant_id: DbId,
        filter: &TransactionListFilter,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions
             WHERE tenant_id = $1
               AND ($2::text IS NULL OR kind = $2)
               AND ($3::text IS NULL OR lower(category) = lower($3))
               AND ($4::date IS NULL OR occurred_on >= $4)
               AND ($5::date IS NULL OR occurred_on <= $5)
             ORDER BY occurred_on DESC, id DESC
             LIMIT $6 OFFSET $7"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(tenant_id)
            .bind(&filter.kind)
            .bind(&filter.category)
            .bind(filter.from)
            .bind(filter.to)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// Update a manual transaction. Session-linked rows are never matched.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateTransaction,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!(
            "UPDATE transactions SET
                kind = COALESCE($3, kind),
                category = COALESCE($4, category),
                amount_cents = COALESCE($5, amount_cents),
                occurred_on = COALESCE($6, occurred_on),
                description = COALESCE($7, description),
                payment_method = COALESCE($8, payment_method)
             WHERE id = $1 AND tenant_id = $2 AND session_id IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(&input.kind)
            .bind(&input.category)
            .bind(input.amount_cents)
            .bind(input.occurred_on)
            .bind(&input.description)
            .bind(&input.payment_method)
            .fetch_optional(pool)
            .await
    }

    /// Delete a manual transaction. Session-linked rows are never matched.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM transactions WHERE id = $1 AND tenant_id = $2 AND session_id IS NULL",
        )
        .bind(id)
        .bind(tenant_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every entry dated within `[from, to]`, for the finance reports.
    pub async fn ledger_entries(
        pool: &PgPool,
        tenant_id: DbId,
        from: Date,
        to: Date,
    ) -> Result<Vec<LedgerRow>, sqlx::Error> {
        sqlx::query_as::<_, LedgerRow>(
            "SELECT kind, category, amount_cents, occurred_on, session_id
             FROM transactions
             WHERE tenant_id = $1 AND occurred_on BETWEEN $2 AND $3
             ORDER BY occurred_on, id",
        )
        .bind(tenant_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }
}
