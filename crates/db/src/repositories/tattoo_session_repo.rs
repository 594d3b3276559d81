//! Repository for the `tattoo_sessions` table.
//!
//! Completing, re-pricing and deleting a session touch the linked ledger
//! entry in the same database transaction.

use inkstudio_core::ledger::KIND_INCOME;
use inkstudio_core::session_lifecycle::SESSION_INCOME_CATEGORY;
use inkstudio_core::status::{SessionStatus, StatusId};
use inkstudio_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::models::tattoo_session::{
    ArtistSalesRow, CreateTattooSession, PriceFilter, SessionListFilter, TattooSession,
    UpdateTattooSession,
};
use crate::models::transaction::Transaction;
use crate::repositories::transaction_repo;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, tenant_id, client_id, procedure_id, service_type_id, artist_id, \
                        scheduled_at, duration_minutes, body_region, style, size_cm, is_color, \
                        complexity, price_cents, deposit_cents, status_id, completed_at, notes, \
                        created_at, updated_at";

/// Provides CRUD and lifecycle operations for tattoo sessions.
pub struct TattooSessionRepo;

impl TattooSessionRepo {
    /// Insert a new session in the `scheduled` state.
    pub async fn create(
        pool: &PgPool,
        tenant_id: DbId,
        input: &CreateTattooSession,
    ) -> Result<TattooSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO tattoo_sessions
                (tenant_id, client_id, procedure_id, service_type_id, artist_id, scheduled_at,
                 duration_minutes, body_region, style, size_cm, is_color, complexity,
                 price_cents, deposit_cents, status_id, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, false), $12,
                     COALESCE($13, 0), COALESCE($14, 0), $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TattooSession>(&query)
            .bind(tenant_id)
            .bind(input.client_id)
            .bind(input.procedure_id)
            .bind(input.service_type_id)
            .bind(input.artist_id)
            .bind(input.scheduled_at)
            .bind(input.duration_minutes)
            .bind(&input.body_region)
            .bind(&input.style)
            .bind(input.size_cm)
            .bind(input.is_color)
            .bind(input.complexity)
            .bind(input.price_cents)
            .bind(input.deposit_cents)
            .bind(SessionStatus::Scheduled.id())
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
    ) -> Result<Option<TattooSession>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tattoo_sessions WHERE id = $1 AND tenant_id = $2");
        sqlx::query_as::<_, TattooSession>(&query)
            .bind(id)
            .bind(tenant_id)
            .fetch_optional(pool)
            .await
    }

    /// List sessions by schedule (latest first). Date bounds are inclusive
    /// and compare the UTC calendar day of `scheduled_at`.
    pub async fn list(
        pool: &PgPool,
        tenant_id: DbId,
        filter: &SessionListFilter,
    ) -> Result<Vec<TattooSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tattoo_sessions
             WHERE tenant_id = $1
               AND ($2::bigint IS NULL OR client_id = $2)
               AND ($3::smallint IS NULL OR status_id = $3)
               AND ($4::date IS NULL OR (scheduled_at AT TIME ZONE 'UTC')::date >= $4)
               AND ($5::date IS NULL OR (scheduled_at AT TIME ZONE 'UTC')::date <= $5)
             ORDER BY scheduled_at DESC, id DESC
             LIMIT $6 OFFSET $7"
        );
        sqlx::query_as::<_, TattooSession>(&query)
            .bind(tenant_id)
            .bind(filter.client_id)
            .bind(filter.status_id)
            .bind(filter.from)
            .bind(filter.to)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// Every session of one client, latest first.
    pub async fn list_for_client(
        pool: &PgPool,
        tenant_id: DbId,
        client_id: DbId,
    ) -> Result<Vec<TattooSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tattoo_sessions
             WHERE tenant_id = $1 AND client_id = $2
             ORDER BY scheduled_at DESC, id DESC"
        );
        sqlx::query_as::<_, TattooSession>(&query)
            .bind(tenant_id)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Sum of completed session prices and the number of completed sessions
    /// for one client.
    pub async fn client_totals(
        pool: &PgPool,
        tenant_id: DbId,
        client_id: DbId,
    ) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as::<_, (i64, i64)>(
            "SELECT COALESCE(SUM(price_cents), 0)::bigint, COUNT(*)
             FROM tattoo_sessions
             WHERE tenant_id = $1 AND client_id = $2 AND status_id = $3",
        )
        .bind(tenant_id)
        .bind(client_id)
        .bind(SessionStatus::Completed.id())
        .fetch_one(pool)
        .await
    }

    /// Update a session. Only non-`None` fields are applied.
    ///
    /// `status_change` is `(from, to)`; the row is only written while it is
    /// still in `from`, so `None` is returned if another request moved it.
    ///
    /// When the price of a completed session changes, the linked income
    /// entry follows it inside the same transaction.
    pub async fn update(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        input: &UpdateTattooSession,
        status_change: Option<(SessionStatus, SessionStatus)>,
    ) -> Result<Option<TattooSession>, sqlx::Error> {
        let expected: Option<StatusId> = status_change.map(|(from, _)| from.id());
        let target: Option<StatusId> = status_change.map(|(_, to)| to.id());
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE tattoo_sessions SET
                procedure_id = COALESCE($3, procedure_id),
                service_type_id = COALESCE($4, service_type_id),
                artist_id = COALESCE($5, artist_id),
                scheduled_at = COALESCE($6, scheduled_at),
                duration_minutes = COALESCE($7, duration_minutes),
                body_region = COALESCE($8, body_region),
                style = COALESCE($9, style),
                size_cm = COALESCE($10, size_cm),
                is_color = COALESCE($11, is_color),
                complexity = COALESCE($12, complexity),
                price_cents = COALESCE($13, price_cents),
                deposit_cents = COALESCE($14, deposit_cents),
                notes = COALESCE($15, notes),
                status_id = COALESCE($16, status_id)
             WHERE id = $1 AND tenant_id = $2
               AND ($17::smallint IS NULL OR status_id = $17)
             RETURNING {COLUMNS}"
        );
        let session = sqlx::query_as::<_, TattooSession>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(input.procedure_id)
            .bind(input.service_type_id)
            .bind(input.artist_id)
            .bind(input.scheduled_at)
            .bind(input.duration_minutes)
            .bind(&input.body_region)
            .bind(&input.style)
            .bind(input.size_cm)
            .bind(input.is_color)
            .bind(input.complexity)
            .bind(input.price_cents)
            .bind(input.deposit_cents)
            .bind(&input.notes)
            .bind(target)
            .bind(expected)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(ref s) = session {
            if input.price_cents.is_some() && s.status_id == SessionStatus::Completed.id() {
                Self::sync_linked_transaction(&mut tx, s).await?;
            }
        }

        tx.commit().await?;
        Ok(session)
    }

    /// Move a session from one status to another without touching the
    /// ledger. Returns `None` if the row is missing or no longer in `from`.
    pub async fn transition(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        from: SessionStatus,
        to: SessionStatus,
    ) -> Result<Option<TattooSession>, sqlx::Error> {
        let query = format!(
            "UPDATE tattoo_sessions SET status_id = $4
             WHERE id = $1 AND tenant_id = $2 AND status_id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TattooSession>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(from.id())
            .bind(to.id())
            .fetch_optional(pool)
            .await
    }

    /// Complete a scheduled session and record its income.
    ///
    /// Returns `None` if the session is missing or not `scheduled`. A zero
    /// price completes the session without a ledger entry.
    pub async fn complete(
        pool: &PgPool,
        tenant_id: DbId,
        id: DbId,
        price_cents: Option<i64>,
        payment_method: Option<&str>,
        occurred_on: Date,
    ) -> Result<Option<(TattooSession, Option<Transaction>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE tattoo_sessions SET
                status_id = $4,
                completed_at = NOW(),
                price_cents = COALESCE($5, price_cents)
             WHERE id = $1 AND tenant_id = $2 AND status_id = $3
             RETURNING {COLUMNS}"
        );
        let session = sqlx::query_as::<_, TattooSession>(&query)
            .bind(id)
            .bind(tenant_id)
            .bind(SessionStatus::Scheduled.id())
            .bind(SessionStatus::Completed.id())
            .bind(price_cents)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(session) = session else {
            tx.rollback().await?;
            return Ok(None);
        };

        let entry = if session.price_cents > 0 {
            let query = format!(
                "INSERT INTO transactions
                    (tenant_id, kind, category, amount_cents, occurred_on, payment_method, session_id)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)
                 RETURNING {}",
                transaction_repo::COLUMNS
            );
            let row = sqlx::query_as::<_, Transaction>(&query)
                .bind(tenant_id)
                .bind(KIND_INCOME)
                .bind(SESSION_INCOME_CATEGORY)
                .bind(session.price_cents)
                .bind(occurred_on)
                .bind(payment_method)
                .bind(session.id)
                .fetch_one(&mut *tx)
                .await?;
            Some(row)
        } else {
            None
        };

        tx.commit().await?;
        Ok(Some((session, entry)))
    }

    /// Delete a session together with its linked ledger entry.
    pub async fn delete(pool: &PgPool, tenant_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM transactions WHERE session_id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM tattoo_sessions WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Prices of the most recent completed sessions matching `filter`.
    pub async fn completed_prices(
        pool: &PgPool,
        tenant_id: DbId,
        filter: &PriceFilter,
        limit: i64,
    ) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT price_cents FROM tattoo_sessions
             WHERE tenant_id = $1
               AND status_id = $2
               AND price_cents > 0
               AND ($3::bigint IS NULL OR service_type_id = $3)
               AND ($4::text IS NULL OR lower(style) = lower($4))
               AND ($5::text IS NULL OR lower(body_region) = lower($5))
               AND ($6::float8 IS NULL OR size_cm >= $6)
               AND ($7::float8 IS NULL OR size_cm < $7)
               AND ($8::bool IS NULL OR is_color = $8)
             ORDER BY completed_at DESC NULLS LAST, id DESC
             LIMIT $9",
        )
        .bind(tenant_id)
        .bind(SessionStatus::Completed.id())
        .bind(filter.service_type_id)
        .bind(&filter.style)
        .bind(&filter.body_region)
        .bind(filter.size_min_cm)
        .bind(filter.size_max_cm)
        .bind(filter.is_color)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Completed-session totals per artist for sessions completed between
    /// `from` and `to` (inclusive, UTC days). Sessions without an artist are
    /// not attributed to anyone.
    pub async fn artist_sales(
        pool: &PgPool,
        tenant_id: DbId,
        from: Date,
        to: Date,
    ) -> Result<Vec<ArtistSalesRow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSalesRow>(
            "SELECT s.artist_id AS artist_id,
                    u.name AS artist_name,
                    COUNT(*) AS session_count,
                    COALESCE(SUM(s.price_cents), 0)::bigint AS gross_cents
             FROM tattoo_sessions s
             JOIN users u ON u.id = s.artist_id
             WHERE s.tenant_id = $1
               AND s.status_id = $2
               AND (s.completed_at AT TIME ZONE 'UTC')::date BETWEEN $3 AND $4
             GROUP BY s.artist_id, u.name
             ORDER BY u.name, s.artist_id",
        )
        .bind(tenant_id)
        .bind(SessionStatus::Completed.id())
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Make the linked income entry match the session price: removed at
    /// zero, updated if present, created otherwise.
    async fn sync_linked_transaction(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        session: &TattooSession,
    ) -> Result<(), sqlx::Error> {
        if session.price_cents <= 0 {
            sqlx::query("DELETE FROM transactions WHERE session_id = $1 AND tenant_id = $2")
                .bind(session.id)
                .bind(session.tenant_id)
                .execute(&mut **tx)
                .await?;
            return Ok(());
        }

        let updated = sqlx::query(
            "UPDATE transactions SET amount_cents = $3 WHERE session_id = $1 AND tenant_id = $2",
        )
        .bind(session.id)
        .bind(session.tenant_id)
        .bind(session.price_cents)
        .execute(&mut **tx)
        .await?;

        if updated.rows_affected() == 0 {
            sqlx::query(
                "INSERT INTO transactions
                    (tenant_id, kind, category, amount_cents, occurred_on, session_id)
                 VALUES ($1, $2, $3, $4,
                         COALESCE(($5::timestamptz AT TIME ZONE 'UTC')::date, CURRENT_DATE), $6)",
            )
            .bind(session.tenant_id)
            .bind(KIND_INCOME)
            .bind(SESSION_INCOME_CATEGORY)
            .bind(session.price_cents)
            .bind(session.completed_at)
            .bind(session.id)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}
