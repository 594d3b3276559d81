//! Read-only queries backing `GET /dashboard`.

use inkstudio_core::status::SessionStatus;
use inkstudio_core::types::{Date, DbId, Timestamp};
use sqlx::PgPool;

use crate::models::dashboard::{SessionCounts, UpcomingSession};

pub struct DashboardRepo;

impl DashboardRepo {
    /// Scheduled sessions in `[now, until)` and sessions completed within
    /// `[month_start, month_end]` (UTC days).
    pub async fn session_counts(
        pool: &PgPool,
        tenant_id: DbId,
        now: Timestamp,
        until: Timestamp,
        month_start: Date,
        month_end: Date,
    ) -> Result<SessionCounts, sqlx::Error> {
        sqlx::query_as::<_, SessionCounts>(
            "SELECT
                COUNT(*) FILTER (
                    WHERE status_id = $2 AND scheduled_at >= $4 AND scheduled_at < $5
                ) AS sessions_upcoming,
                COUNT(*) FILTER (
                    WHERE status_id = $3
                      AND (completed_at AT TIME ZONE 'UTC')::date BETWEEN $6 AND $7
                ) AS sessions_completed_this_month
             FROM tattoo_sessions
             WHERE tenant_id = $1",
        )
        .bind(tenant_id)
        .bind(SessionStatus::Scheduled.id())
        .bind(SessionStatus::Completed.id())
        .bind(now)
        .bind(until)
        .bind(month_start)
        .bind(month_end)
        .fetch_one(pool)
        .await
    }

    /// The next scheduled sessions from `now`, soonest first.
    pub async fn upcoming_sessions(
        pool: &PgPool,
        tenant_id: DbId,
        now: Timestamp,
        limit: i64,
    ) -> Result<Vec<UpcomingSession>, sqlx::Error> {
        sqlx::query_as::<_, UpcomingSession>(
            "SELECT s.id, s.client_id, c.name AS client_name, s.artist_id, s.scheduled_at,
                    s.duration_minutes, s.style, s.body_region, s.price_cents
             FROM tattoo_sessions s
             JOIN clients c ON c.id = s.client_id
             WHERE s.tenant_id = $1 AND s.status_id = $2 AND s.scheduled_at >= $3
             ORDER BY s.scheduled_at, s.id
             LIMIT $4",
        )
        .bind(tenant_id)
        .bind(SessionStatus::Scheduled.id())
        .bind(now)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
