//! Handler for `GET /dashboard`.

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use inkstudio_core::ledger::{month_bounds, summarize, LedgerEntry};
use inkstudio_db::models::dashboard::Dashboard;
use inkstudio_db::repositories::{ClientRepo, DashboardRepo, TransactionRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// How far ahead "upcoming" looks.
const UPCOMING_WINDOW_DAYS: i64 = 7;
/// How many upcoming sessions are listed.
const NEXT_SESSIONS_LIMIT: i64 = 5;

/// GET /api/v1/dashboard
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Dashboard>>> {
    let now = Utc::now();
    let (month_start, month_end) = month_bounds(now.date_naive());

    let clients_total = ClientRepo::count(&state.pool, auth.tenant_id).await?;
    let counts = DashboardRepo::session_counts(
        &state.pool,
        auth.tenant_id,
        now,
        now + Duration::days(UPCOMING_WINDOW_DAYS),
        month_start,
        month_end,
    )
    .await?;
    let next_sessions =
        DashboardRepo::upcoming_sessions(&state.pool, auth.tenant_id, now, NEXT_SESSIONS_LIMIT)
            .await?;

    let entries: Vec<LedgerEntry> =
        TransactionRepo::ledger_entries(&state.pool, auth.tenant_id, month_start, month_end)
            .await?
            .into_iter()
            .map(LedgerEntry::from)
            .collect();
    let month = summarize(&entries);

    Ok(Json(DataResponse {
        data: Dashboard {
            clients_total,
            sessions_upcoming: counts.sessions_upcoming,
            sessions_completed_this_month: counts.sessions_completed_this_month,
            income_this_month_cents: month.income_cents,
            expense_this_month_cents: month.expense_cents,
            net_this_month_cents: month.net_cents,
            next_sessions,
        },
    }))
}
