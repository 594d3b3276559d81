//! Handlers for the `/finance` reports. Owner only.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Datelike, NaiveDate, Utc};
use inkstudio_core::ledger::{
    monthly_breakdown, summarize, year_bounds, LedgerEntry, LedgerSummary, MonthTotals,
};
use inkstudio_core::types::DbId;
use inkstudio_db::repositories::TransactionRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::rbac::RequireOwner;
use crate::query::DateRangeParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /finance/monthly`.
#[derive(Debug, Default, Deserialize)]
pub struct YearParams {
    pub year: Option<i32>,
}

/// Response payload of `GET /finance/summary`.
#[derive(Debug, Serialize)]
pub struct FinanceSummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(flatten)]
    pub totals: LedgerSummary,
}

/// Response payload of `GET /finance/monthly`.
#[derive(Debug, Serialize)]
pub struct MonthlyReport {
    pub year: i32,
    pub months: Vec<MonthTotals>,
}

/// GET /api/v1/finance/summary?from=&to=
///
/// Defaults to the current calendar month.
pub async fn summary(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Query(range): Query<DateRangeParams>,
) -> AppResult<Json<DataResponse<FinanceSummary>>> {
    let (from, to) = range.or_month_of(Utc::now().date_naive())?;
    let entries = load_entries(&state, auth.tenant_id, from, to).await?;

    Ok(Json(DataResponse {
        data: FinanceSummary {
            from,
            to,
            totals: summarize(&entries),
        },
    }))
}

/// GET /api/v1/finance/monthly?year=
///
/// Twelve rows, one per month. Defaults to the current year.
pub async fn monthly(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Query(params): Query<YearParams>,
) -> AppResult<Json<DataResponse<MonthlyReport>>> {
    let year = params.year.unwrap_or_else(|| Utc::now().year());
    let (from, to) = year_bounds(year)?;
    let entries = load_entries(&state, auth.tenant_id, from, to).await?;

    Ok(Json(DataResponse {
        data: MonthlyReport {
            year,
            months: monthly_breakdown(&entries, year),
        },
    }))
}

async fn load_entries(
    state: &AppState,
    tenant_id: DbId,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<LedgerEntry>> {
    let rows = TransactionRepo::ledger_entries(&state.pool, tenant_id, from, to).await?;
    Ok(rows.into_iter().map(LedgerEntry::from).collect())
}
