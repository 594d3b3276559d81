//! Shared query parameter types for API handlers.

use chrono::NaiveDate;
use inkstudio_core::error::CoreError;
use inkstudio_core::ledger::month_bounds;
use inkstudio_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use inkstudio_core::validation::validate_date_range;
use serde::Deserialize;

/// Clamp raw `?limit=&offset=` values to the API bounds.
///
/// List endpoints declare `limit`/`offset` inline next to their filters;
/// `#[serde(flatten)]` breaks numeric parsing of query strings.
pub fn page_bounds(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    (
        clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
        clamp_offset(offset),
    )
}

/// Query parameters for list endpoints that support an `include_inactive` flag.
#[derive(Debug, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}

/// Optional inclusive date range (`?from=YYYY-MM-DD&to=YYYY-MM-DD`).
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRangeParams {
    /// Resolve the range, filling a missing bound from the calendar month
    /// of `today`. A reversed range is a validation error.
    pub fn or_month_of(&self, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), CoreError> {
        let (month_start, month_end) = month_bounds(today);
        let from = self.from.unwrap_or(month_start);
        let to = self.to.unwrap_or(month_end);
        validate_date_range(Some(&from), Some(&to))?;
        Ok((from, to))
    }
}
