//! Bookkeeping vocabulary and the arithmetic behind the finance reports.
//!
//! Every function here works on rows that were already fetched for a
//! tenant and a date range; nothing touches the database.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::{Cents, Date, DbId};
use crate::validation::{validate_one_of, validate_positive_cents};

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

pub const KIND_INCOME: &str = "income";
pub const KIND_EXPENSE: &str = "expense";

pub const VALID_KINDS: &[&str] = &[KIND_INCOME, KIND_EXPENSE];

pub const VALID_PAYMENT_METHODS: &[&str] = &["cash", "card", "pix", "transfer", "other"];

/// Longest accepted category label.
pub const MAX_CATEGORY_LEN: usize = 64;

/// Validate the fields of a ledger entry payload.
pub fn validate_entry(
    kind: Option<&str>,
    category: Option<&str>,
    amount_cents: Option<Cents>,
    payment_method: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(kind) = kind {
        validate_one_of(kind, VALID_KINDS, "kind")?;
    }
    if let Some(category) = category {
        let trimmed = category.trim();
        if trimmed.is_empty() || trimmed.len() > MAX_CATEGORY_LEN {
            return Err(CoreError::Validation(format!(
                "category must be between 1 and {MAX_CATEGORY_LEN} characters"
            )));
        }
    }
    if let Some(amount) = amount_cents {
        validate_positive_cents(amount, "amount_cents")?;
    }
    if let Some(method) = payment_method {
        validate_one_of(method, VALID_PAYMENT_METHODS, "payment_method")?;
    }
    Ok(())
}

/// Reject direct edits to entries generated from a completed session.
pub fn ensure_editable(session_id: Option<DbId>) -> Result<(), CoreError> {
    match session_id {
        Some(session_id) => Err(CoreError::Conflict(format!(
            "Transaction is linked to session {session_id}; change the session instead"
        ))),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// The slice of a transaction row the reports need.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub kind: String,
    pub category: String,
    pub amount_cents: Cents,
    pub occurred_on: Date,
    pub session_id: Option<DbId>,
}

/// Totals for one `(kind, category)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub kind: String,
    pub category: String,
    pub total_cents: Cents,
    pub count: i64,
}

/// Aggregate figures over a set of ledger entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub income_cents: Cents,
    pub expense_cents: Cents,
    pub net_cents: Cents,
    pub transaction_count: i64,
    pub session_income_cents: Cents,
    /// Mean income per session-linked entry, 0 when there are none.
    pub average_ticket_cents: Cents,
    /// Sorted by `total_cents` descending, then kind and category.
    pub by_category: Vec<CategoryTotal>,
}

/// Summarize a set of ledger entries.
pub fn summarize(entries: &[LedgerEntry]) -> LedgerSummary {
    let mut income = 0;
    let mut expense = 0;
    let mut session_income = 0;
    let mut session_count = 0i64;
    let mut categories: BTreeMap<(String, String), (Cents, i64)> = BTreeMap::new();

    for entry in entries {
        if entry.kind == KIND_INCOME {
            income += entry.amount_cents;
            if entry.session_id.is_some() {
                session_income += entry.amount_cents;
                session_count += 1;
            }
        } else {
            expense += entry.amount_cents;
        }
        let slot = categories
            .entry((entry.kind.clone(), entry.category.clone()))
            .or_insert((0, 0));
        slot.0 += entry.amount_cents;
        slot.1 += 1;
    }

    let mut by_category: Vec<CategoryTotal> = categories
        .into_iter()
        .map(|((kind, category), (total_cents, count))| CategoryTotal {
            kind,
            category,
            total_cents,
            count,
        })
        .collect();
    // BTreeMap order is the tie-breaker; the sort is stable.
    by_category.sort_by(|a, b| b.total_cents.cmp(&a.total_cents));

    let average_ticket_cents = if session_count > 0 {
        round_div(session_income, session_count)
    } else {
        0
    };

    LedgerSummary {
        income_cents: income,
        expense_cents: expense,
        net_cents: income - expense,
        transaction_count: entries.len() as i64,
        session_income_cents: session_income,
        average_ticket_cents,
        by_category,
    }
}

/// Income, expense and net for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthTotals {
    pub month: u32,
    pub income_cents: Cents,
    pub expense_cents: Cents,
    pub net_cents: Cents,
}

/// Break `entries` down into twelve months of `year`.
///
/// Entries outside `year` are ignored. Months without entries are present
/// with zero totals.
pub fn monthly_breakdown(entries: &[LedgerEntry], year: i32) -> Vec<MonthTotals> {
    let mut months: Vec<MonthTotals> = (1..=12)
        .map(|month| MonthTotals {
            month,
            income_cents: 0,
            expense_cents: 0,
            net_cents: 0,
        })
        .collect();

    for entry in entries.iter().filter(|e| e.occurred_on.year() == year) {
        let slot = &mut months[entry.occurred_on.month0() as usize];
        if entry.kind == KIND_INCOME {
            slot.income_cents += entry.amount_cents;
        } else {
            slot.expense_cents += entry.amount_cents;
        }
    }

    for month in &mut months {
        month.net_cents = month.income_cents - month.expense_cents;
    }
    months
}

/// First and last day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_first
        .and_then(|d| d.pred_opt())
        .unwrap_or(first);
    (first, last)
}

/// First and last day of `year`.
pub fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate), CoreError> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    let last = NaiveDate::from_ymd_opt(year, 12, 31);
    match (first, last) {
        (Some(first), Some(last)) => Ok((first, last)),
        _ => Err(CoreError::Validation(format!("year {year} is out of range"))),
    }
}

/// Integer division rounded half away from zero.
pub fn round_div(numerator: i64, denominator: i64) -> i64 {
    (numerator as f64 / denominator as f64).round() as i64
}
