//! Tattoo session lifecycle rules and field limits.
//!
//! ```text
//! scheduled ──> completed   (terminal)
//!     │  ▲
//!     ▼  │
//! cancelled / no_show
//! ```

use crate::error::CoreError;
use crate::status::SessionStatus;
use crate::validation::{validate_non_negative_cents, validate_range};

/// Longest bookable session (24 hours).
pub const MAX_DURATION_MINUTES: i32 = 24 * 60;
/// Lowest complexity grade.
pub const MIN_COMPLEXITY: i16 = 1;
/// Highest complexity grade.
pub const MAX_COMPLEXITY: i16 = 5;
/// Largest piece size accepted, in centimetres.
pub const MAX_SIZE_CM: f64 = 200.0;

/// Ledger category used for income generated by completed sessions.
pub const SESSION_INCOME_CATEGORY: &str = "session";

/// Check whether a session may move from `from` to `to`.
///
/// Staying in the same status is not a transition and is rejected, so a
/// second `complete` call surfaces as a conflict instead of a silent no-op.
pub fn validate_transition(from: SessionStatus, to: SessionStatus) -> Result<(), CoreError> {
    use SessionStatus::*;

    let allowed = match (from, to) {
        (Scheduled, Completed | Cancelled | NoShow) => true,
        (Cancelled | NoShow, Scheduled) => true,
        _ => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Session cannot move from {} to {}",
            from.name(),
            to.name()
        )))
    }
}

/// Optional numeric session fields, checked together on create and update.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionFigures {
    pub duration_minutes: Option<i32>,
    pub complexity: Option<i16>,
    pub size_cm: Option<f64>,
    pub price_cents: Option<i64>,
    pub deposit_cents: Option<i64>,
}

/// Validate the numeric fields of a session payload.
pub fn validate_figures(figures: &SessionFigures) -> Result<(), CoreError> {
    if let Some(minutes) = figures.duration_minutes {
        validate_range(minutes, 1, MAX_DURATION_MINUTES, "duration_minutes")?;
    }
    if let Some(complexity) = figures.complexity {
        validate_range(complexity, MIN_COMPLEXITY, MAX_COMPLEXITY, "complexity")?;
    }
    if let Some(size) = figures.size_cm {
        if !size.is_finite() || size <= 0.0 || size > MAX_SIZE_CM {
            return Err(CoreError::Validation(format!(
                "size_cm must be greater than 0 and at most {MAX_SIZE_CM}, got {size}"
            )));
        }
    }
    if let Some(price) = figures.price_cents {
        validate_non_negative_cents(price, "price_cents")?;
    }
    if let Some(deposit) = figures.deposit_cents {
        validate_non_negative_cents(deposit, "deposit_cents")?;
    }
    Ok(())
}
