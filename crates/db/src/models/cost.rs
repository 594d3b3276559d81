//! Fixed (monthly) and variable (per-session) cost models.
//!
//! Both tables share the same shape, so a single row type serves both and
//! [`CostTable`] picks the table.

use inkstudio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Which cost table a repository call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostTable {
    /// Monthly overhead (rent, electricity, software).
    Fixed,
    /// Consumed per session (needles, ink, film).
    Variable,
}

impl CostTable {
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Fixed => "fixed_costs",
            Self::Variable => "variable_costs",
        }
    }

    pub fn entity_name(self) -> &'static str {
        match self {
            Self::Fixed => "FixedCost",
            Self::Variable => "VariableCost",
        }
    }
}

/// A row from `fixed_costs` or `variable_costs`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cost {
    pub id: DbId,
    pub tenant_id: DbId,
    pub name: String,
    pub amount_cents: i64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCost {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount_cents: i64,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCost {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount_cents: Option<i64>,
    pub is_active: Option<bool>,
}

/// Active cost totals used by the calculator and the costs summary.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CostTotals {
    pub monthly_fixed_cents: i64,
    pub per_session_variable_cents: i64,
    pub fixed_count: i64,
    pub variable_count: i64,
}
