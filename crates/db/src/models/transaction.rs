//! Ledger transaction model and DTOs.

use inkstudio_core::ledger::LedgerEntry;
use inkstudio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A transaction row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub tenant_id: DbId,
    pub kind: String,
    pub category: String,
    pub amount_cents: i64,
    pub occurred_on: Date,
    pub description: Option<String>,
    pub payment_method: Option<String>,
    /// Set when the entry was generated by completing a session.
    pub session_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a manual transaction.
///
/// Session-linked entries are only created by completing a session, so
/// there is no `session_id` here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTransaction {
    pub kind: String,
    pub category: String,
    pub amount_cents: i64,
    pub occurred_on: Date,
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
    pub payment_method: Option<String>,
}

/// DTO for updating a manual transaction. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTransaction {
    pub kind: Option<String>,
    pub category: Option<String>,
    pub amount_cents: Option<i64>,
    pub occurred_on: Option<Date>,
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
    pub payment_method: Option<String>,
}

/// Filters for listing transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionListFilter {
    pub kind: Option<String>,
    pub category: Option<String>,
    pub from: Option<Date>,
    pub to: Option<Date>,
    pub limit: i64,
    pub offset: i64,
}

/// The subset of a transaction the finance reports aggregate over.
#[derive(Debug, Clone, FromRow)]
pub struct LedgerRow {
    pub kind: String,
    pub category: String,
    pub amount_cents: i64,
    pub occurred_on: Date,
    pub session_id: Option<DbId>,
}

impl From<LedgerRow> for LedgerEntry {
    fn from(row: LedgerRow) -> Self {
        Self {
            kind: row.kind,
            category: row.category,
            amount_cents: row.amount_cents,
            occurred_on: row.occurred_on,
            session_id: row.session_id,
        }
    }
}
