//! Tattoo session (appointment) model and DTOs.

use inkstudio_core::session_lifecycle::SessionFigures;
use inkstudio_core::status::StatusId;
use inkstudio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::serialize_session_status;

/// A session row from the `tattoo_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TattooSession {
    pub id: DbId,
    pub tenant_id: DbId,
    pub client_id: DbId,
    pub procedure_id: Option<DbId>,
    pub service_type_id: Option<DbId>,
    pub artist_id: Option<DbId>,
    pub scheduled_at: Timestamp,
    pub duration_minutes: Option<i32>,
    pub body_region: Option<String>,
    pub style: Option<String>,
    pub size_cm: Option<f64>,
    pub is_color: bool,
    pub complexity: Option<i16>,
    pub price_cents: i64,
    pub deposit_cents: i64,
    #[serde(rename = "status", serialize_with = "serialize_session_status")]
    pub status_id: StatusId,
    pub completed_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for scheduling a new session.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTattooSession {
    pub client_id: DbId,
    pub procedure_id: Option<DbId>,
    pub service_type_id: Option<DbId>,
    pub artist_id: Option<DbId>,
    pub scheduled_at: Timestamp,
    pub duration_minutes: Option<i32>,
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub body_region: Option<String>,
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub style: Option<String>,
    pub size_cm: Option<f64>,
    pub is_color: Option<bool>,
    pub complexity: Option<i16>,
    pub price_cents: Option<i64>,
    pub deposit_cents: Option<i64>,
    pub notes: Option<String>,
}

impl CreateTattooSession {
    pub fn figures(&self) -> SessionFigures {
        SessionFigures {
            duration_minutes: self.duration_minutes,
            complexity: self.complexity,
            size_cm: self.size_cm,
            price_cents: self.price_cents,
            deposit_cents: self.deposit_cents,
        }
    }
}

/// DTO for updating an existing session. All fields are optional.
///
/// `status` only accepts lifecycle moves that make sense through an edit
/// (rescheduling a cancelled or missed session); completion has its own
/// endpoint so the ledger entry is created with it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTattooSession {
    pub procedure_id: Option<DbId>,
    pub service_type_id: Option<DbId>,
    pub artist_id: Option<DbId>,
    pub scheduled_at: Option<Timestamp>,
    pub duration_minutes: Option<i32>,
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub body_region: Option<String>,
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub style: Option<String>,
    pub size_cm: Option<f64>,
    pub is_color: Option<bool>,
    pub complexity: Option<i16>,
    pub price_cents: Option<i64>,
    pub deposit_cents: Option<i64>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

impl UpdateTattooSession {
    pub fn figures(&self) -> SessionFigures {
        SessionFigures {
            duration_minutes: self.duration_minutes,
            complexity: self.complexity,
            size_cm: self.size_cm,
            price_cents: self.price_cents,
            deposit_cents: self.deposit_cents,
        }
    }
}

/// Body of `POST /sessions/{id}/complete`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CompleteTattooSession {
    /// Final price; defaults to the session's current price.
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price_cents: Option<i64>,
    pub payment_method: Option<String>,
    /// Ledger date; defaults to today (UTC).
    pub completed_on: Option<Date>,
}

/// Filters for listing sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionListFilter {
    pub client_id: Option<DbId>,
    pub status_id: Option<StatusId>,
    pub from: Option<Date>,
    pub to: Option<Date>,
    pub limit: i64,
    pub offset: i64,
}

/// Completed-session totals for one artist, used by payouts.
#[derive(Debug, Clone, FromRow)]
pub struct ArtistSalesRow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub session_count: i64,
    pub gross_cents: i64,
}

/// Filters shared by the own-history and seed-data price lookups.
#[derive(Debug, Clone, Default)]
pub struct PriceFilter {
    pub service_type_id: Option<DbId>,
    pub service_category: Option<String>,
    pub style: Option<String>,
    pub body_region: Option<String>,
    /// Half-open size range in centimetres.
    pub size_min_cm: Option<f64>,
    pub size_max_cm: Option<f64>,
    pub is_color: Option<bool>,
}
