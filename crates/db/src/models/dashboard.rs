//! Read models for the dashboard and the client history view.

use inkstudio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::client::Client;
use crate::models::procedure::Procedure;
use crate::models::tattoo_session::TattooSession;

/// An upcoming session joined with its client's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UpcomingSession {
    pub id: DbId,
    pub client_id: DbId,
    pub client_name: String,
    pub artist_id: Option<DbId>,
    pub scheduled_at: Timestamp,
    pub duration_minutes: Option<i32>,
    pub style: Option<String>,
    pub body_region: Option<String>,
    pub price_cents: i64,
}

/// Session counters for the dashboard.
#[derive(Debug, Clone, Copy, Default, FromRow, Serialize)]
pub struct SessionCounts {
    pub sessions_upcoming: i64,
    pub sessions_completed_this_month: i64,
}

/// Response of `GET /dashboard`.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub clients_total: i64,
    pub sessions_upcoming: i64,
    pub sessions_completed_this_month: i64,
    pub income_this_month_cents: i64,
    pub expense_this_month_cents: i64,
    pub net_this_month_cents: i64,
    pub next_sessions: Vec<UpcomingSession>,
}

/// Response of `GET /clients/{id}/history`.
#[derive(Debug, Clone, Serialize)]
pub struct ClientHistory {
    pub client: Client,
    pub sessions: Vec<TattooSession>,
    pub procedures: Vec<Procedure>,
    pub total_spent_cents: i64,
    pub completed_sessions: i64,
}
