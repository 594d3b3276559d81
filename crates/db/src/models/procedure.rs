//! Procedure (multi-session piece of work) model and DTOs.

use inkstudio_core::status::StatusId;
use inkstudio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::serialize_procedure_status;

/// A procedure row from the `procedures` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Procedure {
    pub id: DbId,
    pub tenant_id: DbId,
    pub client_id: DbId,
    pub service_type_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub body_region: Option<String>,
    pub style: Option<String>,
    pub estimated_sessions: Option<i32>,
    pub quoted_price_cents: Option<i64>,
    #[serde(rename = "status", serialize_with = "serialize_procedure_status")]
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new procedure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProcedure {
    pub client_id: DbId,
    pub service_type_id: Option<DbId>,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: String,
    pub description: Option<String>,
    pub body_region: Option<String>,
    pub style: Option<String>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub estimated_sessions: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub quoted_price_cents: Option<i64>,
    /// Status name; defaults to `planned`.
    pub status: Option<String>,
}

/// DTO for updating an existing procedure. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProcedure {
    pub service_type_id: Option<DbId>,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub body_region: Option<String>,
    pub style: Option<String>,
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub estimated_sessions: Option<i32>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub quoted_price_cents: Option<i64>,
    pub status: Option<String>,
}
