//! Service type (catalogue entry) model and DTOs.

use inkstudio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A service type row from the `service_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceType {
    pub id: DbId,
    pub tenant_id: DbId,
    pub name: String,
    pub category: String,
    pub default_duration_minutes: Option<i32>,
    pub base_price_cents: Option<i64>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new service type.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServiceType {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,
    /// Defaults to `tattoo` if omitted.
    pub category: Option<String>,
    pub default_duration_minutes: Option<i32>,
    pub base_price_cents: Option<i64>,
    pub is_active: Option<bool>,
}

/// DTO for updating an existing service type. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateServiceType {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: Option<String>,
    pub category: Option<String>,
    pub default_duration_minutes: Option<i32>,
    pub base_price_cents: Option<i64>,
    pub is_active: Option<bool>,
}
