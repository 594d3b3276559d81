//! Seed training data: historical price samples for the price suggestion.

use inkstudio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `seed_training_data` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeedTrainingData {
    pub id: DbId,
    /// `None` for the shared baseline rows.
    pub tenant_id: Option<DbId>,
    pub service_category: String,
    pub style: Option<String>,
    pub body_region: Option<String>,
    pub size_cm: Option<f64>,
    pub is_color: bool,
    pub price_cents: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSeedTrainingData {
    /// Defaults to `tattoo`.
    pub service_category: Option<String>,
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub style: Option<String>,
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub body_region: Option<String>,
    pub size_cm: Option<f64>,
    pub is_color: Option<bool>,
    #[validate(range(min = 1, message = "must be greater than zero"))]
    pub price_cents: i64,
}
