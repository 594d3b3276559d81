//! Per-artist commission override ("benefit") model and DTOs.

use inkstudio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `artist_benefits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistBenefit {
    pub id: DbId,
    pub tenant_id: DbId,
    pub user_id: DbId,
    pub share_percent: f64,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateArtistBenefit {
    pub user_id: DbId,
    pub share_percent: f64,
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateArtistBenefit {
    pub share_percent: Option<f64>,
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
