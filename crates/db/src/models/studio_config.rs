//! Studio commission configuration.

use inkstudio_core::commission::{DEFAULT_ARTIST_SHARE_PERCENT, DEFAULT_PAYOUT_DAY};
use inkstudio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `studio_configs` table.
#[derive(Debug, Clone, FromRow)]
pub struct StudioConfig {
    pub id: DbId,
    pub tenant_id: DbId,
    pub default_artist_share_percent: f64,
    pub studio_covers_materials: bool,
    pub payout_day: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// API view of the configuration, with defaults when nothing is stored.
#[derive(Debug, Clone, Serialize)]
pub struct StudioConfigResponse {
    pub default_artist_share_percent: f64,
    pub studio_covers_materials: bool,
    pub payout_day: i16,
    pub is_default: bool,
    pub updated_at: Option<Timestamp>,
}

impl StudioConfigResponse {
    pub fn from_row(row: Option<&StudioConfig>) -> Self {
        match row {
            Some(c) => Self {
                default_artist_share_percent: c.default_artist_share_percent,
                studio_covers_materials: c.studio_covers_materials,
                payout_day: c.payout_day,
                is_default: false,
                updated_at: Some(c.updated_at),
            },
            None => Self {
                default_artist_share_percent: DEFAULT_ARTIST_SHARE_PERCENT,
                studio_covers_materials: false,
                payout_day: DEFAULT_PAYOUT_DAY,
                is_default: true,
                updated_at: None,
            },
        }
    }
}

/// Body of `PUT /studio/config`. Omitted fields fall back to the defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PutStudioConfig {
    pub default_artist_share_percent: Option<f64>,
    pub studio_covers_materials: Option<bool>,
    pub payout_day: Option<i16>,
}

impl PutStudioConfig {
    pub fn share_percent(&self) -> f64 {
        self.default_artist_share_percent
            .unwrap_or(DEFAULT_ARTIST_SHARE_PERCENT)
    }

    pub fn covers_materials(&self) -> bool {
        self.studio_covers_materials.unwrap_or(false)
    }

    pub fn payout_day(&self) -> i16 {
        self.payout_day.unwrap_or(DEFAULT_PAYOUT_DAY)
    }
}
