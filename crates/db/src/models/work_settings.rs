//! Per-tenant work settings feeding the pricing calculator.

use inkstudio_core::pricing::WorkParameters;
use inkstudio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `work_settings` table.
#[derive(Debug, Clone, FromRow)]
pub struct WorkSettings {
    pub id: DbId,
    pub tenant_id: DbId,
    pub working_days_per_month: i16,
    pub hours_per_day: f64,
    pub profit_margin_percent: f64,
    pub tax_percent: f64,
    pub card_fee_percent: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&WorkSettings> for WorkParameters {
    fn from(row: &WorkSettings) -> Self {
        Self {
            working_days_per_month: row.working_days_per_month,
            hours_per_day: row.hours_per_day,
            profit_margin_percent: row.profit_margin_percent,
            tax_percent: row.tax_percent,
            card_fee_percent: row.card_fee_percent,
        }
    }
}

/// API view of the settings; `is_default` is true when nothing is stored.
#[derive(Debug, Clone, Serialize)]
pub struct WorkSettingsResponse {
    #[serde(flatten)]
    pub parameters: WorkParameters,
    pub productive_hours_per_month: f64,
    pub is_default: bool,
    pub updated_at: Option<Timestamp>,
}

impl WorkSettingsResponse {
    pub fn from_row(row: Option<&WorkSettings>) -> Self {
        let parameters = row.map(WorkParameters::from).unwrap_or_default();
        Self {
            productive_hours_per_month: parameters.productive_hours(),
            parameters,
            is_default: row.is_none(),
            updated_at: row.map(|r| r.updated_at),
        }
    }
}

/// Body of `PUT /settings/work`. Omitted fields fall back to the defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PutWorkSettings {
    pub working_days_per_month: Option<i16>,
    pub hours_per_day: Option<f64>,
    pub profit_margin_percent: Option<f64>,
    pub tax_percent: Option<f64>,
    pub card_fee_percent: Option<f64>,
}

impl PutWorkSettings {
    pub fn into_parameters(self) -> WorkParameters {
        let d = WorkParameters::default();
        WorkParameters {
            working_days_per_month: self.working_days_per_month.unwrap_or(d.working_days_per_month),
            hours_per_day: self.hours_per_day.unwrap_or(d.hours_per_day),
            profit_margin_percent: self.profit_margin_percent.unwrap_or(d.profit_margin_percent),
            tax_percent: self.tax_percent.unwrap_or(d.tax_percent),
            card_fee_percent: self.card_fee_percent.unwrap_or(d.card_fee_percent),
        }
    }
}
