//! Session price calculator.
//!
//! Spreads the studio's monthly fixed costs over its productive hours, adds
//! per-session variable costs, applies the profit margin and grosses the
//! result up so that taxes and card fees are covered by the final price.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::Cents;
use crate::validation::{validate_deduction_percent, validate_range};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_WORKING_DAYS_PER_MONTH: i16 = 22;
pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;
pub const DEFAULT_PROFIT_MARGIN_PERCENT: f64 = 30.0;
pub const DEFAULT_TAX_PERCENT: f64 = 6.0;
pub const DEFAULT_CARD_FEE_PERCENT: f64 = 3.0;

/// Upper bound for the profit margin.
pub const MAX_PROFIT_MARGIN_PERCENT: f64 = 500.0;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Working-time and percentage settings a price is computed under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkParameters {
    pub working_days_per_month: i16,
    pub hours_per_day: f64,
    pub profit_margin_percent: f64,
    pub tax_percent: f64,
    pub card_fee_percent: f64,
}

impl Default for WorkParameters {
    fn default() -> Self {
        Self {
            working_days_per_month: DEFAULT_WORKING_DAYS_PER_MONTH,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            profit_margin_percent: DEFAULT_PROFIT_MARGIN_PERCENT,
            tax_percent: DEFAULT_TAX_PERCENT,
            card_fee_percent: DEFAULT_CARD_FEE_PERCENT,
        }
    }
}

impl WorkParameters {
    /// Productive hours available in a month.
    pub fn productive_hours(&self) -> f64 {
        f64::from(self.working_days_per_month) * self.hours_per_day
    }

    /// Combined percentage withheld from every sale.
    pub fn deductions_percent(&self) -> f64 {
        self.tax_percent + self.card_fee_percent
    }

    /// Validate every setting and their combination.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_range(self.working_days_per_month, 1, 31, "working_days_per_month")?;
        if !self.hours_per_day.is_finite() {
            return Err(CoreError::Validation("hours_per_day must be a number".into()));
        }
        validate_range(self.hours_per_day, 1.0, 24.0, "hours_per_day")?;
        validate_margin(self.profit_margin_percent)?;
        validate_deduction_percent(self.tax_percent, "tax_percent")?;
        validate_deduction_percent(self.card_fee_percent, "card_fee_percent")?;
        validate_deduction_percent(self.deductions_percent(), "tax_percent + card_fee_percent")?;
        Ok(())
    }
}

/// Validate a profit margin percentage.
pub fn validate_margin(margin: f64) -> Result<(), CoreError> {
    if !margin.is_finite() {
        return Err(CoreError::Validation(
            "profit_margin_percent must be a number".into(),
        ));
    }
    validate_range(margin, 0.0, MAX_PROFIT_MARGIN_PERCENT, "profit_margin_percent")
}

/// Cost inputs for a single quote.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostInputs {
    pub duration_minutes: i32,
    /// Sum of the active monthly fixed costs.
    pub monthly_fixed_cents: Cents,
    /// Sum of the active per-session variable costs (already filtered by the
    /// caller's `include_variable_costs` choice).
    pub variable_cents: Cents,
    pub extra_material_cents: Cents,
}

/// Full price breakdown returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub duration_minutes: i32,
    pub productive_hours_per_month: f64,
    pub fixed_cost_per_hour_cents: Cents,
    pub fixed_share_cents: Cents,
    pub variable_cost_cents: Cents,
    pub base_cost_cents: Cents,
    pub profit_margin_percent: f64,
    pub price_before_deductions_cents: Cents,
    pub deductions_percent: f64,
    pub deductions_cents: Cents,
    pub final_price_cents: Cents,
    pub hourly_rate_cents: Cents,
}

/// Compute the price of a session.
pub fn calculate(params: &WorkParameters, inputs: &CostInputs) -> Result<PriceBreakdown, CoreError> {
    params.validate()?;
    validate_range(inputs.duration_minutes, 1, 24 * 60, "duration_minutes")?;
    if inputs.monthly_fixed_cents < 0 || inputs.variable_cents < 0 || inputs.extra_material_cents < 0 {
        return Err(CoreError::Validation("cost amounts must not be negative".into()));
    }

    let hours = f64::from(inputs.duration_minutes) / MINUTES_PER_HOUR;
    let productive_hours = params.productive_hours();
    let fixed_per_hour = inputs.monthly_fixed_cents as f64 / productive_hours;
    let fixed_share = fixed_per_hour * hours;
    let variable = (inputs.variable_cents + inputs.extra_material_cents) as f64;

    let final_price = gross_up(fixed_share + variable, params);
    let margin_factor = 1.0 + params.profit_margin_percent / 100.0;
    let before_deductions = (fixed_share + variable) * margin_factor;

    let hourly_rate = gross_up(fixed_per_hour + inputs.variable_cents as f64, params);

    let final_price_cents = to_cents(final_price);
    let before_deductions_cents = to_cents(before_deductions);

    Ok(PriceBreakdown {
        duration_minutes: inputs.duration_minutes,
        productive_hours_per_month: productive_hours,
        fixed_cost_per_hour_cents: to_cents(fixed_per_hour),
        fixed_share_cents: to_cents(fixed_share),
        variable_cost_cents: to_cents(variable),
        base_cost_cents: to_cents(fixed_share + variable),
        profit_margin_percent: params.profit_margin_percent,
        price_before_deductions_cents: before_deductions_cents,
        deductions_percent: params.deductions_percent(),
        deductions_cents: final_price_cents - before_deductions_cents,
        final_price_cents,
        hourly_rate_cents: to_cents(hourly_rate),
    })
}

/// Fixed cost per productive hour and the minimum hourly rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRate {
    pub productive_hours_per_month: f64,
    pub fixed_cost_per_hour_cents: Cents,
    /// Hourly price that covers fixed costs, margin, tax and fees.
    pub minimum_hourly_rate_cents: Cents,
}

/// Compute the hourly rate implied by the fixed costs alone.
pub fn hourly_rate(params: &WorkParameters, monthly_fixed_cents: Cents) -> Result<HourlyRate, CoreError> {
    params.validate()?;
    let productive_hours = params.productive_hours();
    let fixed_per_hour = monthly_fixed_cents.max(0) as f64 / productive_hours;
    Ok(HourlyRate {
        productive_hours_per_month: productive_hours,
        fixed_cost_per_hour_cents: to_cents(fixed_per_hour),
        minimum_hourly_rate_cents: to_cents(gross_up(fixed_per_hour, params)),
    })
}

/// Apply the margin, then divide out the deductions.
fn gross_up(cost: f64, params: &WorkParameters) -> f64 {
    let with_margin = cost * (1.0 + params.profit_margin_percent / 100.0);
    with_margin / (1.0 - params.deductions_percent() / 100.0)
}

/// Round a fractional cent amount up to whole cents.
///
/// A tiny epsilon absorbs float noise so that e.g. `100.00000000001`
/// does not become 101.
fn to_cents(value: f64) -> Cents {
    (value - 1e-6).ceil().max(0.0) as Cents
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn flat_params() -> WorkParameters {
        WorkParameters {
            working_days_per_month: 20,
            hours_per_day: 8.0,
            profit_margin_percent: 0.0,
            tax_percent: 0.0,
            card_fee_percent: 0.0,
        }
    }

    #[test]
    fn fixed_costs_are_spread_over_productive_hours() {
        // 160 productive hours, 320.00 fixed -> 2.00 per hour.
        let inputs = CostInputs {
            duration_minutes: 90,
            monthly_fixed_cents: 32_000,
            ..Default::default()
        };
        let breakdown = calculate(&flat_params(), &inputs).unwrap();
        assert_eq!(breakdown.productive_hours_per_month, 160.0);
        assert_eq!(breakdown.fixed_cost_per_hour_cents, 200);
        assert_eq!(breakdown.fixed_share_cents, 300);
        assert_eq!(breakdown.final_price_cents, 300);
    }

    #[test]
    fn margin_and_deductions_are_applied_in_order() {
        let params = WorkParameters {
            profit_margin_percent: 50.0,
            tax_percent: 15.0,
            card_fee_percent: 5.0,
            ..flat_params()
        };
        let inputs = CostInputs {
            duration_minutes: 60,
            monthly_fixed_cents: 160_000, // 10.00 per hour
            variable_cents: 2_000,
            extra_material_cents: 0,
        };
        let b = calculate(&params, &inputs).unwrap();
        // base 30.00, +50% = 45.00, / 0.8 = 56.25
        assert_eq!(b.base_cost_cents, 3_000);
        assert_eq!(b.price_before_deductions_cents, 4_500);
        assert_eq!(b.final_price_cents, 5_625);
        assert_eq!(b.deductions_cents, 1_125);
        assert_eq!(b.deductions_percent, 20.0);
        assert_eq!(b.hourly_rate_cents, 5_625);
    }

    #[test]
    fn extra_material_adds_to_variable_cost() {
        let inputs = CostInputs {
            duration_minutes: 60,
            monthly_fixed_cents: 0,
            variable_cents: 1_000,
            extra_material_cents: 250,
        };
        let b = calculate(&flat_params(), &inputs).unwrap();
        assert_eq!(b.variable_cost_cents, 1_250);
        assert_eq!(b.final_price_cents, 1_250);
        // The hourly rate ignores one-off material.
        assert_eq!(b.hourly_rate_cents, 1_000);
    }

    #[test]
    fn fractional_cents_round_up() {
        // 100.00 over 3 hours/month of work -> 33.333... per hour.
        let params = WorkParameters {
            working_days_per_month: 1,
            hours_per_day: 3.0,
            ..flat_params()
        };
        let inputs = CostInputs {
            duration_minutes: 60,
            monthly_fixed_cents: 10_000,
            ..Default::default()
        };
        let b = calculate(&params, &inputs).unwrap();
        assert_eq!(b.final_price_cents, 3_334);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let params = WorkParameters {
            tax_percent: 60.0,
            card_fee_percent: 40.0,
            ..flat_params()
        };
        let inputs = CostInputs {
            duration_minutes: 60,
            ..Default::default()
        };
        assert_matches!(calculate(&params, &inputs), Err(CoreError::Validation(_)));

        let zero_days = WorkParameters {
            working_days_per_month: 0,
            ..flat_params()
        };
        assert!(zero_days.validate().is_err());
    }

    #[test]
    fn duration_must_be_positive() {
        let inputs = CostInputs::default();
        assert_matches!(calculate(&flat_params(), &inputs), Err(CoreError::Validation(_)));
    }

    #[test]
    fn hourly_rate_matches_calculator_for_one_hour() {
        let params = WorkParameters::default();
        let rate = hourly_rate(&params, 250_000).unwrap();
        let inputs = CostInputs {
            duration_minutes: 60,
            monthly_fixed_cents: 250_000,
            ..Default::default()
        };
        let b = calculate(&params, &inputs).unwrap();
        assert_eq!(rate.minimum_hourly_rate_cents, b.final_price_cents);
        assert_eq!(rate.productive_hours_per_month, 176.0);
    }
}
