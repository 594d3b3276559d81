//! Shared range and membership checks used by several domain modules.
//!
//! Every helper returns `CoreError::Validation` naming the offending field.

use std::fmt::Display;

use crate::error::CoreError;

/// Validate that `value` lies within `[min, max]`.
pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> Result<(), CoreError>
where
    T: PartialOrd + Display + Copy,
{
    if value < min || value > max {
        return Err(CoreError::Validation(format!(
            "{name} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

/// Validate a percentage that must stay strictly below 100.
pub fn validate_deduction_percent(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || !(0.0..100.0).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be at least 0 and below 100, got {value}"
        )));
    }
    Ok(())
}

/// Validate a monetary amount that may be zero but never negative.
pub fn validate_non_negative_cents(value: i64, name: &str) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(())
}

/// Validate a monetary amount that must be strictly positive.
pub fn validate_positive_cents(value: i64, name: &str) -> Result<(), CoreError> {
    if value <= 0 {
        return Err(CoreError::Validation(format!(
            "{name} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}

/// Validate that `value` is one of `allowed`.
pub fn validate_one_of(value: &str, allowed: &[&str], name: &str) -> Result<(), CoreError> {
    if !allowed.contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be one of [{}], got '{value}'",
            allowed.join(", ")
        )));
    }
    Ok(())
}

/// Validate that an optional date range is ordered.
pub fn validate_date_range<T: PartialOrd + Display>(
    from: Option<&T>,
    to: Option<&T>,
) -> Result<(), CoreError> {
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(CoreError::Validation(format!(
                "from ({from}) must not be after to ({to})"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn range_accepts_boundaries() {
        assert!(validate_range(1, 1, 5, "complexity").is_ok());
        assert!(validate_range(5, 1, 5, "complexity").is_ok());
    }

    #[test]
    fn range_rejects_outside_values() {
        let err = validate_range(6, 1, 5, "complexity").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("complexity"));
        assert!(validate_range(0.0, 0.5, 1.0, "x").is_err());
    }

    #[test]
    fn deduction_percent_must_stay_below_hundred() {
        assert!(validate_deduction_percent(0.0, "tax").is_ok());
        assert!(validate_deduction_percent(99.9, "tax").is_ok());
        assert!(validate_deduction_percent(100.0, "tax").is_err());
        assert!(validate_deduction_percent(-1.0, "tax").is_err());
        assert!(validate_deduction_percent(f64::NAN, "tax").is_err());
    }

    #[test]
    fn cents_checks() {
        assert!(validate_non_negative_cents(0, "price").is_ok());
        assert!(validate_non_negative_cents(-1, "price").is_err());
        assert!(validate_positive_cents(0, "amount").is_err());
        assert!(validate_positive_cents(1, "amount").is_ok());
    }

    #[test]
    fn one_of_lists_allowed_values() {
        let err = validate_one_of("crypto", &["cash", "card"], "payment_method").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("cash, card"));
    }

    #[test]
    fn date_range_rejects_reversed_bounds() {
        assert!(validate_date_range(Some(&3), Some(&1)).is_err());
        assert!(validate_date_range(Some(&1), Some(&1)).is_ok());
        assert!(validate_date_range::<i32>(None, Some(&1)).is_ok());
    }
}
