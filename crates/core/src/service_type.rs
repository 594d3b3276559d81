//! Service catalogue categories.

use crate::error::CoreError;
use crate::validation::{validate_non_negative_cents, validate_one_of, validate_range};

pub const CATEGORY_TATTOO: &str = "tattoo";
pub const CATEGORY_PIERCING: &str = "piercing";
pub const CATEGORY_LASER: &str = "laser";
pub const CATEGORY_OTHER: &str = "other";

pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_TATTOO,
    CATEGORY_PIERCING,
    CATEGORY_LASER,
    CATEGORY_OTHER,
];

/// Validate the optional fields of a service type payload.
pub fn validate_service_type(
    category: Option<&str>,
    default_duration_minutes: Option<i32>,
    base_price_cents: Option<i64>,
) -> Result<(), CoreError> {
    if let Some(category) = category {
        validate_one_of(category, VALID_CATEGORIES, "category")?;
    }
    if let Some(minutes) = default_duration_minutes {
        validate_range(minutes, 1, 24 * 60, "default_duration_minutes")?;
    }
    if let Some(price) = base_price_cents {
        validate_non_negative_cents(price, "base_price_cents")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_categories() {
        for category in VALID_CATEGORIES {
            assert!(validate_service_type(Some(category), None, None).is_ok());
        }
    }

    #[test]
    fn rejects_unknown_category_and_bad_numbers() {
        assert!(validate_service_type(Some("henna"), None, None).is_err());
        assert!(validate_service_type(None, Some(0), None).is_err());
        assert!(validate_service_type(None, None, Some(-5)).is_err());
    }
}
