//! Revenue split between a studio and its artists.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::{Cents, DbId};
use crate::validation::validate_range;

pub const DEFAULT_ARTIST_SHARE_PERCENT: f64 = 50.0;
pub const DEFAULT_PAYOUT_DAY: i16 = 5;

/// Validate a share percentage.
pub fn validate_share(percent: f64, name: &str) -> Result<(), CoreError> {
    if !percent.is_finite() {
        return Err(CoreError::Validation(format!("{name} must be a number")));
    }
    validate_range(percent, 0.0, 100.0, name)
}

/// Validate the day of the month payouts happen on.
pub fn validate_payout_day(day: i16) -> Result<(), CoreError> {
    validate_range(day, 1, 28, "payout_day")
}

/// Completed-session totals for one artist over a period.
#[derive(Debug, Clone)]
pub struct ArtistSales {
    pub artist_id: DbId,
    pub artist_name: String,
    pub session_count: i64,
    pub gross_cents: Cents,
}

/// How the studio splits revenue.
#[derive(Debug, Clone, Copy)]
pub struct SplitPolicy {
    pub default_share_percent: f64,
    /// When set, this amount per session is deducted from the gross before
    /// splitting (the studio paid for the materials).
    pub materials_per_session_cents: Option<Cents>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistPayout {
    pub artist_id: DbId,
    pub artist_name: String,
    pub session_count: i64,
    pub gross_cents: Cents,
    pub materials_cents: Cents,
    pub share_percent: f64,
    pub artist_payout_cents: Cents,
    pub studio_share_cents: Cents,
}

/// Split one artist's sales. `override_percent` comes from an active
/// benefit and wins over the policy default.
pub fn split(sales: &ArtistSales, policy: &SplitPolicy, override_percent: Option<f64>) -> ArtistPayout {
    let share_percent = override_percent.unwrap_or(policy.default_share_percent);
    let materials_cents = policy
        .materials_per_session_cents
        .map(|per_session| (per_session * sales.session_count).min(sales.gross_cents))
        .unwrap_or(0);
    let splittable = sales.gross_cents - materials_cents;
    let artist_payout_cents = (splittable as f64 * share_percent / 100.0).round() as Cents;

    ArtistPayout {
        artist_id: sales.artist_id,
        artist_name: sales.artist_name.clone(),
        session_count: sales.session_count,
        gross_cents: sales.gross_cents,
        materials_cents,
        share_percent,
        artist_payout_cents,
        studio_share_cents: sales.gross_cents - artist_payout_cents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales(gross: Cents, sessions: i64) -> ArtistSales {
        ArtistSales {
            artist_id: 7,
            artist_name: "Rita".into(),
            session_count: sessions,
            gross_cents: gross,
        }
    }

    #[test]
    fn default_share_splits_gross() {
        let policy = SplitPolicy {
            default_share_percent: 50.0,
            materials_per_session_cents: None,
        };
        let payout = split(&sales(100_001, 3), &policy, None);
        assert_eq!(payout.artist_payout_cents, 50_001);
        assert_eq!(payout.studio_share_cents, 50_000);
        assert_eq!(payout.materials_cents, 0);
    }

    #[test]
    fn benefit_override_wins() {
        let policy = SplitPolicy {
            default_share_percent: 50.0,
            materials_per_session_cents: None,
        };
        let payout = split(&sales(200_000, 2), &policy, Some(70.0));
        assert_eq!(payout.share_percent, 70.0);
        assert_eq!(payout.artist_payout_cents, 140_000);
        assert_eq!(payout.studio_share_cents, 60_000);
    }

    #[test]
    fn studio_paid_materials_come_off_the_top() {
        let policy = SplitPolicy {
            default_share_percent: 60.0,
            materials_per_session_cents: Some(5_000),
        };
        let payout = split(&sales(100_000, 4), &policy, None);
        assert_eq!(payout.materials_cents, 20_000);
        assert_eq!(payout.artist_payout_cents, 48_000);
        assert_eq!(payout.studio_share_cents, 52_000);
    }

    #[test]
    fn materials_never_exceed_gross() {
        let policy = SplitPolicy {
            default_share_percent: 50.0,
            materials_per_session_cents: Some(50_000),
        };
        let payout = split(&sales(10_000, 1), &policy, None);
        assert_eq!(payout.materials_cents, 10_000);
        assert_eq!(payout.artist_payout_cents, 0);
    }

    #[test]
    fn share_and_payout_day_ranges() {
        assert!(validate_share(0.0, "share").is_ok());
        assert!(validate_share(100.0, "share").is_ok());
        assert!(validate_share(100.5, "share").is_err());
        assert!(validate_payout_day(28).is_ok());
        assert!(validate_payout_day(29).is_err());
    }
}
