//! Heuristic price suggestion.
//!
//! Averages the prices of past sessions that match the same filters. The
//! tenant's own completed sessions are preferred; seed training data tops
//! the sample up when the tenant has too little history.

use serde::Serialize;

use crate::types::Cents;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum rows taken from each source.
pub const MAX_SAMPLES_PER_SOURCE: i64 = 50;

/// Below this many own samples, seed training data is mixed in.
pub const MIN_OWN_SAMPLES: usize = 3;

/// Sample count at or above which confidence is "High".
pub const HIGH_CONFIDENCE_SAMPLES: usize = 10;
/// Sample count at or above which confidence is "Medium" (below High).
pub const MEDIUM_CONFIDENCE_SAMPLES: usize = 3;

// ---------------------------------------------------------------------------
// Size buckets
// ---------------------------------------------------------------------------

/// Coarse size class used to compare pieces of different exact sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBucket {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SizeBucket {
    /// Classify a size in centimetres.
    pub fn from_cm(size_cm: f64) -> Self {
        if size_cm < 10.0 {
            Self::Small
        } else if size_cm < 20.0 {
            Self::Medium
        } else if size_cm < 35.0 {
            Self::Large
        } else {
            Self::ExtraLarge
        }
    }

    /// Half-open `[min, max)` range in centimetres; `max` is `None` for the
    /// open-ended top bucket. Used to push the filter into SQL.
    pub fn bounds_cm(self) -> (f64, Option<f64>) {
        match self {
            Self::Small => (0.0, Some(10.0)),
            Self::Medium => (10.0, Some(20.0)),
            Self::Large => (20.0, Some(35.0)),
            Self::ExtraLarge => (35.0, None),
        }
    }
}

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Confidence level for a suggestion, derived from the number of samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionConfidence {
    High,
    Medium,
    Low,
    None,
}

impl SuggestionConfidence {
    pub fn from_sample_count(count: usize) -> Self {
        if count >= HIGH_CONFIDENCE_SAMPLES {
            Self::High
        } else if count >= MEDIUM_CONFIDENCE_SAMPLES {
            Self::Medium
        } else if count > 0 {
            Self::Low
        } else {
            Self::None
        }
    }
}

/// Where the samples behind a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    Own,
    Seed,
    Mixed,
    None,
}

// ---------------------------------------------------------------------------
// Suggestion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSuggestion {
    pub sample_count: usize,
    pub own_samples: usize,
    pub seed_samples: usize,
    pub average_cents: Option<Cents>,
    pub min_cents: Option<Cents>,
    pub max_cents: Option<Cents>,
    pub source: SuggestionSource,
    pub confidence: SuggestionConfidence,
}

/// Whether seed data should be consulted given the own-sample count.
pub fn needs_seed_data(own_samples: usize) -> bool {
    own_samples < MIN_OWN_SAMPLES
}

/// Build a suggestion from already-filtered prices.
///
/// `seed` is ignored when `own` alone has enough samples.
pub fn suggest(own: &[Cents], seed: &[Cents]) -> PriceSuggestion {
    let seed: &[Cents] = if needs_seed_data(own.len()) { seed } else { &[] };
    let all: Vec<Cents> = own.iter().chain(seed.iter()).copied().collect();

    let source = match (own.is_empty(), seed.is_empty()) {
        (true, true) => SuggestionSource::None,
        (false, true) => SuggestionSource::Own,
        (true, false) => SuggestionSource::Seed,
        (false, false) => SuggestionSource::Mixed,
    };

    let average_cents = if all.is_empty() {
        None
    } else {
        let total: i64 = all.iter().sum();
        Some((total as f64 / all.len() as f64).round() as Cents)
    };

    PriceSuggestion {
        sample_count: all.len(),
        own_samples: own.len(),
        seed_samples: seed.len(),
        average_cents,
        min_cents: all.iter().min().copied(),
        max_cents: all.iter().max().copied(),
        source,
        confidence: SuggestionConfidence::from_sample_count(all.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_buckets_have_half_open_boundaries() {
        assert_eq!(SizeBucket::from_cm(9.99), SizeBucket::Small);
        assert_eq!(SizeBucket::from_cm(10.0), SizeBucket::Medium);
        assert_eq!(SizeBucket::from_cm(20.0), SizeBucket::Large);
        assert_eq!(SizeBucket::from_cm(35.0), SizeBucket::ExtraLarge);
        assert_eq!(SizeBucket::ExtraLarge.bounds_cm(), (35.0, None));
    }

    #[test]
    fn confidence_boundaries() {
        assert_eq!(SuggestionConfidence::from_sample_count(0), SuggestionConfidence::None);
        assert_eq!(SuggestionConfidence::from_sample_count(1), SuggestionConfidence::Low);
        assert_eq!(SuggestionConfidence::from_sample_count(3), SuggestionConfidence::Medium);
        assert_eq!(SuggestionConfidence::from_sample_count(9), SuggestionConfidence::Medium);
        assert_eq!(SuggestionConfidence::from_sample_count(10), SuggestionConfidence::High);
    }

    #[test]
    fn no_samples_gives_empty_suggestion() {
        let s = suggest(&[], &[]);
        assert_eq!(s.source, SuggestionSource::None);
        assert_eq!(s.average_cents, None);
        assert_eq!(s.min_cents, None);
        assert_eq!(s.confidence, SuggestionConfidence::None);
    }

    #[test]
    fn enough_own_samples_ignore_seed_data() {
        let s = suggest(&[10_000, 20_000, 30_000], &[1_000_000]);
        assert_eq!(s.source, SuggestionSource::Own);
        assert_eq!(s.seed_samples, 0);
        assert_eq!(s.average_cents, Some(20_000));
        assert_eq!(s.min_cents, Some(10_000));
        assert_eq!(s.max_cents, Some(30_000));
        assert_eq!(s.confidence, SuggestionConfidence::Medium);
    }

    #[test]
    fn sparse_history_is_mixed_with_seed_data() {
        let s = suggest(&[40_000], &[20_000, 30_001]);
        assert_eq!(s.source, SuggestionSource::Mixed);
        assert_eq!(s.sample_count, 3);
        assert_eq!(s.own_samples, 1);
        assert_eq!(s.seed_samples, 2);
        assert_eq!(s.average_cents, Some(30_000));
        assert_eq!(s.min_cents, Some(20_000));
    }

    #[test]
    fn seed_only_when_tenant_has_no_history() {
        let s = suggest(&[], &[50_000]);
        assert_eq!(s.source, SuggestionSource::Seed);
        assert_eq!(s.confidence, SuggestionConfidence::Low);
    }
}
