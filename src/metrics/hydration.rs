//! HYDRATION SCORE
//!
//! Weighted agreement between each reported species and its age-adjusted
//! optimal range. Species inside their range contribute their full hydration
//! weight; species outside contribute the weight scaled down by how far they
//! overshoot, which turns negative once the overshoot exceeds the bound itself.
//!
//! Only species present in the profile take part, so the normalizer
//! (`max_score`) depends on which keys the lab reported.

use crate::species::{BacterialProfile, Species};
use crate::tables::{hydration_weight, resolve_range, OptimalRange};
use crate::utils::{clamp_or, round_to, signed_sum_to_percent};

/// Score returned when no reported species carries hydration weight
pub const HYDRATION_MIDPOINT: f64 = 50.0;

/// Result of the hydration calculation
#[derive(Debug, Clone, PartialEq)]
pub struct HydrationResult {
    /// Signed weighted sum of contributions
    pub raw: f64,
    /// Sum of |weight| over the species that contributed
    pub max_score: f64,
    /// Final score (0-100, 2 decimals)
    pub score: f64,
}

/// Fraction of the nearest bound by which `value` lies outside `range`.
///
/// A zero bound has no meaningful relative scale, so the absolute distance
/// is used instead.
fn relative_deviation(range: &OptimalRange, value: f64) -> f64 {
    let (bound, distance) = if value < range.min {
        (range.min, range.min - value)
    } else {
        (range.max, value - range.max)
    };
    if bound.abs() > 0.0 {
        distance / bound.abs()
    } else {
        distance
    }
}

/// Contribution of one species to the hydration sum
pub fn species_contribution(species: Species, age: u32, percentage: f64) -> f64 {
    let weight = hydration_weight(species);
    let range = resolve_range(species, age);
    if range.contains(percentage) {
        weight
    } else {
        weight * (1.0 - relative_deviation(&range, percentage))
    }
}

/// Calculate the hydration score with intermediate sums
pub fn calculate_hydration(age: u32, profile: &BacterialProfile) -> HydrationResult {
    let mut raw = 0.0;
    let mut max_score = 0.0;

    for (species, percentage) in profile.recognized() {
        raw += species_contribution(species, age, percentage);
        max_score += hydration_weight(species).abs();
    }

    let score = match signed_sum_to_percent(raw, max_score) {
        Some(pct) => round_to(clamp_or(pct, 0.0, 100.0, HYDRATION_MIDPOINT), 2),
        None => HYDRATION_MIDPOINT,
    };

    HydrationResult { raw, max_score, score }
}

/// Hydration score in [0, 100]
pub fn compute_hydration_score(age: u32, profile: &BacterialProfile) -> f64 {
    calculate_hydration(age, profile).score
}
