//! ANTIOXIDANT SCORE
//!
//! Weighted sum over the full species table. Each species' influence is its
//! abundance capped at 10% and divided by 10, so one dominant species cannot
//! swamp the score. Missing species count as 0%.

use crate::species::{BacterialProfile, Species};
use crate::tables::{antioxidant_weight, antioxidant_weight_magnitude};
use crate::utils::{clamp_or, round_to, signed_sum_to_percent};

/// Abundance (percent) at which a species' antioxidant influence saturates
pub const INFLUENCE_CAP: f64 = 10.0;

/// Result of the antioxidant calculation
#[derive(Debug, Clone, PartialEq)]
pub struct AntioxidantResult {
    pub raw: f64,
    pub max_score: f64,
    /// Final score (0-100, 2 decimals)
    pub score: f64,
}

/// Capped influence of one abundance value (at most 1).
///
/// Only the upper end is capped; a negative reading inverts the species'
/// weight and the final clamp keeps the score in range.
pub fn influence(percentage: f64) -> f64 {
    percentage.min(INFLUENCE_CAP) / INFLUENCE_CAP
}

pub fn calculate_antioxidant(profile: &BacterialProfile) -> AntioxidantResult {
    let raw: f64 = Species::ALL
        .iter()
        .map(|&s| influence(profile.percentage(s)) * antioxidant_weight(s))
        .sum();
    let max_score = antioxidant_weight_magnitude();

    // max_score is a non-zero table constant
    let score = signed_sum_to_percent(raw, max_score)
        .map(|pct| round_to(clamp_or(pct, 0.0, 100.0, 50.0), 2))
        .unwrap_or(50.0);

    AntioxidantResult { raw, max_score, score }
}

/// Antioxidant score in [0, 100]
pub fn compute_antioxidant_score(profile: &BacterialProfile) -> f64 {
    calculate_antioxidant(profile).score
}
