//! MICROBIOME BALANCE SCORE
//!
//! Starts from 100 and subtracts:
//! - a range penalty of (distance outside the age-adjusted range) / 2.5 per species
//! - a dominance penalty of (percentage - 80) for any species above 80%
//!
//! The dominance penalty applies on top of the range penalty, so a near
//! monoculture is punished even when its own range would allow it.

use crate::species::BacterialProfile;
use crate::tables::resolve_range;
use crate::utils::{clamp_or, round_to};

/// Percentage points outside the range that cost one score point
pub const RANGE_PENALTY_DIVISOR: f64 = 2.5;

/// Abundance above which a single species counts as dominating the sample
pub const DOMINANCE_THRESHOLD: f64 = 80.0;

/// Result of the balance calculation
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceResult {
    pub range_penalty: f64,
    pub diversity_penalty: f64,
    /// Final score (0-100, 2 decimals)
    pub score: f64,
}

pub fn calculate_microbiome_balance(age: u32, profile: &BacterialProfile) -> BalanceResult {
    let mut range_penalty = 0.0;
    let mut diversity_penalty = 0.0;

    for (species, percentage) in profile.recognized() {
        let range = resolve_range(species, age);
        range_penalty += range.distance_outside(percentage) / RANGE_PENALTY_DIVISOR;

        if percentage > DOMINANCE_THRESHOLD {
            diversity_penalty += percentage - DOMINANCE_THRESHOLD;
        }
    }

    let unclamped = 100.0 - range_penalty - diversity_penalty;
    let score = round_to(clamp_or(unclamped, 0.0, 100.0, 0.0), 2);
    debug_assert!((0.0..=100.0).contains(&score));

    BalanceResult {
        range_penalty,
        diversity_penalty,
        score,
    }
}

/// Microbiome balance score in [0, 100]
pub fn compute_microbiome_balance_score(age: u32, profile: &BacterialProfile) -> f64 {
    calculate_microbiome_balance(age, profile).score
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_young_reference_profile_scores_full() {
        let profile = BacterialProfile::new()
            .with("C.Acne", 75.0)
            .with("S.Epi", 6.0)
            .with("C.Krop", 2.0);
        assert_relative_eq!(compute_microbiome_balance_score(25, &profile), 100.0);
    }

    #[test]
    fn test_range_penalty() {
        // S.Epi 12 vs younger max 7 -> 5 / 2.5 = 2 points
        let profile = BacterialProfile::new().with("S.Epi", 12.0);
        let result = calculate_microbiome_balance(25, &profile);
        assert_relative_eq!(result.range_penalty, 2.0);
        assert_relative_eq!(result.score, 98.0);
    }

    #[test]
    fn test_dominance_penalty_stacks_with_range_penalty() {
        // C.Acne 90: 5 above max 85 (2 points) plus 10 dominance points
        let profile = BacterialProfile::new().with("C.Acne", 90.0);
        let result = calculate_microbiome_balance(25, &profile);
        assert_relative_eq!(result.range_penalty, 2.0);
        assert_relative_eq!(result.diversity_penalty, 10.0);
        assert_relative_eq!(result.score, 88.0);
    }

    #[test]
    fn test_floor_at_zero() {
        let profile = BacterialProfile::new().with("S.Aureus", 400.0);
        assert_eq!(compute_microbiome_balance_score(25, &profile), 0.0);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let profile = BacterialProfile::new().with("Other", 95.0);
        assert_eq!(compute_microbiome_balance_score(25, &profile), 100.0);
    }
}
