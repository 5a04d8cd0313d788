//! BIOLOGICAL AGE ESTIMATE
//!
//! Each anchored species is placed on its young-to-old calibration span,
//! clamped to [-1, 1], and pulled in the direction of its age weight. The
//! weighted mean shift moves the estimate away from a baseline of 40 by up
//! to 25 years.

use crate::species::{BacterialProfile, Species};
use crate::tables::age_anchor;
use crate::utils::round_to;

/// Estimate when every anchored species sits at its young anchor
pub const BASELINE_AGE: f64 = 40.0;
/// Years of shift at full deviation
pub const AGE_SWING: f64 = 25.0;
pub const MIN_AGE: f64 = 10.0;
pub const MAX_AGE: f64 = 85.0;

/// Result of the biological age estimate
#[derive(Debug, Clone, PartialEq)]
pub struct BiologicalAgeResult {
    pub total_shift: f64,
    pub total_weight: f64,
    /// Anchored species that took part
    pub n_species: usize,
    /// Final estimate in years (1 decimal, 10-85)
    pub estimate: f64,
}

/// Normalized deviation of an observation along the young-to-old span.
///
/// Returns None when the anchors coincide.
pub fn anchor_deviation(young: f64, old: f64, observed: f64) -> Option<f64> {
    let expected_range = (old - young).abs();
    if expected_range == 0.0 {
        return None;
    }
    Some(((observed - young) / expected_range).clamp(-1.0, 1.0))
}

pub fn calculate_biological_age(profile: &BacterialProfile) -> BiologicalAgeResult {
    let mut total_shift = 0.0;
    let mut total_weight = 0.0;
    let mut n_species = 0;

    for species in Species::ALL {
        let Some(anchor) = age_anchor(species) else {
            continue;
        };
        let Some(deviation) = anchor_deviation(anchor.young, anchor.old, profile.percentage(species)) else {
            continue;
        };

        total_shift += deviation * anchor.weight;
        total_weight += anchor.weight.abs();
        n_species += 1;
    }

    let estimate = if total_weight > 0.0 {
        round_to(BASELINE_AGE + (total_shift / total_weight) * AGE_SWING, 1).clamp(MIN_AGE, MAX_AGE)
    } else {
        BASELINE_AGE
    };

    BiologicalAgeResult {
        total_shift,
        total_weight,
        n_species,
        estimate,
    }
}

/// Biological age estimate in years, within [10, 85]
pub fn estimate_biological_age(profile: &BacterialProfile) -> f64 {
    calculate_biological_age(profile).estimate
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn young_profile() -> BacterialProfile {
        BacterialProfile::new()
            .with("C.Acne", 75.0)
            .with("S.Epi", 6.0)
            .with("C.Krop", 2.0)
            .with("S.Aureus", 0.3)
            .with("C.Tuber", 1.0)
    }

    #[test]
    fn test_young_anchors_give_baseline() {
        assert_relative_eq!(estimate_biological_age(&young_profile()), 40.0);
    }

    #[test]
    fn test_old_anchors_give_full_swing() {
        let profile = BacterialProfile::new()
            .with("C.Acne", 55.0)
            .with("S.Epi", 10.0)
            .with("C.Krop", 5.0)
            .with("S.Aureus", 1.2)
            .with("C.Tuber", 4.0);
        // Every species contributes +|weight| -> shift ratio 1.0
        assert_relative_eq!(estimate_biological_age(&profile), 65.0);
    }

    #[test]
    fn test_deviation_is_clamped() {
        assert_eq!(anchor_deviation(6.0, 10.0, 100.0), Some(1.0));
        assert_eq!(anchor_deviation(6.0, 10.0, -50.0), Some(-1.0));
        assert_eq!(anchor_deviation(3.0, 3.0, 4.0), None);
    }

    #[test]
    fn test_youngest_possible_profile() {
        // C.Acne above its young anchor and the rest at zero pull the estimate down
        let profile = BacterialProfile::new().with("C.Acne", 95.0);
        let result = calculate_biological_age(&profile);
        assert_eq!(result.n_species, 5);
        assert_relative_eq!(result.total_weight, 1.0, epsilon = 1e-12);
        assert!(result.estimate < BASELINE_AGE);
        assert!(result.estimate >= MIN_AGE);
    }
}
