//! Compiled-in Scoring Tables
//!
//! Optimal abundance ranges, score weights and age calibration anchors for
//! every scored species. All tables are immutable statics; nothing mutates
//! them at runtime, so scoring needs no synchronization.
//!
//! Ranges and anchors are abundance percentages. Weights are signed: a
//! positive weight means higher abundance pushes the score up (or, for the
//! age estimate, towards "older").

use crate::species::Species;
use serde::{Deserialize, Serialize};

/// Age at which the older range table takes over (`age < 40` is younger)
pub const AGE_THRESHOLD: u32 = 40;

/// Healthy abundance interval for a species (percent, bounds inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
}

impl OptimalRange {
    /// Neutral range used when a species has no table entry
    pub const NEUTRAL: OptimalRange = OptimalRange { min: 0.0, max: 0.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Absolute distance outside the range (0 when inside)
    pub fn distance_outside(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }
}

/// Expected abundance at the young and old calibration extremes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeAnchor {
    pub young: f64,
    pub old: f64,
    /// Direction and strength of this species' pull on the age estimate
    pub weight: f64,
}

/// Per-species row of the scoring tables
#[derive(Debug, Clone)]
pub struct SpeciesTable {
    pub species: Species,
    pub younger_range: OptimalRange,
    /// Only set for the age-sensitive species
    pub older_range: Option<OptimalRange>,
    pub hydration_weight: f64,
    pub antioxidant_weight: f64,
    pub age_anchor: Option<AgeAnchor>,
}

// ============================================================================
// EMBEDDED TABLE DATA
// ============================================================================

static SPECIES_TABLES: &[SpeciesTable] = &[
    SpeciesTable {
        species: Species::CutibacteriumAcnes,
        younger_range: OptimalRange::new(65.0, 85.0),
        older_range: Some(OptimalRange::new(50.0, 70.0)),
        hydration_weight: 0.15,
        antioxidant_weight: 0.25,
        age_anchor: Some(AgeAnchor { young: 75.0, old: 55.0, weight: -0.35 }),
    },
    SpeciesTable {
        species: Species::StaphylococcusEpidermidis,
        younger_range: OptimalRange::new(5.0, 7.0),
        older_range: Some(OptimalRange::new(6.0, 10.0)),
        hydration_weight: 0.30,
        antioxidant_weight: 0.20,
        age_anchor: Some(AgeAnchor { young: 6.0, old: 10.0, weight: 0.25 }),
    },
    SpeciesTable {
        species: Species::CorynebacteriumKroppenstedtii,
        younger_range: OptimalRange::new(0.0, 4.0),
        older_range: Some(OptimalRange::new(1.0, 6.0)),
        hydration_weight: -0.10,
        antioxidant_weight: -0.10,
        age_anchor: Some(AgeAnchor { young: 2.0, old: 5.0, weight: 0.20 }),
    },
    SpeciesTable {
        species: Species::StaphylococcusAureus,
        younger_range: OptimalRange::new(0.0, 1.0),
        older_range: None,
        hydration_weight: -0.25,
        antioxidant_weight: -0.30,
        age_anchor: Some(AgeAnchor { young: 0.3, old: 1.2, weight: 0.10 }),
    },
    SpeciesTable {
        species: Species::StaphylococcusHominis,
        younger_range: OptimalRange::new(0.0, 3.0),
        older_range: None,
        hydration_weight: 0.15,
        antioxidant_weight: 0.10,
        age_anchor: None,
    },
    SpeciesTable {
        species: Species::StaphylococcusCapitis,
        younger_range: OptimalRange::new(0.0, 3.0),
        older_range: None,
        hydration_weight: 0.05,
        antioxidant_weight: 0.05,
        age_anchor: None,
    },
    SpeciesTable {
        species: Species::CorynebacteriumTuberculostearicum,
        younger_range: OptimalRange::new(0.0, 5.0),
        older_range: None,
        hydration_weight: -0.05,
        antioxidant_weight: -0.05,
        age_anchor: Some(AgeAnchor { young: 1.0, old: 4.0, weight: 0.10 }),
    },
    SpeciesTable {
        species: Species::CutibacteriumGranulosum,
        younger_range: OptimalRange::new(0.0, 2.0),
        older_range: None,
        hydration_weight: 0.0,
        antioxidant_weight: 0.05,
        age_anchor: None,
    },
    SpeciesTable {
        species: Species::MicrococcusLuteus,
        younger_range: OptimalRange::new(0.0, 2.0),
        older_range: None,
        hydration_weight: 0.10,
        antioxidant_weight: 0.15,
        age_anchor: None,
    },
    SpeciesTable {
        species: Species::StreptococcusMitis,
        younger_range: OptimalRange::new(0.0, 2.0),
        older_range: None,
        hydration_weight: -0.05,
        antioxidant_weight: -0.05,
        age_anchor: None,
    },
    SpeciesTable {
        species: Species::RothiaMucilaginosa,
        younger_range: OptimalRange::new(0.0, 1.0),
        older_range: None,
        hydration_weight: 0.05,
        antioxidant_weight: 0.05,
        age_anchor: None,
    },
];

// ============================================================================
// LOOKUPS
// ============================================================================

/// Table row for a species, if it has one
pub fn species_table(species: Species) -> Option<&'static SpeciesTable> {
    SPECIES_TABLES.iter().find(|t| t.species == species)
}

/// Age-adjusted optimal range.
///
/// Species without an older range use the same bounds at every age.
/// A species missing from the tables resolves to [`OptimalRange::NEUTRAL`].
pub fn resolve_range(species: Species, age: u32) -> OptimalRange {
    match species_table(species) {
        Some(table) if age >= AGE_THRESHOLD => table.older_range.unwrap_or(table.younger_range),
        Some(table) => table.younger_range,
        None => OptimalRange::NEUTRAL,
    }
}

/// Age-adjusted range for a report key; None for unrecognized keys
pub fn resolve_range_for_key(key: &str, age: u32) -> Option<OptimalRange> {
    Species::from_key(key).map(|s| resolve_range(s, age))
}

pub fn hydration_weight(species: Species) -> f64 {
    species_table(species).map_or(0.0, |t| t.hydration_weight)
}

pub fn antioxidant_weight(species: Species) -> f64 {
    species_table(species).map_or(0.0, |t| t.antioxidant_weight)
}

pub fn age_anchor(species: Species) -> Option<AgeAnchor> {
    species_table(species).and_then(|t| t.age_anchor)
}

/// Sum of |antioxidant weight| over the full table
pub fn antioxidant_weight_magnitude() -> f64 {
    SPECIES_TABLES.iter().map(|t| t.antioxidant_weight.abs()).sum()
}

/// Whether the species' range depends on age
pub fn is_age_sensitive(species: Species) -> bool {
    species_table(species).is_some_and(|t| t.older_range.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_every_species_has_a_table_row() {
        for s in Species::ALL {
            assert!(species_table(s).is_some(), "missing table row for {}", s);
        }
        assert_eq!(SPECIES_TABLES.len(), Species::ALL.len());
    }

    #[test]
    fn test_age_threshold_switches_ranges() {
        let acne = Species::CutibacteriumAcnes;
        assert_eq!(resolve_range(acne, 39), OptimalRange::new(65.0, 85.0));
        assert_eq!(resolve_range(acne, 40), OptimalRange::new(50.0, 70.0));

        // Age-independent species keep one range
        let aureus = Species::StaphylococcusAureus;
        assert_eq!(resolve_range(aureus, 20), resolve_range(aureus, 70));
    }

    #[test]
    fn test_age_sensitive_species() {
        let sensitive: Vec<Species> = Species::ALL
            .iter()
            .copied()
            .filter(|&s| is_age_sensitive(s))
            .collect();
        assert_eq!(
            sensitive,
            vec![
                Species::CutibacteriumAcnes,
                Species::StaphylococcusEpidermidis,
                Species::CorynebacteriumKroppenstedtii,
            ]
        );
    }

    #[test]
    fn test_unknown_key_has_no_range() {
        assert_eq!(resolve_range_for_key("Other", 30), None);
        assert_eq!(
            resolve_range_for_key("S.Epi", 30),
            Some(OptimalRange::new(5.0, 7.0))
        );
    }

    #[test]
    fn test_range_distance() {
        let r = OptimalRange::new(5.0, 7.0);
        assert_relative_eq!(r.distance_outside(4.0), 1.0);
        assert_relative_eq!(r.distance_outside(9.5), 2.5);
        assert_relative_eq!(r.distance_outside(6.0), 0.0);
        assert!(r.contains(5.0) && r.contains(7.0));
    }

    #[test]
    fn test_antioxidant_magnitude_is_nonzero() {
        assert_relative_eq!(antioxidant_weight_magnitude(), 1.35, epsilon = 1e-12);
    }

    #[test]
    fn test_midpoints_stay_below_dominance_threshold() {
        for s in Species::ALL {
            assert!(resolve_range(s, 25).midpoint() <= 80.0);
            assert!(resolve_range(s, 60).midpoint() <= 80.0);
        }
    }
}
