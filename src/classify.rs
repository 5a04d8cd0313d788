//! Classification functions for report generation.
//!
//! Thresholds are half-open on the lower bound: a score exactly on a
//! threshold belongs to the band above it.

use crate::species::Species;
use crate::tables::{resolve_range, OptimalRange};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Skin Type Classification
// ============================================================================

pub const DRY_UPPER: f64 = 35.0;
pub const COMBINATION_UPPER: f64 = 55.0;
pub const HEALTHY_UPPER: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinType {
    Dry,
    Combination,
    Healthy,
    Oily,
}

impl SkinType {
    pub fn label(self) -> &'static str {
        match self {
            SkinType::Dry => "Dry",
            SkinType::Combination => "Combination",
            SkinType::Healthy => "Healthy",
            SkinType::Oily => "Oily",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify skin type from a balance-style score.
/// - < 35: Dry
/// - [35, 55): Combination
/// - [55, 75): Healthy
/// - >= 75: Oily
///
/// NaN falls into the Combination band.
pub fn classify_skin_type(score: f64) -> SkinType {
    match score {
        s if s.is_nan() => SkinType::Combination,
        s if s < DRY_UPPER => SkinType::Dry,
        s if s < COMBINATION_UPPER => SkinType::Combination,
        s if s < HEALTHY_UPPER => SkinType::Healthy,
        _ => SkinType::Oily,
    }
}

// ============================================================================
// Range Status Classification
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeStatus {
    Below,
    Optimal,
    Above,
}

impl RangeStatus {
    pub fn label(self) -> &'static str {
        match self {
            RangeStatus::Below => "Below",
            RangeStatus::Optimal => "Optimal",
            RangeStatus::Above => "Above",
        }
    }
}

impl fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compare an observation against a resolved range
pub fn range_status(range: &OptimalRange, observed: f64) -> RangeStatus {
    if observed > range.max {
        RangeStatus::Above
    } else if observed < range.min {
        RangeStatus::Below
    } else {
        RangeStatus::Optimal
    }
}

/// Classify a report key against its baseline (younger) range.
///
/// Unrecognized keys are always Optimal: with no range to compare against,
/// the species is reported as within range.
pub fn classify_range_status(species_key: &str, observed: f64) -> RangeStatus {
    classify_range_status_at_age(species_key, observed, 0)
}

/// Classify a report key against its age-adjusted range
pub fn classify_range_status_at_age(species_key: &str, observed: f64, age: u32) -> RangeStatus {
    match Species::from_key(species_key) {
        Some(species) => range_status(&resolve_range(species, age), observed),
        None => RangeStatus::Optimal,
    }
}
