use crate::classify::{RangeStatus, SkinType};
use crate::tables::OptimalRange;
use serde::{Deserialize, Serialize};

/// Complete explanation for a scored sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExplanation {
    pub overview: OverviewExplanation,
    pub score_cards: Vec<ScoreCard>,
    pub species_cards: Vec<SpeciesCard>,
    pub recommendations: Vec<Recommendation>,
}

/// Headline: skin type and biological age
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewExplanation {
    pub sample_id: Option<String>,
    pub skin_type: SkinType,
    pub skin_type_message: String,
    pub age: u32,
    pub biological_age: f64,
    pub age_message: String,
}

/// One 0-100 score with stars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreCard {
    pub code: String,  // "HYD", "BAL", "AOX"
    pub name: String,
    pub score: f64,
    pub stars: String, // "★★★★☆"
    pub interpretation: String,
}

/// Species outside its optimal range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesCard {
    pub key: String,
    pub scientific_name: String,
    pub observed: f64,
    pub range: OptimalRange,
    pub status: RangeStatus,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Product category suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub reason: String,
}
