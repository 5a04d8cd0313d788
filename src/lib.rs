//! Skin Microbiome Scorer
//!
//! Scores lab-measured skin bacteria abundances into report values:
//! - `species`: Scored species and abundance profiles
//! - `tables`: Compiled-in optimal ranges, weights and age anchors
//! - `metrics`: Hydration, microbiome balance, antioxidant and biological age
//! - `classify`: Skin type and per-species range status
//! - `scorer`: Report assembly (sequential and Rayon batch scoring)
//! - `explanation`: Display cards, recommendations and Markdown/JSON output
//!
//! Every computation is pure and infallible: unknown species are ignored,
//! missing species count as 0%, and every score is clamped to its range.

pub mod utils;
pub mod species;
pub mod tables;
pub mod metrics;
pub mod classify;
pub mod data;
pub mod scorer;
pub mod explanation;
pub mod config;

// Re-export commonly used types
pub use species::{BacterialProfile, Species};
pub use tables::{resolve_range, OptimalRange, AGE_THRESHOLD};
pub use classify::{
    classify_range_status, classify_range_status_at_age, classify_skin_type, RangeStatus, SkinType,
};
pub use data::{load_samples, parse_samples, ProfileError, SubjectSample};
pub use scorer::{MicrobiomeScorer, SkinReport, SpeciesStatus};
pub use explanation::{ExplanationGenerator, ReportExplanation};
pub use config::{OutputFormat, ScorerConfig};
pub use metrics::*;
