//! Microbiome Scorer - Main coordinator for scoring skin samples
//!
//! This module runs every metric and classifier over a sample and assembles
//! the report consumed by the presentation layer. Includes both sequential
//! and parallel (Rayon) batch implementations.

use crate::classify::{classify_skin_type, range_status, RangeStatus, SkinType};
use crate::data::SubjectSample;
use crate::metrics::*;
use crate::species::Species;
use crate::tables::{resolve_range, OptimalRange};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Observed abundance of one scored species against its resolved range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesStatus {
    pub species: Species,
    pub key: String,
    pub observed: f64,
    pub range: OptimalRange,
    pub status: RangeStatus,
}

/// Scored sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinReport {
    pub sample_id: Option<String>,
    pub age: u32,
    pub hydration: f64,
    pub microbiome_balance: f64,
    pub antioxidant: f64,
    pub biological_age: f64,
    /// Classified from the hydration score, not the balance score
    pub skin_type: SkinType,
    /// Every recognized species in the profile, in table order
    pub species: Vec<SpeciesStatus>,
}

impl SkinReport {
    /// Species outside their optimal range
    pub fn out_of_range(&self) -> impl Iterator<Item = &SpeciesStatus> {
        self.species.iter().filter(|s| s.status != RangeStatus::Optimal)
    }
}

/// Main microbiome scorer
///
/// Holds no mutable state; all tables are compiled-in statics, so one scorer
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrobiomeScorer;

impl MicrobiomeScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score one sample using all metrics
    pub fn score_profile(&self, sample: &SubjectSample) -> SkinReport {
        let age = sample.age;
        let profile = &sample.profile;

        let hydration = calculate_hydration(age, profile);
        let balance = calculate_microbiome_balance(age, profile);
        let antioxidant = calculate_antioxidant(profile);
        let biological_age = calculate_biological_age(profile);

        let species = profile
            .recognized()
            .map(|(species, observed)| {
                let range = resolve_range(species, age);
                SpeciesStatus {
                    species,
                    key: species.key().to_string(),
                    observed,
                    range,
                    status: range_status(&range, observed),
                }
            })
            .collect();

        tracing::debug!(
            "Scored sample {:?} (age {}): hydration={} balance={} antioxidant={} bio_age={}",
            sample.sample_id,
            age,
            hydration.score,
            balance.score,
            antioxidant.score,
            biological_age.estimate
        );

        SkinReport {
            sample_id: sample.sample_id.clone(),
            age,
            hydration: hydration.score,
            microbiome_balance: balance.score,
            antioxidant: antioxidant.score,
            biological_age: biological_age.estimate,
            // Skin type reads moisture: low hydration is Dry, high is Oily.
            // The balance score would put a perfectly balanced sample in Oily.
            skin_type: classify_skin_type(hydration.score),
            species,
        }
    }

    /// Score samples one after another
    pub fn score_batch(&self, samples: &[SubjectSample]) -> Vec<SkinReport> {
        tracing::info!("Scoring {} samples sequentially", samples.len());
        samples.iter().map(|s| self.score_profile(s)).collect()
    }

    /// Score samples across CPU cores with Rayon.
    ///
    /// Output order matches input order and values are identical to
    /// [`score_batch`](Self::score_batch).
    pub fn score_batch_parallel(&self, samples: &[SubjectSample]) -> Vec<SkinReport> {
        tracing::info!("Scoring {} samples in parallel", samples.len());
        samples.par_iter().map(|s| self.score_profile(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::BacterialProfile;

    fn sample() -> SubjectSample {
        SubjectSample::new(
            25,
            BacterialProfile::new()
                .with("C.Acne", 75.0)
                .with("S.Epi", 9.0)
                .with("C.Krop", 2.0)
                .with("Other", 14.0),
        )
        .with_id("kit-1")
    }

    #[test]
    fn test_report_lists_recognized_species_only() {
        let report = MicrobiomeScorer::new().score_profile(&sample());
        let keys: Vec<&str> = report.species.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["C.Acne", "S.Epi", "C.Krop"]);
        assert_eq!(report.sample_id.as_deref(), Some("kit-1"));
    }

    #[test]
    fn test_out_of_range_species() {
        let report = MicrobiomeScorer::new().score_profile(&sample());
        let flagged: Vec<&SpeciesStatus> = report.out_of_range().collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].species, Species::StaphylococcusEpidermidis);
        assert_eq!(flagged[0].status, RangeStatus::Above);
    }

    #[test]
    fn test_balance_and_skin_type() {
        let report = MicrobiomeScorer::new().score_profile(&sample());
        // S.Epi 2 points over -> balance 99.2
        assert_eq!(report.microbiome_balance, 99.2);
        assert_eq!(report.skin_type, classify_skin_type(report.hydration));
    }

    #[test]
    fn test_balanced_sample_is_not_oily() {
        // Every species at its range midpoint: perfect balance, hydration 64
        let profile: BacterialProfile = Species::ALL
            .iter()
            .map(|&s| (s.key(), resolve_range(s, 25).midpoint()))
            .collect();
        let report = MicrobiomeScorer::new().score_profile(&SubjectSample::new(25, profile));

        assert_eq!(report.microbiome_balance, 100.0);
        assert_eq!(report.hydration, 64.0);
        assert_eq!(report.skin_type, SkinType::Healthy);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let samples: Vec<SubjectSample> = (0..64)
            .map(|i| {
                SubjectSample::new(
                    20 + i,
                    BacterialProfile::new()
                        .with("C.Acne", 40.0 + i as f64)
                        .with("S.Epi", (i % 12) as f64)
                        .with("S.Aureus", (i % 3) as f64),
                )
            })
            .collect();
        let scorer = MicrobiomeScorer::new();
        assert_eq!(scorer.score_batch(&samples), scorer.score_batch_parallel(&samples));
    }
}
