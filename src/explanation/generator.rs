use crate::classify::{RangeStatus, SkinType};
use crate::explanation::types::*;
use crate::scorer::{SkinReport, SpeciesStatus};

/// Scores below this get a targeted product suggestion
pub const SUPPORT_THRESHOLD: f64 = 50.0;
/// Balance scores below this get a microbiome cleanser suggestion
pub const BALANCE_SUPPORT_THRESHOLD: f64 = 60.0;

/// Main explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Generate complete explanation from a scored sample
    pub fn generate(report: &SkinReport) -> ReportExplanation {
        let score_cards = vec![
            Self::score_card("HYD", "Hydration", report.hydration),
            Self::score_card("BAL", "Microbiome Balance", report.microbiome_balance),
            Self::score_card("AOX", "Antioxidant Capacity", report.antioxidant),
        ];

        let species_cards = report.out_of_range().map(Self::species_card).collect();

        ReportExplanation {
            overview: Self::generate_overview(report),
            score_cards,
            species_cards,
            recommendations: Self::recommend(report),
        }
    }

    /// Star string with one star per 20 points
    pub fn stars(score: f64) -> String {
        let filled = (score / 20.0).floor().clamp(0.0, 5.0) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }

    pub fn interpretation(score: f64) -> &'static str {
        match score {
            s if s >= 80.0 => "Excellent",
            s if s >= 60.0 => "Good",
            s if s >= 40.0 => "Fair",
            _ => "Poor",
        }
    }

    fn score_card(code: &str, name: &str, score: f64) -> ScoreCard {
        ScoreCard {
            code: code.to_string(),
            name: name.to_string(),
            score,
            stars: Self::stars(score),
            interpretation: Self::interpretation(score).to_string(),
        }
    }

    fn generate_overview(report: &SkinReport) -> OverviewExplanation {
        let skin_type_message = match report.skin_type {
            SkinType::Dry => "Your skin microbiome points to low moisture retention.",
            SkinType::Combination => "Your skin microbiome shows mixed moisture levels.",
            SkinType::Healthy => "Your skin microbiome supports a well-hydrated barrier.",
            SkinType::Oily => "Your skin microbiome points to high sebum activity.",
        };

        let gap = report.biological_age - report.age as f64;
        let age_message = if gap.abs() < 1.0 {
            format!("Your skin age matches your age ({:.1} years).", report.biological_age)
        } else if gap < 0.0 {
            format!(
                "Your skin looks {:.1} years younger than your age (estimate {:.1}).",
                -gap, report.biological_age
            )
        } else {
            format!(
                "Your skin looks {:.1} years older than your age (estimate {:.1}).",
                gap, report.biological_age
            )
        };

        OverviewExplanation {
            sample_id: report.sample_id.clone(),
            skin_type: report.skin_type,
            skin_type_message: skin_type_message.to_string(),
            age: report.age,
            biological_age: report.biological_age,
            age_message,
        }
    }

    /// Severity from percentage points outside the range
    pub fn severity(distance: f64) -> Severity {
        match distance {
            d if d <= 1.0 => Severity::Low,
            d if d <= 5.0 => Severity::Medium,
            _ => Severity::High,
        }
    }

    fn species_card(status: &SpeciesStatus) -> SpeciesCard {
        let direction = match status.status {
            RangeStatus::Below => "below",
            RangeStatus::Above => "above",
            RangeStatus::Optimal => "within",
        };

        SpeciesCard {
            key: status.key.clone(),
            scientific_name: status.species.scientific_name().to_string(),
            observed: status.observed,
            range: status.range,
            status: status.status,
            severity: Self::severity(status.range.distance_outside(status.observed)),
            message: format!(
                "{} at {:.1}% is {} the optimal range of {:.1}-{:.1}%",
                status.species.scientific_name(),
                status.observed,
                direction,
                status.range.min,
                status.range.max
            ),
        }
    }

    fn recommend(report: &SkinReport) -> Vec<Recommendation> {
        let base = match report.skin_type {
            SkinType::Dry => "Rich barrier moisturizer",
            SkinType::Combination => "Balancing gel moisturizer",
            SkinType::Healthy => "Gentle maintenance cleanser",
            SkinType::Oily => "Lightweight oil-control moisturizer",
        };

        let mut recommendations = vec![Recommendation {
            category: base.to_string(),
            reason: format!("Suited to {} skin", report.skin_type.label().to_lowercase()),
        }];

        if report.hydration < SUPPORT_THRESHOLD {
            recommendations.push(Recommendation {
                category: "Hydrating humectant serum".to_string(),
                reason: format!("Hydration score {:.1} is below {:.0}", report.hydration, SUPPORT_THRESHOLD),
            });
        }
        if report.antioxidant < SUPPORT_THRESHOLD {
            recommendations.push(Recommendation {
                category: "Antioxidant serum".to_string(),
                reason: format!("Antioxidant score {:.1} is below {:.0}", report.antioxidant, SUPPORT_THRESHOLD),
            });
        }
        if report.microbiome_balance < BALANCE_SUPPORT_THRESHOLD {
            recommendations.push(Recommendation {
                category: "Microbiome-friendly prebiotic cleanser".to_string(),
                reason: format!(
                    "Microbiome balance score {:.1} is below {:.0}",
                    report.microbiome_balance, BALANCE_SUPPORT_THRESHOLD
                ),
            });
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SubjectSample;
    use crate::scorer::MicrobiomeScorer;
    use crate::species::BacterialProfile;

    #[test]
    fn test_stars() {
        assert_eq!(ExplanationGenerator::stars(100.0), "★★★★★");
        assert_eq!(ExplanationGenerator::stars(85.0), "★★★★☆");
        assert_eq!(ExplanationGenerator::stars(39.99), "★☆☆☆☆");
        assert_eq!(ExplanationGenerator::stars(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_interpretation() {
        assert_eq!(ExplanationGenerator::interpretation(80.0), "Excellent");
        assert_eq!(ExplanationGenerator::interpretation(60.0), "Good");
        assert_eq!(ExplanationGenerator::interpretation(45.0), "Fair");
        assert_eq!(ExplanationGenerator::interpretation(10.0), "Poor");
    }

    #[test]
    fn test_severity() {
        assert_eq!(ExplanationGenerator::severity(0.5), Severity::Low);
        assert_eq!(ExplanationGenerator::severity(3.0), Severity::Medium);
        assert_eq!(ExplanationGenerator::severity(12.0), Severity::High);
    }

    #[test]
    fn test_generate_flags_out_of_range_species() {
        let sample = SubjectSample::new(
            30,
            BacterialProfile::new()
                .with("C.Acne", 40.0)
                .with("S.Epi", 6.0)
                .with("S.Aureus", 12.0),
        );
        let report = MicrobiomeScorer::new().score_profile(&sample);
        let explanation = ExplanationGenerator::generate(&report);

        assert_eq!(explanation.score_cards.len(), 3);
        let keys: Vec<&str> = explanation.species_cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["C.Acne", "S.Aureus"]);
        assert_eq!(explanation.species_cards[0].status, RangeStatus::Below);
        assert_eq!(explanation.species_cards[1].severity, Severity::High);
    }

    #[test]
    fn test_age_message_compares_with_subject_age() {
        // Young-anchor C.Acne with the other anchored species absent reads
        // well under 60
        let sample = SubjectSample::new(60, BacterialProfile::new().with("C.Acne", 75.0));
        let report = MicrobiomeScorer::new().score_profile(&sample);
        let overview = ExplanationGenerator::generate(&report).overview;

        assert!(report.biological_age < 40.0);
        assert!(overview.age_message.contains("younger than your age"));
        assert!(overview
            .age_message
            .contains(&format!("estimate {:.1}", report.biological_age)));
        assert!(!overview.age_message.contains("baseline"));
    }

    #[test]
    fn test_low_scores_add_recommendations() {
        // Heavy S.Epi/S.Hominis overshoot sinks hydration and balance;
        // S.Aureus and C.Krop drag antioxidant capacity below the midpoint
        let sample = SubjectSample::new(
            30,
            BacterialProfile::new()
                .with("S.Epi", 30.0)
                .with("S.Hominis", 100.0)
                .with("S.Aureus", 10.0)
                .with("C.Krop", 10.0),
        );
        let report = MicrobiomeScorer::new().score_profile(&sample);
        let explanation = ExplanationGenerator::generate(&report);

        let categories: Vec<&str> = explanation
            .recommendations
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(report.skin_type, SkinType::Dry);
        assert_eq!(categories[0], "Rich barrier moisturizer");
        assert!(categories.contains(&"Hydrating humectant serum"));
        assert!(categories.contains(&"Antioxidant serum"));
        assert!(categories.contains(&"Microbiome-friendly prebiotic cleanser"));
    }
}
