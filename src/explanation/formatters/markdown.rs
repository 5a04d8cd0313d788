use crate::explanation::types::{ReportExplanation, Severity};

/// Markdown formatter for explanations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format explanation as markdown
    pub fn format(explanation: &ReportExplanation) -> String {
        let mut md = String::with_capacity(2048);
        let overview = &explanation.overview;

        // Title with skin type
        match &overview.sample_id {
            Some(id) => md.push_str(&format!("# Skin Report {} - {} Skin\n\n", id, overview.skin_type)),
            None => md.push_str(&format!("# Skin Report - {} Skin\n\n", overview.skin_type)),
        }
        md.push_str(&format!("{}\n\n", overview.skin_type_message));
        md.push_str(&format!(
            "**Skin Age:** {:.1} (actual age {})  \n{}\n\n",
            overview.biological_age, overview.age, overview.age_message
        ));

        // Scores
        md.push_str("## Scores\n\n");
        md.push_str("| Score | Value | Rating |\n");
        md.push_str("|-------|-------|--------|\n");
        for card in &explanation.score_cards {
            md.push_str(&format!(
                "| {} | {:.2}/100 | {} {} |\n",
                card.name, card.score, card.stars, card.interpretation
            ));
        }
        md.push('\n');

        // Species outside range
        if !explanation.species_cards.is_empty() {
            md.push_str("## Bacteria Outside Optimal Range\n\n");
            for card in &explanation.species_cards {
                let icon = match card.severity {
                    Severity::Low => "ℹ️",
                    Severity::Medium => "⚠️",
                    Severity::High => "🚨",
                };
                md.push_str(&format!("- {} **{}** ({}): {}\n", icon, card.key, card.status, card.message));
            }
            md.push('\n');
        }

        // Recommendations
        if !explanation.recommendations.is_empty() {
            md.push_str("## Recommended Products\n\n");
            for rec in &explanation.recommendations {
                md.push_str(&format!("- **{}** - {}\n", rec.category, rec.reason));
            }
            md.push('\n');
        }

        md
    }
}
