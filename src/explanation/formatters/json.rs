use crate::explanation::generator::ExplanationGenerator;
use crate::explanation::types::ReportExplanation;
use crate::scorer::SkinReport;
use serde::Serialize;

/// One scored sample paired with its display cards
#[derive(Debug, Serialize)]
pub struct ExplainedReport<'a> {
    pub report: &'a SkinReport,
    pub explanation: ReportExplanation,
}

/// JSON formatter for explanations
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format one explanation as pretty-printed JSON
    pub fn format(explanation: &ReportExplanation) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(explanation)
    }

    /// Explain every report and emit a JSON array of `{report, explanation}`
    /// objects, in input order
    pub fn format_batch(reports: &[SkinReport]) -> Result<String, serde_json::Error> {
        let explained: Vec<ExplainedReport<'_>> = reports
            .iter()
            .map(|report| ExplainedReport {
                report,
                explanation: ExplanationGenerator::generate(report),
            })
            .collect();
        serde_json::to_string_pretty(&explained)
    }
}
