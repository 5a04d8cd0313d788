//! Report explanations
//!
//! Turns a scored sample into display cards, range warnings and product
//! suggestions, with Markdown and JSON renderers.

pub mod types;
pub mod generator;
pub mod formatters;

pub use types::{
    OverviewExplanation, Recommendation, ReportExplanation, ScoreCard, Severity, SpeciesCard,
};
pub use generator::ExplanationGenerator;
pub use formatters::{ExplainedReport, JsonFormatter, MarkdownFormatter};
