// Score skin microbiome samples and print reports
//
// Usage: cargo run --bin score_profile -- [samples.json]
// Environment: SAMPLES_PATH, OUTPUT_FORMAT (json|explained|markdown), PARALLEL, RUST_LOG

use anyhow::Context;
use skin_microbiome_scorer::explanation::{ExplanationGenerator, JsonFormatter, MarkdownFormatter};
use skin_microbiome_scorer::{load_samples, MicrobiomeScorer, OutputFormat, ScorerConfig};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for reports
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skin_microbiome_scorer=info,score_profile=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ScorerConfig::from_env()?.with_samples_path(std::env::args().nth(1));

    tracing::info!("Configuration:");
    tracing::info!("  SAMPLES_PATH: {:?}", config.samples_path);
    tracing::info!("  OUTPUT_FORMAT: {:?}", config.output_format);
    tracing::info!("  PARALLEL: {}", config.parallel);

    let samples = load_samples(&config.samples_path)
        .with_context(|| format!("Failed to load samples from {:?}", config.samples_path))?;

    let scorer = MicrobiomeScorer::new();
    let start = Instant::now();
    let reports = if config.parallel {
        scorer.score_batch_parallel(&samples)
    } else {
        scorer.score_batch(&samples)
    };
    tracing::info!("Scored {} samples in {:?}", reports.len(), start.elapsed());

    match config.output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
            println!("{}", json);
        }
        OutputFormat::ExplainedJson => {
            let json = JsonFormatter::format_batch(&reports).context("Failed to serialize explanations")?;
            println!("{}", json);
        }
        OutputFormat::Markdown => {
            for report in &reports {
                let explanation = ExplanationGenerator::generate(report);
                println!("{}", MarkdownFormatter::format(&explanation));
            }
        }
    }

    Ok(())
}
