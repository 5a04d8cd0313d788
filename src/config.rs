//! Runtime configuration for the scoring binary
//!
//! Read from environment variables with local-development defaults:
//! - `SAMPLES_PATH`: sample JSON file (default `samples.json`)
//! - `OUTPUT_FORMAT`: `json`, `explained` or `markdown` (default `json`)
//! - `PARALLEL`: score with Rayon (default `true`)

use anyhow::{bail, Result};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raw score reports
    Json,
    /// Reports paired with their explanation cards
    ExplainedJson,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "explained" | "explained-json" => Ok(OutputFormat::ExplainedJson),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => bail!(
                "Unknown OUTPUT_FORMAT '{}' (expected json, explained or markdown)",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerConfig {
    pub samples_path: PathBuf,
    pub output_format: OutputFormat,
    pub parallel: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            samples_path: PathBuf::from("samples.json"),
            output_format: OutputFormat::Json,
            parallel: true,
        }
    }
}

impl ScorerConfig {
    /// Build configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, test maps)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("SAMPLES_PATH") {
            config.samples_path = PathBuf::from(path);
        }
        if let Some(format) = lookup("OUTPUT_FORMAT") {
            config.output_format = format.parse()?;
        }
        if let Some(parallel) = lookup("PARALLEL") {
            config.parallel = match parallel.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => bail!("Invalid PARALLEL value '{}'", other),
            };
        }

        Ok(config)
    }

    /// Command-line path overrides `SAMPLES_PATH`
    pub fn with_samples_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.samples_path = PathBuf::from(path);
        }
        self
    }
}
