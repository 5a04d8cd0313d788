//! Sample Loading
//!
//! Reads subject samples (age + bacterial profile) exported by the reporting
//! backend. A file holds either a single sample object or an array of them:
//!
//! ```json
//! [{"sample_id": "kit-0142", "age": 34, "profile": {"C.Acne": 71.2, "S.Epi": 6.4, "Other": 14.0}}]
//! ```

use crate::species::BacterialProfile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One lab result as delivered by the report-fetch collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSample {
    #[serde(default)]
    pub sample_id: Option<String>,
    pub age: u32,
    pub profile: BacterialProfile,
}

impl SubjectSample {
    pub fn new(age: u32, profile: BacterialProfile) -> Self {
        Self {
            sample_id: None,
            age,
            profile,
        }
    }

    pub fn with_id(mut self, sample_id: impl Into<String>) -> Self {
        self.sample_id = Some(sample_id.into());
        self
    }
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read sample file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse sample JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Sample input contains no samples")]
    Empty,
}

/// Parse samples from a JSON string (single object or array)
///
/// The shape is picked from the first non-blank character so that a bad field
/// reports serde's own message (type, line and column).
pub fn parse_samples(json: &str) -> Result<Vec<SubjectSample>, ProfileError> {
    let samples = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<SubjectSample>>(json)?
    } else {
        vec![serde_json::from_str::<SubjectSample>(json)?]
    };

    if samples.is_empty() {
        return Err(ProfileError::Empty);
    }

    for sample in &samples {
        let ignored = sample.profile.unrecognized_keys();
        if !ignored.is_empty() {
            tracing::debug!(
                "Sample {:?}: ignoring unscored keys {:?}",
                sample.sample_id,
                ignored
            );
        }
    }

    Ok(samples)
}

/// Load samples from a JSON file
pub fn load_samples(path: &Path) -> Result<Vec<SubjectSample>, ProfileError> {
    let contents = fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_samples(&contents)?;
    tracing::info!("Loaded {} samples from {:?}", samples.len(), path);
    Ok(samples)
}
