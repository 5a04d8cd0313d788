//! Utility modules for microbiome scoring
//!
//! Contains shared functionality used across multiple metrics:
//! - Rounding: Decimal rounding, clamping and signed-sum normalization

pub mod rounding;

// Re-export commonly used helpers
pub use rounding::{clamp_or, round_to, signed_sum_to_percent};
