//! Metric modules for microbiome scoring
//!
//! Each score is implemented in its own module. Every calculation is pure:
//! it reads the compiled-in tables and the profile, and never fails.

pub mod hydration;
pub mod microbiome_balance;
pub mod antioxidant;
pub mod biological_age;

// Re-export metric functions
pub use hydration::{calculate_hydration, compute_hydration_score, HydrationResult};
pub use microbiome_balance::{calculate_microbiome_balance, compute_microbiome_balance_score, BalanceResult};
pub use antioxidant::{calculate_antioxidant, compute_antioxidant_score, AntioxidantResult};
pub use biological_age::{calculate_biological_age, estimate_biological_age, BiologicalAgeResult};
