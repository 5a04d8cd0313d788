//! Rounding and clamping helpers shared by every score
//!
//! Scores are reported to two decimals and the age estimate to one, rounding
//! half away from zero.

/// Round to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Clamp to [lo, hi], mapping NaN to `fallback`
pub fn clamp_or(value: f64, lo: f64, hi: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(lo, hi)
    }
}

/// Map a signed weighted sum onto 0-100.
///
/// `score` lies in [-max_score, max_score] for in-range inputs; it is shifted
/// by `max_score`, halved and scaled to a percentage. Returns `None` when
/// `max_score` is zero so callers pick their own midpoint.
pub fn signed_sum_to_percent(score: f64, max_score: f64) -> Option<f64> {
    if max_score <= 0.0 {
        return None;
    }
    Some((score + max_score) / (2.0 * max_score) * 100.0)
}
