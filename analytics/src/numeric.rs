//! Shared numeric normalization and tolerance helpers
//!
//! Every ingestion point in the layer routes raw `f64` fields through these
//! helpers so the NaN-to-zero contract is visible in one place instead of
//! being scattered through the math.

/// Plate increment for barbell loading (kg). Ramp weights are rounded to
/// multiples of this.
pub const PLATE_INCREMENT_KG: f64 = 2.5;

/// Tolerance for treating two logged weights as the same weight (kg), used
/// for personal-record matching.
pub const WEIGHT_MATCH_TOLERANCE_KG: f64 = 0.01;

/// Normalize a possibly NaN/infinite value to zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Normalize to a finite, non-negative value (NaN/infinite/negative all
/// collapse to zero).
pub fn finite_non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

/// Round a weight to the nearest plate increment.
pub fn round_to_plate(weight_kg: f64) -> f64 {
    (weight_kg / PLATE_INCREMENT_KG).round() * PLATE_INCREMENT_KG
}

/// Whether two weights are equal within the PR-matching tolerance.
pub fn weights_match(a_kg: f64, b_kg: f64) -> bool {
    (a_kg - b_kg).abs() <= WEIGHT_MATCH_TOLERANCE_KG
}
