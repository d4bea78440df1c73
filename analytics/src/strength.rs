//! Estimated one-rep-max calculation
//!
//! Epley estimate from a (weight, reps) pair, with guard rails for the
//! ranges where the formula is meaningless, plus a best-of-session helper.

use crate::types::CompletedSet;

/// The Epley formula is not considered reliable beyond this many reps.
pub const MAX_E1RM_REPS: u32 = 30;

/// Estimated one-rep max via Epley: `weight × (1 + reps/30)`.
///
/// Returns 0 for non-finite or non-positive weight, zero reps, or reps
/// beyond [`MAX_E1RM_REPS`]. A true single needs no extrapolation and
/// returns the weight unchanged.
pub fn compute_e1rm(weight_kg: f64, reps: u32) -> f64 {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || reps == 0 || reps > MAX_E1RM_REPS {
        return 0.0;
    }
    if reps == 1 {
        return weight_kg;
    }
    weight_kg * (1.0 + reps as f64 / 30.0)
}

/// Best Epley estimate across a collection of sets.
///
/// Sets with non-positive weight or reps outside `1..=30` are skipped;
/// `None` when no set qualifies.
pub fn best_e1rm(sets: &[CompletedSet]) -> Option<f64> {
    sets.iter()
        .filter(|s| s.weight_kg.is_finite() && s.weight_kg > 0.0 && s.reps > 0 && s.reps <= MAX_E1RM_REPS)
        .map(|s| compute_e1rm(s.weight_kg, s.reps))
        .fold(None, |best, e1rm| match best {
            Some(b) if b >= e1rm => Some(b),
            _ => Some(e1rm),
        })
}
