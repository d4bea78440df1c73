//! Warm-up ramp generation
//!
//! Produces the ascending warm-up sets leading to a working weight: empty
//! bar for volume, then roughly 60% and 80% singles-adjacent sets, all
//! rounded to loadable plate increments.

use crate::numeric::round_to_plate;
use crate::types::{RampSet, SetType};

/// Standard Olympic bar weight (kg). Rust has no default arguments, so
/// callers pass this explicitly for the common case.
pub const DEFAULT_BAR_WEIGHT_KG: f64 = 20.0;

/// Generate up to three warm-up sets leading to `working_weight_kg`.
///
/// The bar weight is rounded to the nearest plate increment before use;
/// an empty ramp is returned when either input is non-finite, the rounded
/// bar is not a positive loadable weight, or the working weight is at or
/// below the bar. Otherwise: the bare bar for 10 reps, then 60% × 5 and
/// 80% × 3, each rounded to the nearest 2.5 kg and emitted only when
/// strictly heavier than the previous set, so the sequence never
/// duplicates or regresses.
pub fn generate_warm_up_sets(working_weight_kg: f64, bar_weight_kg: f64) -> Vec<RampSet> {
    if !working_weight_kg.is_finite() || !bar_weight_kg.is_finite() {
        return Vec::new();
    }

    let bar_weight_kg = round_to_plate(bar_weight_kg);
    if bar_weight_kg <= 0.0 || working_weight_kg <= bar_weight_kg {
        return Vec::new();
    }

    let mut sets = vec![RampSet {
        weight_kg: bar_weight_kg,
        reps: 10,
        set_type: SetType::WarmUp,
    }];

    let sixty = round_to_plate(working_weight_kg * 0.6);
    if sixty > bar_weight_kg {
        sets.push(RampSet {
            weight_kg: sixty,
            reps: 5,
            set_type: SetType::WarmUp,
        });
    }

    let eighty = round_to_plate(working_weight_kg * 0.8);
    if eighty > sets[sets.len() - 1].weight_kg {
        sets.push(RampSet {
            weight_kg: eighty,
            reps: 3,
            set_type: SetType::WarmUp,
        });
    }

    sets
}
