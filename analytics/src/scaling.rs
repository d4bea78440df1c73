//! Recipe and quantity scaling
//!
//! Rescales a logged entry's macros from one quantity to another, e.g.
//! relogging 150 g of a meal originally saved at 100 g. This is the one
//! place in the layer that fails loudly: no scale factor is definable from
//! a zero or negative base, and defaulting would silently corrupt
//! downstream totals.

use crate::errors::AnalyticsError;
use crate::numeric::{finite_non_negative, finite_or_zero};
use crate::types::{NutritionEntry, WATER_ML_KEY};

/// Derive the multiplicative factor taking `original_quantity` to
/// `desired_quantity`.
///
/// The desired quantity is normalized finite-or-zero and clamped
/// non-negative; the base must be finite and strictly positive.
pub fn scale_factor(original_quantity: f64, desired_quantity: f64) -> Result<f64, AnalyticsError> {
    if !original_quantity.is_finite() || original_quantity <= 0.0 {
        return Err(AnalyticsError::NonPositiveScaleBase {
            base: original_quantity,
        });
    }
    Ok(finite_non_negative(desired_quantity) / original_quantity)
}

/// Rescale an entry's macros (and its water micronutrient, when present)
/// from `original_quantity` to `desired_quantity`. Name, date, and
/// timestamps pass through untouched.
pub fn scale_entry(
    entry: &NutritionEntry,
    original_quantity: f64,
    desired_quantity: f64,
) -> Result<NutritionEntry, AnalyticsError> {
    let factor = scale_factor(original_quantity, desired_quantity)?;

    let mut scaled = entry.clone();
    scaled.calories = finite_or_zero(entry.calories) * factor;
    scaled.protein_g = finite_or_zero(entry.protein_g) * factor;
    scaled.carbs_g = finite_or_zero(entry.carbs_g) * factor;
    scaled.fat_g = finite_or_zero(entry.fat_g) * factor;
    if let Some(micros) = scaled.micro_nutrients.as_mut() {
        if let Some(water) = micros.get_mut(WATER_ML_KEY) {
            *water = finite_or_zero(*water) * factor;
        }
    }
    Ok(scaled)
}
