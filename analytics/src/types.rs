//! Value types consumed and produced by the analytics layer
//!
//! Every type here is a plain immutable value constructed by the caller
//! immediately before a call. The layer never stores, fetches, or mutates
//! them; ownership stays entirely with the caller.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// The one micronutrient key the layer recognizes. Unknown keys in the
/// micronutrient bag are ignored, not errors.
pub const WATER_ML_KEY: &str = "water_ml";

// ============================================================================
// Bodyweight
// ============================================================================

/// A single logged bodyweight reading.
///
/// Collections may be unsorted and may contain duplicate dates; callers
/// should pre-aggregate duplicates if they want one point per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

/// One point on the denoised bodyweight trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

// ============================================================================
// Nutrition
// ============================================================================

/// A logged food entry.
///
/// Numeric fields may arrive as NaN or ±∞ from upstream sources and are
/// treated as zero by every consumer in this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEntry {
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged_at: Option<DateTime<Utc>>,
    /// Optional micronutrient bag keyed by nutrient name; only
    /// [`WATER_ML_KEY`] is recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micro_nutrients: Option<BTreeMap<String, f64>>,
}

/// A saved favorite food. Carries no temporal data; used only as a ranking
/// fallback when logging history is thin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteFood {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// A quick-relog suggestion.
///
/// Items backfilled from favorites carry `times_logged = 0` and
/// `last_logged = None` so callers can badge them differently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub times_logged: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_logged: Option<NaiveDate>,
}

// ============================================================================
// Training
// ============================================================================

/// How a set counts toward training stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    Normal,
    WarmUp,
    DropSet,
    Amrap,
}

/// A set performed in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedSet {
    pub weight_kg: f64,
    pub reps: u32,
    pub completed: bool,
    pub set_type: SetType,
}

/// A live in-session exercise with its sets, as fed to the volume
/// aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedExercise {
    pub name: String,
    pub sets: Vec<CompletedSet>,
}

/// Weekly set count for one muscle group against its adaptive-volume
/// landmarks. `mav_low <= mav_high` is an upstream invariant, assumed here
/// rather than enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleVolumeEntry {
    pub muscle_group: String,
    pub current_sets: u32,
    pub mav_low: u32,
    pub mav_high: u32,
}

/// One generated warm-up set. Always tagged [`SetType::WarmUp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampSet {
    pub weight_kg: f64,
    pub reps: u32,
    pub set_type: SetType,
}

/// Traffic-light classification of a weekly set count against the MEV/MAV/
/// MRV landmarks. Under- and over-dosed both map to `Red`; callers
/// disambiguate with the accompanying number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeZone {
    Red,
    Yellow,
    Green,
}

// ============================================================================
// Weekly summary
// ============================================================================

/// Calorie adherence for a single logged day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAdherence {
    pub date: NaiveDate,
    pub calories: f64,
    /// Absolute distance from the calorie target.
    pub deviation: f64,
}

/// Aggregated nutrition over the days that actually have entries.
///
/// Averages divide by `days_logged`, never by a fixed 7 — a single logged
/// day yields an average equal to that day's total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub days_logged: u32,
    pub total_calories: f64,
    pub total_protein_g: f64,
    pub total_carbs_g: f64,
    pub total_fat_g: f64,
    pub avg_calories: f64,
    pub avg_protein_g: f64,
    pub avg_carbs_g: f64,
    pub avg_fat_g: f64,
    pub total_water_ml: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_day: Option<DayAdherence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_day: Option<DayAdherence>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_type_serialization() {
        assert_eq!(
            serde_json::to_string(&SetType::WarmUp).unwrap(),
            "\"warm_up\""
        );
        assert_eq!(
            serde_json::from_str::<SetType>("\"drop_set\"").unwrap(),
            SetType::DropSet
        );
    }

    #[test]
    fn test_nutrition_entry_optional_fields_omitted() {
        let entry = NutritionEntry {
            name: "Oats".to_string(),
            calories: 389.0,
            protein_g: 16.9,
            carbs_g: 66.3,
            fat_g: 6.9,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            logged_at: None,
            micro_nutrients: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("logged_at").is_none());
        assert!(json.get("micro_nutrients").is_none());
    }

    #[test]
    fn test_volume_zone_serialization() {
        assert_eq!(serde_json::to_string(&VolumeZone::Green).unwrap(), "\"green\"");
    }
}
