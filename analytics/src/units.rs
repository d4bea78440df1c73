//! Weight unit handling for display helpers
//!
//! All computation in this layer runs in kilograms; conversion happens only
//! at the display boundary (`format_weekly_change` and friends), driven by
//! the caller's unit preference. Inbound conversion belongs to the caller's
//! input layer, so only the kg-to-preference direction lives here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
    Stone, // For UK users
}

impl WeightUnit {
    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / 0.453592,
            WeightUnit::Stone => kg / 6.35029,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
            WeightUnit::Stone => "st",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}
