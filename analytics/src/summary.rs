//! Weekly nutrition summary
//!
//! Groups entries by the calendar days that actually have logs (never a
//! fixed 7-slot week) and derives totals, per-logged-day averages, water
//! intake, and best/worst calorie-adherence days.

use crate::numeric::finite_or_zero;
use crate::types::{DayAdherence, NutritionEntry, WeeklySummary, WATER_ML_KEY};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Default)]
struct DayTotals {
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    water_ml: f64,
}

/// Summarize nutrition entries over the days they cover.
///
/// Per-entry macro values are normalized finite-or-zero before summing.
/// Averages divide by the number of distinct logged dates. Best and worst
/// days are the minimum and maximum absolute deviation from
/// `target_calories`; with a non-positive (or non-finite) target there is
/// no meaningful deviation and both are `None`. Ties resolve to the
/// earliest date.
pub fn compute_weekly_summary(entries: &[NutritionEntry], target_calories: f64) -> WeeklySummary {
    let mut days: BTreeMap<NaiveDate, DayTotals> = BTreeMap::new();

    for entry in entries {
        let day = days.entry(entry.date).or_default();
        day.calories += finite_or_zero(entry.calories);
        day.protein_g += finite_or_zero(entry.protein_g);
        day.carbs_g += finite_or_zero(entry.carbs_g);
        day.fat_g += finite_or_zero(entry.fat_g);
        if let Some(micros) = &entry.micro_nutrients {
            if let Some(&water) = micros.get(WATER_ML_KEY) {
                day.water_ml += finite_or_zero(water);
            }
        }
    }

    let days_logged = days.len() as u32;
    let total_calories: f64 = days.values().map(|d| d.calories).sum();
    let total_protein_g: f64 = days.values().map(|d| d.protein_g).sum();
    let total_carbs_g: f64 = days.values().map(|d| d.carbs_g).sum();
    let total_fat_g: f64 = days.values().map(|d| d.fat_g).sum();
    let total_water_ml: f64 = days.values().map(|d| d.water_ml).sum();

    let (avg_calories, avg_protein_g, avg_carbs_g, avg_fat_g) = if days_logged == 0 {
        (0.0, 0.0, 0.0, 0.0)
    } else {
        let divisor = f64::from(days_logged);
        (
            total_calories / divisor,
            total_protein_g / divisor,
            total_carbs_g / divisor,
            total_fat_g / divisor,
        )
    };

    let (best_day, worst_day) = if target_calories.is_finite() && target_calories > 0.0 {
        let mut best: Option<DayAdherence> = None;
        let mut worst: Option<DayAdherence> = None;
        // BTreeMap iterates in date order, so ties keep the earliest day.
        for (&date, totals) in &days {
            let deviation = (totals.calories - target_calories).abs();
            let adherence = DayAdherence {
                date,
                calories: totals.calories,
                deviation,
            };
            if best.as_ref().map_or(true, |b| deviation < b.deviation) {
                best = Some(adherence.clone());
            }
            if worst.as_ref().map_or(true, |w| deviation > w.deviation) {
                worst = Some(adherence);
            }
        }
        (best, worst)
    } else {
        (None, None)
    };

    WeeklySummary {
        days_logged,
        total_calories,
        total_protein_g,
        total_carbs_g,
        total_fat_g,
        avg_calories,
        avg_protein_g,
        avg_carbs_g,
        avg_fat_g,
        total_water_ml,
        best_day,
        worst_day,
    }
}
