//! Weekly training volume aggregation and classification
//!
//! Merges externally tracked weekly set counts with live in-session counts
//! per muscle group, and grades totals against the MEV/MAV/MRV landmarks.

use crate::types::{LoggedExercise, MuscleVolumeEntry, SetType, VolumeZone};
use std::collections::HashMap;
use tracing::trace;

/// Merge live session work into the weekly per-muscle-group set counts.
///
/// Only completed sets of type [`SetType::Normal`] earn volume credit;
/// warm-up, drop, and AMRAP sets do not represent comparable training
/// stimulus. Exercises whose name has no muscle-group mapping are ignored.
/// Muscle groups seen live but absent from `weekly` are appended with
/// `mav_low = mav_high = 0`, signalling "no baseline data" rather than a
/// false zero target.
pub fn aggregate_volume(
    weekly: &[MuscleVolumeEntry],
    live: &[LoggedExercise],
    exercise_muscle_map: &HashMap<String, String>,
) -> Vec<MuscleVolumeEntry> {
    let mut merged: Vec<MuscleVolumeEntry> = weekly.to_vec();

    for exercise in live {
        let Some(muscle_group) = exercise_muscle_map.get(&exercise.name) else {
            trace!(exercise = %exercise.name, "no muscle-group mapping, skipping");
            continue;
        };

        let credited = exercise
            .sets
            .iter()
            .filter(|s| s.completed && s.set_type == SetType::Normal)
            .count() as u32;
        if credited == 0 {
            continue;
        }

        if let Some(idx) = merged.iter().position(|e| &e.muscle_group == muscle_group) {
            merged[idx].current_sets += credited;
        } else {
            merged.push(MuscleVolumeEntry {
                muscle_group: muscle_group.clone(),
                current_sets: credited,
                mav_low: 0,
                mav_high: 0,
            });
        }
    }

    merged
}

/// Grade a weekly set count against the volume landmarks.
///
/// Below `mev` is under-dosed and above `mrv` is over-dosed; both grade
/// Red. `[mev, mav)` is Yellow, `[mav, mrv]` is Green.
pub fn classify_volume(current_sets: u32, mev: u32, mav: u32, mrv: u32) -> VolumeZone {
    if current_sets < mev {
        VolumeZone::Red
    } else if current_sets < mav {
        VolumeZone::Yellow
    } else if current_sets <= mrv {
        VolumeZone::Green
    } else {
        VolumeZone::Red
    }
}
