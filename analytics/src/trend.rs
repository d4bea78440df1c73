//! Bodyweight trend smoothing
//!
//! Daily scale readings are noisy (hydration, glycogen, time of day). The
//! trend line drops implausible jumps, then applies exponential smoothing so
//! the chart tracks actual tissue change instead of water weight.

use crate::numeric::finite_or_zero;
use crate::types::{TrendPoint, WeightSample};
use crate::units::WeightUnit;
use chrono::Duration;
use tracing::debug;

/// Smoothing factor for the trend EMA. 0.25 behaves like a 7-sample window.
pub const EMA_ALPHA: f64 = 0.25;

/// A sample further than this from the last accepted value is discarded as a
/// scale glitch or logging error.
pub const OUTLIER_THRESHOLD_KG: f64 = 2.0;

/// Minimum accepted samples before a trend is defined.
pub const MIN_TREND_SAMPLES: usize = 3;

/// Max distance (days) between the week-ago target date and an actual trend
/// point for a weekly change to be defined.
const WEEKLY_CHANGE_TOLERANCE_DAYS: i64 = 3;

/// Compute the denoised bodyweight trend line.
///
/// Samples are sorted ascending by date, walked through an outlier gate
/// (the first sample is always kept; later samples must land within
/// [`OUTLIER_THRESHOLD_KG`] of the last accepted value), then smoothed with
/// an EMA seeded by the first accepted value. Fewer than
/// [`MIN_TREND_SAMPLES`] accepted samples means the trend is undefined and
/// the result is empty.
pub fn compute_ema(samples: &[WeightSample]) -> Vec<TrendPoint> {
    let mut sorted: Vec<&WeightSample> = samples
        .iter()
        .filter(|s| s.weight_kg.is_finite())
        .collect();
    sorted.sort_by_key(|s| s.date);

    let mut accepted: Vec<&WeightSample> = Vec::with_capacity(sorted.len());
    for sample in sorted {
        match accepted.last() {
            Some(last) if (sample.weight_kg - last.weight_kg).abs() > OUTLIER_THRESHOLD_KG => {
                debug!(
                    date = %sample.date,
                    weight_kg = sample.weight_kg,
                    last_accepted_kg = last.weight_kg,
                    "rejecting outlier weight sample"
                );
            }
            _ => accepted.push(sample),
        }
    }

    if accepted.len() < MIN_TREND_SAMPLES {
        return Vec::new();
    }

    let mut trend = Vec::with_capacity(accepted.len());
    let mut ema = accepted[0].weight_kg;
    trend.push(TrendPoint {
        date: accepted[0].date,
        weight_kg: ema,
    });
    for sample in &accepted[1..] {
        ema = EMA_ALPHA * sample.weight_kg + (1.0 - EMA_ALPHA) * ema;
        trend.push(TrendPoint {
            date: sample.date,
            weight_kg: ema,
        });
    }
    trend
}

/// Week-over-week change along the trend line, in kg.
///
/// Looks for the trend point closest to exactly 7 days before the latest
/// point. Returns `None` when fewer than 2 points exist, when no point lies
/// within 3 days of that target, or when the closest point is the latest
/// point itself.
pub fn compute_weekly_change(trend: &[TrendPoint]) -> Option<f64> {
    if trend.len() < 2 {
        return None;
    }

    let latest_idx = trend.len() - 1;
    let latest = &trend[latest_idx];
    let target = latest.date - Duration::days(7);

    let (closest_idx, closest) = trend
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| (p.date - target).num_days().abs())?;

    if closest_idx == latest_idx {
        return None;
    }
    if (closest.date - target).num_days().abs() > WEEKLY_CHANGE_TOLERANCE_DAYS {
        return None;
    }

    Some(latest.weight_kg - closest.weight_kg)
}

/// Render a weekly change for display in the caller's preferred unit.
///
/// `None` renders as an em-dash; otherwise a direction arrow followed by the
/// absolute change to 1 decimal and the unit suffix.
pub fn format_weekly_change(change_kg: Option<f64>, unit: WeightUnit) -> String {
    match change_kg {
        None => "\u{2014}".to_string(),
        Some(change) => {
            let change = finite_or_zero(change);
            let arrow = if change < 0.0 {
                "\u{2193}"
            } else if change > 0.0 {
                "\u{2191}"
            } else {
                "\u{2192}"
            };
            format!("{} {:.1} {}", arrow, unit.from_kg(change).abs(), unit)
        }
    }
}
