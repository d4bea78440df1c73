//! Fitlog Analytics
//!
//! Pure computation layer for the Fitlog tracker. Converts raw logged events
//! (bodyweight samples, nutrition entries, completed training sets) into the
//! derived metrics the app renders: trend lines, quick-relog rankings, weekly
//! volume classification, warm-up ramps, estimated maxima, logging streaks,
//! and weekly nutrition summaries.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: every operation is a synchronous function of its
//!    arguments — no clock reads, no I/O, no shared state. Time-sensitive
//!    computations take the reference date as an explicit parameter.
//! 2. **Degrade, Don't Throw**: malformed numeric input (NaN, infinities,
//!    negative counts) is normalized to zero or filtered at ingestion;
//!    insufficient data yields `[]`/`None`/`0`, never a panic.
//! 3. **Named Tolerances**: plate increments and weight-matching epsilons are
//!    named constants, not inline magic numbers.

pub mod errors;
pub mod numeric;
pub mod ramp;
pub mod ranking;
pub mod scaling;
pub mod streak;
pub mod strength;
pub mod summary;
pub mod trend;
pub mod types;
pub mod units;
pub mod volume;

// Re-export commonly used items
pub use errors::AnalyticsError;
pub use types::*;
pub use units::WeightUnit;

pub use ramp::{generate_warm_up_sets, DEFAULT_BAR_WEIGHT_KG};
pub use ranking::compute_quick_relog_items;
pub use scaling::{scale_entry, scale_factor};
pub use streak::calculate_streak;
pub use strength::{best_e1rm, compute_e1rm};
pub use summary::compute_weekly_summary;
pub use trend::{compute_ema, compute_weekly_change, format_weekly_change};
pub use volume::{aggregate_volume, classify_volume};
