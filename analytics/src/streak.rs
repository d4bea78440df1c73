//! Consecutive-day logging streak
//!
//! Counts how many calendar days in a row the user has logged, ending at a
//! caller-supplied reference day. Dates arrive as raw strings from storage
//! and are validated here; calendar arithmetic stays in plain `NaiveDate`
//! so there is no local-timezone drift across the day boundary.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Count the consecutive-day streak ending at `today`.
///
/// Invalid date strings are discarded and duplicates collapse. A streak
/// must include the reference day: if `today` itself was not logged the
/// streak is 0. Otherwise the walk steps backward one calendar day at a
/// time until the first gap.
pub fn calculate_streak<S: AsRef<str>>(log_dates: &[S], today: NaiveDate) -> u32 {
    let logged: BTreeSet<NaiveDate> = log_dates
        .iter()
        .filter_map(|raw| {
            let raw = raw.as_ref();
            match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    debug!(raw, "discarding unparseable log date");
                    None
                }
            }
        })
        .collect();

    if !logged.contains(&today) {
        return 0;
    }

    let mut streak = 1;
    let mut cursor = today;
    while let Some(previous) = cursor.pred_opt() {
        if !logged.contains(&previous) {
            break;
        }
        streak += 1;
        cursor = previous;
    }
    streak
}
