//! Quick-relog ranking
//!
//! Ranks previously logged foods by how often and how recently they were
//! logged, so the top of the "log it again" sheet is what the user actually
//! eats. Saved favorites backfill the list only when logging history is too
//! thin to rank from behavior.

use crate::numeric::finite_non_negative;
use crate::types::{FavoriteFood, NutritionEntry, RankedItem};
use chrono::NaiveDate;
use tracing::trace;

/// Linear score decay per day since the food was last logged. Reaches zero
/// at about 15 days; stale foods score 0 but stay in the candidate list.
pub const RECENCY_DECAY_PER_DAY: f64 = 0.07;

/// Favorites are never backfilled once this many behavioral items exist.
const MIN_BEHAVIORAL_ITEMS: usize = 3;

struct FoodGroup<'a> {
    /// Lowercased trimmed name used for grouping.
    key: String,
    /// Trimmed display name from the first occurrence.
    name: String,
    count: u32,
    last_logged: NaiveDate,
    /// Entry supplying the displayed macros: the highest-calorie variant in
    /// the group, first occurrence winning ties.
    representative: &'a NutritionEntry,
}

/// Rank logged foods for quick relogging.
///
/// Entries are grouped by case-insensitive trimmed name (blank names are
/// discarded outright) and scored `count × max(0, 1 − days_since_last ×
/// 0.07)`. Groups are stably sorted by score descending and truncated to
/// `max_items`; if fewer than 3 behavioral items survive, favorites are
/// appended in their given order (skipping names already present) until
/// `max_items` is reached or favorites run out.
///
/// The reference date is explicit so results are deterministic and
/// replayable.
pub fn compute_quick_relog_items(
    entries: &[NutritionEntry],
    favorites: &[FavoriteFood],
    max_items: usize,
    today: NaiveDate,
) -> Vec<RankedItem> {
    let mut groups: Vec<FoodGroup<'_>> = Vec::new();

    for entry in entries {
        let trimmed = entry.name.trim();
        if trimmed.is_empty() {
            trace!("discarding nutrition entry with blank name");
            continue;
        }
        let key = trimmed.to_lowercase();

        if let Some(idx) = groups.iter().position(|g| g.key == key) {
            let group = &mut groups[idx];
            group.count += 1;
            if entry.date > group.last_logged {
                group.last_logged = entry.date;
            }
            if finite_non_negative(entry.calories)
                > finite_non_negative(group.representative.calories)
            {
                group.representative = entry;
            }
        } else {
            groups.push(FoodGroup {
                key,
                name: trimmed.to_string(),
                count: 1,
                last_logged: entry.date,
                representative: entry,
            });
        }
    }

    // Stable sort keeps insertion order for equal scores.
    let mut scored: Vec<(f64, &FoodGroup<'_>)> = groups
        .iter()
        .map(|g| (score(g.count, g.last_logged, today), g))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut items: Vec<RankedItem> = scored
        .iter()
        .take(max_items)
        .map(|(_, g)| RankedItem {
            name: g.name.clone(),
            calories: finite_non_negative(g.representative.calories),
            protein_g: finite_non_negative(g.representative.protein_g),
            carbs_g: finite_non_negative(g.representative.carbs_g),
            fat_g: finite_non_negative(g.representative.fat_g),
            times_logged: g.count,
            last_logged: Some(g.last_logged),
        })
        .collect();

    if items.len() < MIN_BEHAVIORAL_ITEMS {
        for favorite in favorites {
            if items.len() >= max_items {
                break;
            }
            let trimmed = favorite.name.trim();
            if trimmed.is_empty() {
                continue;
            }
            let key = trimmed.to_lowercase();
            if items.iter().any(|i| i.name.to_lowercase() == key) {
                continue;
            }
            items.push(RankedItem {
                name: trimmed.to_string(),
                calories: finite_non_negative(favorite.calories),
                protein_g: finite_non_negative(favorite.protein_g),
                carbs_g: finite_non_negative(favorite.carbs_g),
                fat_g: finite_non_negative(favorite.fat_g),
                times_logged: 0,
                last_logged: None,
            });
        }
    }

    items
}

fn score(count: u32, last_logged: NaiveDate, today: NaiveDate) -> f64 {
    let days_since = (today - last_logged).num_days() as f64;
    let recency_weight = (1.0 - days_since * RECENCY_DECAY_PER_DAY).max(0.0);
    count as f64 * recency_weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn entry(name: &str, calories: f64, date: NaiveDate) -> NutritionEntry {
        NutritionEntry {
            name: name.to_string(),
            calories,
            protein_g: 10.0,
            carbs_g: 20.0,
            fat_g: 5.0,
            date,
            logged_at: None,
            micro_nutrients: None,
        }
    }

    fn favorite(name: &str, calories: f64) -> FavoriteFood {
        FavoriteFood {
            id: Uuid::new_v4(),
            name: name.to_string(),
            calories,
            protein_g: 1.0,
            carbs_g: 2.0,
            fat_g: 3.0,
        }
    }

    #[test]
    fn test_empty_inputs_yield_empty_result() {
        assert!(compute_quick_relog_items(&[], &[], 5, day(15)).is_empty());
    }

    #[test]
    fn test_blank_names_never_ranked() {
        let entries = vec![entry("", 999.0, day(15)), entry("   ", 500.0, day(15))];
        assert!(compute_quick_relog_items(&entries, &[], 5, day(15)).is_empty());
    }

    #[test]
    fn test_frequency_outranks_within_same_recency() {
        let mut entries = Vec::new();
        for _ in 0..10 {
            entries.push(entry("Oats", 380.0, day(15)));
        }
        for _ in 0..2 {
            entries.push(entry("Rice", 200.0, day(15)));
        }
        let items = compute_quick_relog_items(&entries, &[], 5, day(15));
        assert_eq!(items[0].name, "Oats");
        assert_eq!(items[0].times_logged, 10);
        assert_eq!(items[1].name, "Rice");
    }

    #[test]
    fn test_recency_decay_downranks_stale_food() {
        // 3x logged 14 days ago: 3 * (1 - 14*0.07) = 0.06
        // 1x logged today: 1.0
        let mut entries = vec![entry("Old", 100.0, day(1)); 3];
        entries.push(entry("Fresh", 100.0, day(15)));
        let items = compute_quick_relog_items(&entries, &[], 5, day(15));
        assert_eq!(items[0].name, "Fresh");
        assert_eq!(items[1].name, "Old");
    }

    #[test]
    fn test_stale_foods_score_zero_but_remain() {
        let entries = vec![entry("Ancient", 100.0, day(1))];
        let items = compute_quick_relog_items(&entries, &[], 5, day(30));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Ancient");
    }

    #[test]
    fn test_case_insensitive_grouping_uses_first_name() {
        let entries = vec![
            entry("chicken breast", 160.0, day(14)),
            entry("Chicken Breast", 165.0, day(15)),
        ];
        let items = compute_quick_relog_items(&entries, &[], 5, day(15));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "chicken breast");
        assert_eq!(items[0].times_logged, 2);
        assert_eq!(items[0].last_logged, Some(day(15)));
        // Representative macros come from the higher-calorie variant
        assert_eq!(items[0].calories, 165.0);
    }

    #[test]
    fn test_representative_is_highest_calorie_not_average() {
        let entries = vec![
            entry("Pasta", 300.0, day(15)),
            entry("pasta", 700.0, day(15)),
            entry("PASTA", 500.0, day(15)),
        ];
        let items = compute_quick_relog_items(&entries, &[], 5, day(15));
        assert_eq!(items[0].calories, 700.0);
    }

    #[test]
    fn test_nan_calories_treated_as_zero_not_filtered() {
        let entries = vec![entry("Mystery", f64::NAN, day(15))];
        let items = compute_quick_relog_items(&entries, &[], 5, day(15));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].calories, 0.0);
    }

    #[test]
    fn test_favorites_backfill_when_history_thin() {
        let entries = vec![entry("Eggs", 150.0, day(15))];
        let favorites = vec![favorite("Yogurt", 120.0), favorite("Banana", 90.0)];
        let items = compute_quick_relog_items(&entries, &favorites, 5, day(15));
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Eggs");
        assert_eq!(items[1].name, "Yogurt");
        assert_eq!(items[1].times_logged, 0);
        assert_eq!(items[1].last_logged, None);
        assert_eq!(items[2].name, "Banana");
    }

    #[test]
    fn test_favorites_skip_names_already_ranked() {
        let entries = vec![entry("Yogurt", 150.0, day(15))];
        let favorites = vec![favorite("YOGURT", 120.0), favorite("Banana", 90.0)];
        let items = compute_quick_relog_items(&entries, &favorites, 5, day(15));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Yogurt");
        assert_eq!(items[1].name, "Banana");
    }

    #[test]
    fn test_favorites_not_added_with_three_behavioral_items() {
        let entries = vec![
            entry("A", 1.0, day(15)),
            entry("B", 2.0, day(15)),
            entry("C", 3.0, day(15)),
        ];
        let favorites = vec![favorite("D", 4.0)];
        let items = compute_quick_relog_items(&entries, &favorites, 10, day(15));
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.name != "D"));
    }

    #[test]
    fn test_backfill_respects_max_items() {
        let favorites = vec![favorite("A", 1.0), favorite("B", 2.0), favorite("C", 3.0)];
        let items = compute_quick_relog_items(&[], &favorites, 2, day(15));
        assert_eq!(items.len(), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: output never exceeds max_items, names are non-empty,
        /// calories are non-negative
        #[test]
        fn prop_output_invariants(
            names in prop::collection::vec("[a-z ]{0,8}", 0..20),
            max_items in 0usize..8
        ) {
            let entries: Vec<NutritionEntry> = names
                .iter()
                .map(|n| entry(n, 100.0, day(10)))
                .collect();
            let favorites = vec![favorite("fallback one", -5.0), favorite("fallback two", f64::NAN)];
            let items = compute_quick_relog_items(&entries, &favorites, max_items, day(15));
            prop_assert!(items.len() <= max_items);
            prop_assert!(items.iter().all(|i| !i.name.trim().is_empty()));
            prop_assert!(items.iter().all(|i| i.calories >= 0.0 && i.calories.is_finite()));
        }

        /// Property: identical inputs yield identical output
        #[test]
        fn prop_deterministic(
            names in prop::collection::vec("[a-z]{1,5}", 1..15)
        ) {
            let entries: Vec<NutritionEntry> = names
                .iter()
                .map(|n| entry(n, 50.0, day(12)))
                .collect();
            let a = compute_quick_relog_items(&entries, &[], 5, day(15));
            let b = compute_quick_relog_items(&entries, &[], 5, day(15));
            prop_assert_eq!(a, b);
        }
    }
}
