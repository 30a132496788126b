//! Calendar aggregation: pure transforms from entries to heatmap views.
//!
//! Nothing in here performs I/O or keeps state, so every function can be
//! called from any thread as often as needed.

use crate::models::calendar::{CalendarCell, CalendarGrid, DAYS_PER_WEEK, WEEKS};
use crate::models::entry::Entry;
use crate::models::level::Level;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

/// Date → level lookup built from a set of entries.
pub type DayIndex = HashMap<NaiveDate, Level>;

/// Build the per-day lookup. When a date appears more than once the last
/// entry in input order wins.
pub fn build_day_index(entries: &[Entry]) -> DayIndex {
    let mut index = DayIndex::with_capacity(entries.len());
    for entry in entries {
        index.insert(entry.date, entry.level);
    }
    index
}

/// Build the 52 × 7 grid ending on `today`.
///
/// Week `w` (0 = oldest) and day `d` map to
/// `today - ((51 - w) * 7 + (6 - d))` days, so the very last cell is `today`.
///
/// `today` must lie at least 363 days after `NaiveDate::MIN`
/// (see [`crate::utils::date::check_grid_reference`]); earlier cells
/// saturate to `NaiveDate::MIN` otherwise.
pub fn build_grid(index: &DayIndex, today: NaiveDate) -> CalendarGrid {
    let weeks = std::array::from_fn(|w| {
        let week_offset = (WEEKS - 1 - w) as u64;

        std::array::from_fn(|d| {
            let back = week_offset * DAYS_PER_WEEK as u64 + (DAYS_PER_WEEK - 1 - d) as u64;
            let date = today
                .checked_sub_days(Days::new(back))
                .unwrap_or(NaiveDate::MIN);

            CalendarCell {
                date,
                level: index.get(&date).map_or(0, |l| l.value()),
            }
        })
    });

    CalendarGrid::from_weeks(weeks)
}

/// First `limit` entries of an already newest-first sequence.
pub fn recent_entries(entries: &[Entry], limit: usize) -> &[Entry] {
    &entries[..limit.min(entries.len())]
}

/// Aggregate numbers shown by `dotlog stats`.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub average: Option<f64>,
    /// `histogram[i]` counts entries rated `i + 1`.
    pub histogram: [usize; 5],
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Summarize `entries` as seen on `today`.
///
/// The current streak counts consecutive recorded days ending on `today`,
/// or on yesterday while today has not been rated yet.
pub fn summarize(entries: &[Entry], today: NaiveDate) -> Summary {
    let index = build_day_index(entries);

    let mut histogram = [0usize; 5];
    for level in index.values() {
        histogram[usize::from(level.value() - Level::MIN)] += 1;
    }

    let total = index.len();
    let average = if total == 0 {
        None
    } else {
        let sum: u32 = index.values().map(|l| u32::from(l.value())).sum();
        Some(f64::from(sum) / total as f64)
    };

    let streak_from = |start: NaiveDate| -> u32 {
        let mut n = 0;
        let mut day = Some(start);
        while let Some(d) = day.filter(|d| index.contains_key(d)) {
            n += 1;
            day = d.pred_opt();
        }
        n
    };

    let current_streak = if index.contains_key(&today) {
        streak_from(today)
    } else {
        today.pred_opt().map_or(0, streak_from)
    };

    let mut dates: Vec<NaiveDate> = index.keys().copied().collect();
    dates.sort_unstable();

    let mut longest_streak = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for d in dates {
        run = match prev {
            Some(p) if p.succ_opt() == Some(d) => run + 1,
            _ => 1,
        };
        longest_streak = longest_streak.max(run);
        prev = Some(d);
    }

    Summary {
        total,
        average,
        histogram,
        current_streak,
        longest_streak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::owner::Owner;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(id: i64, date: &str, level: i64) -> Entry {
        Entry {
            id,
            owner: Owner::parse("alice").unwrap(),
            date: d(date),
            level: Level::new(level).unwrap(),
            note: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn day_index_last_duplicate_wins() {
        let entries = vec![entry(1, "2024-06-10", 2), entry(2, "2024-06-10", 5)];
        let index = build_day_index(&entries);

        assert_eq!(index.len(), 1);
        assert_eq!(index[&d("2024-06-10")].value(), 5);
    }

    #[test]
    fn day_index_is_idempotent() {
        let entries = vec![
            entry(1, "2024-06-15", 4),
            entry(2, "2024-06-14", 1),
            entry(3, "2024-06-14", 3),
        ];
        assert_eq!(build_day_index(&entries), build_day_index(&entries));
    }

    #[test]
    fn empty_index_still_yields_full_grid() {
        let grid = build_grid(&DayIndex::new(), d("2024-06-15"));

        assert_eq!(grid.weeks().len(), 52);
        assert!(grid.weeks().iter().all(|w| w.len() == 7));
        assert_eq!(grid.cells().count(), 364);
        assert!(grid.cells().all(|c| c.level == 0));
    }

    #[test]
    fn grid_ends_on_reference_date_and_is_contiguous() {
        let today = d("2024-03-01");
        let grid = build_grid(&DayIndex::new(), today);

        assert_eq!(grid.last_date(), today);
        assert_eq!(grid.first_date(), d("2023-03-04"));

        let dates: Vec<NaiveDate> = grid.cells().map(|c| c.date).collect();
        for pair in dates.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn grid_matches_worked_example() {
        let entries = vec![entry(1, "2024-06-15", 4), entry(2, "2024-06-14", 1)];
        let grid = build_grid(&build_day_index(&entries), d("2024-06-15"));

        let last_week = grid.weeks()[51];
        assert_eq!(
            last_week[5],
            CalendarCell {
                date: d("2024-06-14"),
                level: 1
            }
        );
        assert_eq!(
            last_week[6],
            CalendarCell {
                date: d("2024-06-15"),
                level: 4
            }
        );
        assert_eq!(grid.filled(), 2);
        assert_eq!(grid.cells().filter(|c| c.level == 0).count(), 362);
    }

    #[test]
    fn entries_outside_window_are_ignored() {
        let entries = vec![entry(1, "2023-06-16", 5), entry(2, "2023-06-17", 3)];
        let grid = build_grid(&build_day_index(&entries), d("2024-06-15"));

        // 2024-06-15 minus 363 days is 2023-06-18.
        assert_eq!(grid.first_date(), d("2023-06-18"));
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn recent_entries_caps_and_keeps_order() {
        let entries: Vec<Entry> = (0..15)
            .map(|i| {
                let date = d("2024-06-30") - chrono::Duration::days(i);
                entry(i, &date.to_string(), 3)
            })
            .collect();

        let recent = recent_entries(&entries, 10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].date, d("2024-06-30"));
        assert!(recent.windows(2).all(|w| w[0].date > w[1].date));

        assert_eq!(recent_entries(&entries[..3], 10).len(), 3);
        assert!(recent_entries(&entries, 0).is_empty());
    }

    #[test]
    fn summary_counts_levels_and_streaks() {
        let entries = vec![
            entry(1, "2024-06-14", 4),
            entry(2, "2024-06-13", 2),
            entry(3, "2024-06-12", 3),
            entry(4, "2024-06-01", 5),
            entry(5, "2024-05-31", 5),
        ];

        let s = summarize(&entries, d("2024-06-15"));
        assert_eq!(s.total, 5);
        assert_eq!(s.histogram, [0, 1, 1, 1, 2]);
        assert_eq!(s.average, Some(19.0 / 5.0));
        assert_eq!(s.current_streak, 3);
        assert_eq!(s.longest_streak, 3);

        let later = summarize(&entries, d("2024-06-20"));
        assert_eq!(later.current_streak, 0);
    }

    #[test]
    fn summary_of_nothing() {
        let s = summarize(&[], d("2024-06-15"));
        assert_eq!(s.total, 0);
        assert_eq!(s.average, None);
        assert_eq!(s.current_streak, 0);
        assert_eq!(s.longest_streak, 0);
    }
}
