//! Derived, never-persisted views used to render the heatmap.

use chrono::NaiveDate;
use serde::Serialize;

pub const WEEKS: usize = 52;
pub const DAYS_PER_WEEK: usize = 7;

/// A single day of the heatmap. `level == 0` means nothing was recorded,
/// which is not the same as a real rating of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub level: u8,
}

impl CalendarCell {
    pub fn is_empty(&self) -> bool {
        self.level == 0
    }
}

pub type Week = [CalendarCell; DAYS_PER_WEEK];

/// Fixed 52 × 7 grid, oldest week first, oldest day first within a week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    weeks: [Week; WEEKS],
}

impl CalendarGrid {
    pub fn from_weeks(weeks: [Week; WEEKS]) -> Self {
        Self { weeks }
    }

    pub fn weeks(&self) -> &[Week; WEEKS] {
        &self.weeks
    }

    /// Cells in chronological order.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flat_map(|w| w.iter())
    }

    /// Row `day` across every week, as drawn in a terminal.
    pub fn row(&self, day: usize) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().map(move |w| &w[day])
    }

    pub fn first_date(&self) -> NaiveDate {
        self.weeks[0][0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.weeks[WEEKS - 1][DAYS_PER_WEEK - 1].date
    }

    pub fn filled(&self) -> usize {
        self.cells().filter(|c| !c.is_empty()).count()
    }
}
