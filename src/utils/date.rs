use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a day argument relative to `reference`:
/// `YYYY-MM-DD`, `today` or `yesterday`.
pub fn parse_day(s: &str, reference: NaiveDate) -> AppResult<NaiveDate> {
    match s.trim().to_ascii_lowercase().as_str() {
        "today" => Ok(reference),
        "yesterday" => reference
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| AppError::invalid("date out of range")),
        other => parse_date(other).ok_or_else(|| {
            AppError::invalid(format!(
                "'{}' is not a valid date (expected YYYY-MM-DD, 'today' or 'yesterday')",
                s
            ))
        }),
    }
}

/// Days before the reference date drawn by the heatmap (52 weeks minus today).
const GRID_SPAN_DAYS: u64 = 363;

/// Reference "today": the `--today` override when given, otherwise the local clock.
pub fn reference_date(arg: Option<&str>) -> AppResult<NaiveDate> {
    let day = match arg {
        Some(raw) => parse_day(raw, today())?,
        None => today(),
    };
    check_grid_reference(day)
}

/// Reject reference dates whose 52-week window would start before the
/// earliest representable date.
pub fn check_grid_reference(day: NaiveDate) -> AppResult<NaiveDate> {
    day.checked_sub_days(Days::new(GRID_SPAN_DAYS))
        .map(|_| day)
        .ok_or_else(|| {
            AppError::invalid(format!("{day} is too early to draw a year ending on it"))
        })
}
