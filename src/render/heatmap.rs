//! Terminal rendering of the dashboard: heatmap, legend and recent entries.
//!
//! Weeks run left to right (oldest first) and weekdays top to bottom, so
//! the bottom-right cell is the reference date.

use crate::core::dashboard::DashboardView;
use crate::models::calendar::{CalendarCell, CalendarGrid, DAYS_PER_WEEK};
use crate::models::entry::Entry;
use crate::models::level::Level;
use crate::utils::colors::level_colour;
use ansi_term::Colour;
use chrono::Datelike;

const CELL_WIDTH: usize = 2;
const LABEL_WIDTH: usize = 4;
const NOTE_WIDTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Coloured squares.
    Color,
    /// `.` for empty days and the level digit otherwise.
    Plain,
}

impl Style {
    pub fn detect(plain: bool) -> Self {
        if plain || std::env::var_os("NO_COLOR").is_some() {
            Style::Plain
        } else {
            Style::Color
        }
    }
}

fn glyph(level: u8, style: Style) -> String {
    match style {
        Style::Color => level_colour(level).paint("■").to_string(),
        Style::Plain if level == 0 => ".".to_string(),
        Style::Plain => level.to_string(),
    }
}

fn cell(c: &CalendarCell, style: Style) -> String {
    format!("{} ", glyph(c.level, style))
}

/// Month abbreviations above the first week that starts in each month.
fn month_header(grid: &CalendarGrid) -> String {
    let width = grid.weeks().len() * CELL_WIDTH;
    let mut line = vec![' '; width];
    let mut next_free = 0;
    let mut prev_month = None;

    for (w, week) in grid.weeks().iter().enumerate() {
        let month = week[0].date.month();
        if prev_month != Some(month) {
            let pos = w * CELL_WIDTH;
            let label = week[0].date.format("%b").to_string();
            if pos >= next_free && pos + label.len() <= width {
                for (i, ch) in label.chars().enumerate() {
                    line[pos + i] = ch;
                }
                next_free = pos + label.len() + 1;
            }
        }
        prev_month = Some(month);
    }

    let body: String = line.into_iter().collect();
    format!("{}{}", " ".repeat(LABEL_WIDTH), body.trim_end())
}

pub fn render_grid(grid: &CalendarGrid, style: Style) -> String {
    let mut out = month_header(grid);
    out.push('\n');

    for day in 0..DAYS_PER_WEEK {
        let label = grid.weeks()[0][day].date.format("%a").to_string();
        out.push_str(&format!("{:<width$}", label, width = LABEL_WIDTH));
        for c in grid.row(day) {
            out.push_str(&cell(c, style));
        }
        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
        out.push('\n');
    }

    out
}

pub fn render_legend(style: Style) -> String {
    let swatches: Vec<String> = std::iter::once(glyph(0, style))
        .chain(Level::all().map(|l| glyph(l.value(), style)))
        .collect();
    format!(
        "{}Less {} More",
        " ".repeat(LABEL_WIDTH),
        swatches.join(" ")
    )
}

fn badge(level: u8, style: Style) -> String {
    match style {
        Style::Color => Colour::Black
            .on(level_colour(level))
            .paint(format!(" {} ", level))
            .to_string(),
        Style::Plain => format!("[{}]", level),
    }
}

pub fn render_entry(entry: &Entry, style: Style) -> String {
    let mut out = format!(
        "{} {} {}",
        badge(entry.level.value(), style),
        entry.date_str(),
        entry.date.format("(%a)")
    );

    if let Some(note) = &entry.note {
        let opts = textwrap::Options::new(NOTE_WIDTH)
            .initial_indent("    ")
            .subsequent_indent("    ");
        for line in textwrap::wrap(note, opts) {
            out.push('\n');
            out.push_str(&line);
        }
    }

    out
}

pub fn render_recent(entries: &[Entry], style: Style) -> String {
    if entries.is_empty() {
        return "No entries yet. Start tracking with `dotlog add`!".to_string();
    }

    entries
        .iter()
        .map(|e| render_entry(e, style))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whole dashboard screen.
pub fn render_dashboard(view: &DashboardView, style: Style) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Your year, {} ({} to {}): {} of 364 days rated\n\n",
        view.owner,
        view.grid.first_date(),
        view.grid.last_date(),
        view.grid.filled()
    ));
    out.push_str(&render_grid(&view.grid, style));
    out.push('\n');
    out.push_str(&render_legend(style));
    out.push_str("\n\nRecent entries\n\n");
    out.push_str(&render_recent(&view.recent, style));
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::{DayIndex, build_grid};
    use crate::models::owner::Owner;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn plain_grid_has_seven_rows_of_fifty_two_cells() {
        let mut index = DayIndex::new();
        index.insert(d("2024-06-15"), Level::new(4).unwrap());
        index.insert(d("2024-06-14"), Level::new(1).unwrap());

        let out = render_grid(&build_grid(&index, d("2024-06-15")), Style::Plain);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 8);

        // 2024-06-15 is a Saturday, so the grid's rows start on Sunday.
        assert!(lines[1].starts_with("Sun "));
        assert!(lines[7].starts_with("Sat "));

        let sat: Vec<&str> = lines[7][LABEL_WIDTH..].split(' ').collect();
        assert_eq!(sat.len(), 52);
        assert_eq!(sat[51], "4");
        let fri: Vec<&str> = lines[6][LABEL_WIDTH..].split(' ').collect();
        assert_eq!(fri[51], "1");
        assert!(fri[..51].iter().all(|c| *c == "."));
    }

    #[test]
    fn month_labels_do_not_overlap() {
        let grid = build_grid(&DayIndex::new(), d("2024-06-15"));
        let header = month_header(&grid);
        assert!(header.contains("Jun"));
        assert!(header.contains("Jan"));
        assert!(!header.contains("JunJul"));
    }

    #[test]
    fn plain_legend_lists_every_level() {
        assert_eq!(render_legend(Style::Plain), "    Less . 1 2 3 4 5 More");
    }

    #[test]
    fn recent_entries_show_badge_and_wrapped_note() {
        let entry = Entry {
            id: 1,
            owner: Owner::parse("alice").unwrap(),
            date: d("2024-06-15"),
            level: Level::new(4).unwrap(),
            note: Some("went hiking ".repeat(10).trim().to_string()),
            created_at: String::new(),
            updated_at: String::new(),
        };

        let out = render_recent(std::slice::from_ref(&entry), Style::Plain);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "[4] 2024-06-15 (Sat)");
        assert!(lines.len() > 2);
        assert!(lines[1..].iter().all(|l| l.starts_with("    ")));
    }

    #[test]
    fn empty_recent_list_invites_first_entry() {
        assert!(render_recent(&[], Style::Plain).starts_with("No entries yet"));
    }
}
