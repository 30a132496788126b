//! ANSI color helper utilities for terminal output.

use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";

/// Heatmap palette indexed by cell level: grey for "nothing recorded",
/// then five greens from lightest to darkest.
pub const LEVEL_PALETTE: [Colour; 6] = [
    Colour::RGB(229, 231, 235),
    Colour::RGB(187, 247, 208),
    Colour::RGB(134, 239, 172),
    Colour::RGB(74, 222, 128),
    Colour::RGB(34, 197, 94),
    Colour::RGB(22, 163, 74),
];

pub fn level_colour(level: u8) -> Colour {
    LEVEL_PALETTE[usize::from(level).min(LEVEL_PALETTE.len() - 1)]
}
