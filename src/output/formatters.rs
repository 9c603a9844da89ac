//! Formatting utilities for terminal output

use crate::core::{Mark, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter tile by its mark
#[must_use]
pub fn mark_tile(letter: char, mark: Mark) -> ColoredString {
    let tile = format!(" {letter} ");
    match mark {
        Mark::Correct => tile.black().on_green().bold(),
        Mark::Present => tile.black().on_yellow().bold(),
        Mark::Absent => tile.white().on_bright_black(),
    }
}

/// Render a scored guess as colored letter tiles
#[must_use]
pub fn verdict_tiles(guess: &Word, verdict: &Verdict) -> String {
    guess
        .text()
        .chars()
        .zip(verdict.marks())
        .map(|(letter, &mark)| mark_tile(letter, mark).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { value / max } else { 0.0 };
    // Cast is safe: values are clamped to [0, width]
    let filled = ((ratio * width as f64).max(0.0) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
