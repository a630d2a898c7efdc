//! Output formatting for ritmo.
//!
//! This module provides formatters for displaying habit data in various
//! formats. Percentages and ratios are rounded here, at the presentation
//! boundary - the engine always hands over full-precision values.

mod json;
mod pretty;

use chrono::{NaiveDate, Weekday};

use crate::cli::args::OutputFormat;
use crate::core::Habit;
use crate::error::RitmoError;

pub use json::*;
pub use pretty::*;

/// Format habits based on output format
///
/// # Errors
///
/// Returns `RitmoError::Parse` if JSON serialization fails.
pub fn format_habits(
    habits: &[Habit],
    title: &str,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(habits, title, today)),
        OutputFormat::Json => format_habits_json(habits, title),
    }
}

/// Format a single habit based on output format
///
/// # Errors
///
/// Returns `RitmoError::Parse` if JSON serialization fails.
pub fn format_habit(
    habit: &Habit,
    today: NaiveDate,
    week_starts_on: Weekday,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    match format {
        OutputFormat::Pretty => Ok(format_habit_pretty(habit, today, week_starts_on)),
        OutputFormat::Json => format_habit_json(habit),
    }
}
