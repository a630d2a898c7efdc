//! JSON output formatting for ritmo.
//!
//! This module provides functions for formatting habit data as JSON.
//! Values are serialized at full precision; rounding is a pretty-output
//! concern.

use serde::Serialize;
use serde_json::json;

use crate::core::Habit;
use crate::error::RitmoError;

/// Format habits as JSON
///
/// # Errors
///
/// Returns `RitmoError::Parse` if JSON serialization fails.
pub fn format_habits_json(habits: &[Habit], list_name: &str) -> Result<String, RitmoError> {
    let output = json!({
        "list": list_name,
        "count": habits.len(),
        "items": habits
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single habit as JSON
///
/// # Errors
///
/// Returns `RitmoError::Parse` if JSON serialization fails.
pub fn format_habit_json(habit: &Habit) -> Result<String, RitmoError> {
    Ok(serde_json::to_string_pretty(habit)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `RitmoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, RitmoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
