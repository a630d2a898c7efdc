//! Command implementations for ritmo.
//!
//! This module contains the implementation of all CLI commands. Commands
//! take the habit store and an explicit `today`, and return the rendered
//! output as a string - main() only prints.

mod achievements;
mod add;
mod challenges;
mod mark;
mod pick;
mod quote;
mod shell;
mod stats;

pub use achievements::achievements;
pub use add::add;
pub use challenges::challenges;
pub use mark::{done, undone};
pub use pick::pick;
pub use quote::quote;
pub use shell::completions;
pub use stats::stats;

use chrono::{NaiveDate, Weekday};
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{EditArgs, ListArgs, OutputFormat};
use crate::core::{Category, Frequency, Goal, Habit};
use crate::engine::Summary;
use crate::error::RitmoError;
use crate::output::{format_habit, format_habits, to_json};
use crate::storage::HabitStore;

/// Resolve a habit selector to a stored habit.
///
/// Tries, in order: exact id, exact name (case-insensitive), unique name
/// fragment. An ambiguous fragment lists the candidates.
///
/// # Errors
///
/// Returns `NotFound` when nothing matches and `Validation` when the
/// fragment matches more than one habit.
pub fn resolve_habit(store: &dyn HabitStore, query: &str) -> Result<Habit, RitmoError> {
    if let Ok(habit) = store.get(query) {
        return Ok(habit);
    }

    let habits = store.list()?;
    let query_lower = query.to_lowercase();

    if let Some(habit) = habits
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(query))
    {
        return Ok(habit.clone());
    }

    let matches: Vec<&Habit> = habits
        .iter()
        .filter(|h| h.name.to_lowercase().contains(&query_lower))
        .collect();

    match matches.as_slice() {
        [] => Err(RitmoError::NotFound(format!("habit '{query}'"))),
        [habit] => Ok((*habit).clone()),
        many => Err(RitmoError::Validation(format!(
            "'{query}' matches {} habits: {}",
            many.len(),
            many.iter()
                .map(|h| h.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or output formatting fails.
pub fn list(
    store: &dyn HabitStore,
    args: &ListArgs,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let mut habits = store.list()?;

    let title = if let Some(raw) = &args.category {
        let category: Category = raw.parse()?;
        habits.retain(|h| h.category == category);
        format!("{category} habits")
    } else {
        "All habits".to_string()
    };

    format_habits(&habits, &title, today, format)
}

/// Execute the today command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or output formatting fails.
pub fn today(
    store: &dyn HabitStore,
    today: NaiveDate,
    week_starts_on: Weekday,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let habits = store.list()?;
    let summary = Summary::calculate(&habits, today, week_starts_on);

    match format {
        OutputFormat::Json => to_json(&json!({
            "date": today,
            "summary": summary,
            "items": habits,
        })),
        OutputFormat::Pretty => {
            let mut output = format!(
                "{} - {}/{} done · week {:.0}%\n\n",
                today.format("%A, %b %d").to_string().bold(),
                summary.completed_today,
                summary.total_habits,
                summary.weekly_completion
            );
            output.push_str(&format_habits(&habits, "Today", today, format)?);
            Ok(output)
        }
    }
}

/// Execute the show command.
///
/// # Errors
///
/// Returns `NotFound` if the selector matches nothing.
pub fn show(
    store: &dyn HabitStore,
    query: &str,
    today: NaiveDate,
    week_starts_on: Weekday,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let habit = resolve_habit(store, query)?;
    format_habit(&habit, today, week_starts_on, format)
}

/// Execute the remove command.
///
/// # Errors
///
/// Returns `NotFound` if the selector matches nothing.
pub fn remove(
    store: &mut dyn HabitStore,
    query: &str,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let habit = resolve_habit(store, query)?;
    let removed = store.remove(&habit.id)?;

    match format {
        OutputFormat::Json => to_json(&removed),
        OutputFormat::Pretty => Ok(format!(
            "{} {} ({} completions logged)",
            "Removed:".red().bold(),
            removed.name,
            removed.total_completions()
        )),
    }
}

/// Execute the edit command.
///
/// # Errors
///
/// Returns `Validation` for rejected field values and `NotFound` if the
/// selector matches nothing.
pub fn edit(
    store: &mut dyn HabitStore,
    args: &EditArgs,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let mut habit = resolve_habit(store, &args.habit)?;

    if let Some(name) = &args.name {
        if name.trim().is_empty() {
            return Err(RitmoError::Validation(
                "habit name must not be empty".to_string(),
            ));
        }
        habit.name = name.trim().to_string();
    }
    if let Some(description) = &args.description {
        habit.description = description.trim().to_string();
    }
    if let Some(category) = &args.category {
        habit.category = category.parse()?;
    }

    let frequency = match &args.frequency {
        Some(raw) => raw.parse::<Frequency>()?,
        None => habit.goal.frequency,
    };
    let target = args.target.unwrap_or(habit.goal.target);
    habit.goal = Goal::new(frequency, target)?;

    store.update(&habit)?;

    match format {
        OutputFormat::Json => to_json(&habit),
        OutputFormat::Pretty => Ok(format!("{} {}", "Updated:".green().bold(), habit.name)),
    }
}
