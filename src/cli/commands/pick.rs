//! Interactive picker CLI command.
//!
//! This module implements the `ritmo pick` command for interactive habit
//! selection. Selected habits get today's completion toggled.

use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::args::{OutputFormat, PickArgs};
use crate::error::RitmoError;
use crate::features::interactive::{pick_habits, PickOptions};
use crate::output::to_json;
use crate::storage::HabitStore;

/// Execute the pick command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn pick(
    store: &mut dyn HabitStore,
    args: &PickArgs,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let habits = store.list()?;
    if habits.is_empty() {
        return Ok("No habits yet - try 'ritmo add'".to_string());
    }

    let options = PickOptions {
        multi: args.multi,
        query: args.query.clone(),
        prompt: Some("Toggle habit > ".to_string()),
    };

    let Some(result) = pick_habits(habits, today, options) else {
        return Ok("Nothing selected".to_string());
    };

    if result.aborted || result.selected_ids.is_empty() {
        return Ok("Nothing selected".to_string());
    }

    let mut updated = Vec::new();
    for id in &result.selected_ids {
        updated.push(store.toggle(id, today, today)?);
    }

    match format {
        OutputFormat::Json => to_json(&updated),
        OutputFormat::Pretty => {
            let lines: Vec<String> = updated
                .iter()
                .map(|habit| {
                    if habit.is_completed_on(today) {
                        format!("{} {}", "Completed:".green().bold(), habit.name)
                    } else {
                        format!("{} {}", "Un-marked:".red().bold(), habit.name)
                    }
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
