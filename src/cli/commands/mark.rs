//! Done/undone command implementations.
//!
//! Marking goes through the store's toggle so the cached streak is always
//! recomputed from the updated completion log.

use chrono::NaiveDate;
use colored::Colorize;

use crate::cli::args::{MarkArgs, OutputFormat};
use crate::core::parse_date_arg;
use crate::error::RitmoError;
use crate::output::to_json;
use crate::storage::HabitStore;

use super::resolve_habit;

/// Execute the done command.
///
/// # Errors
///
/// Returns an error if the habit or date cannot be resolved or the store
/// cannot be written.
pub fn done(
    store: &mut dyn HabitStore,
    args: &MarkArgs,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let habit = resolve_habit(&*store, &args.habit)?;
    let date = resolve_date(args, today)?;

    if habit.is_completed_on(date) {
        return match format {
            OutputFormat::Json => to_json(&habit),
            OutputFormat::Pretty => Ok(format!(
                "{} was already completed on {date}",
                habit.name.bold()
            )),
        };
    }

    let updated = store.toggle(&habit.id, date, today)?;

    match format {
        OutputFormat::Json => to_json(&updated),
        OutputFormat::Pretty => {
            let streak = match updated.streak {
                0 => String::new(),
                1 => format!("  {}", "1 day streak".yellow()),
                n => format!("  {}", format!("{n} day streak").yellow()),
            };
            Ok(format!(
                "{} {} ({date}){streak}",
                "Completed:".green().bold(),
                updated.name
            ))
        }
    }
}

/// Execute the undone command.
///
/// # Errors
///
/// Returns an error if the habit or date cannot be resolved or the store
/// cannot be written.
pub fn undone(
    store: &mut dyn HabitStore,
    args: &MarkArgs,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let habit = resolve_habit(&*store, &args.habit)?;
    let date = resolve_date(args, today)?;

    if !habit.is_completed_on(date) {
        return match format {
            OutputFormat::Json => to_json(&habit),
            OutputFormat::Pretty => Ok(format!(
                "{} was not completed on {date}",
                habit.name.bold()
            )),
        };
    }

    let updated = store.toggle(&habit.id, date, today)?;

    match format {
        OutputFormat::Json => to_json(&updated),
        OutputFormat::Pretty => Ok(format!(
            "{} {} ({date}) - streak now {}",
            "Un-marked:".red().bold(),
            updated.name,
            updated.streak
        )),
    }
}

fn resolve_date(args: &MarkArgs, today: NaiveDate) -> Result<NaiveDate, RitmoError> {
    match &args.date {
        Some(raw) => parse_date_arg(raw, today),
        None => Ok(today),
    }
}
