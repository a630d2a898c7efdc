//! Challenges command implementation.

use chrono::{NaiveDate, Weekday};
use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::engine::render_progress_bar;
use crate::error::RitmoError;
use crate::features::challenges::{evaluate, ChallengeKind, ChallengeProgress, Difficulty};
use crate::output::to_json;
use crate::storage::HabitStore;

/// Execute the challenges command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or output formatting fails.
pub fn challenges(
    store: &dyn HabitStore,
    today: NaiveDate,
    week_starts_on: Weekday,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let habits = store.list()?;
    let progress = evaluate(&habits, today, week_starts_on);

    match format {
        OutputFormat::Json => to_json(&progress),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push("🎯 THIS WEEK".bold().to_string());
            output.push("─".repeat(60));
            for item in progress.iter().filter(|p| p.challenge.kind == ChallengeKind::Weekly) {
                output.push(format_challenge(item));
            }
            output.push(String::new());

            output.push("📆 THIS MONTH".bold().to_string());
            output.push("─".repeat(60));
            for item in progress.iter().filter(|p| p.challenge.kind == ChallengeKind::Monthly) {
                output.push(format_challenge(item));
            }

            Ok(output.join("\n"))
        }
    }
}

fn format_challenge(item: &ChallengeProgress) -> String {
    let difficulty = match item.challenge.difficulty {
        Difficulty::Easy => item.challenge.difficulty.to_string().green(),
        Difficulty::Medium => item.challenge.difficulty.to_string().yellow(),
        Difficulty::Hard => item.challenge.difficulty.to_string().red(),
    };

    let status = if item.completed {
        format!("{} +{} pts", "✓ completed".green(), item.challenge.points)
    } else {
        format!(
            "{} {}",
            render_progress_bar(item.current as usize, item.target as usize, 12),
            format!("{} days left", item.days_left).dimmed()
        )
    };

    format!(
        "  {} {} [{}]  {}\n      {}",
        item.challenge.icon,
        item.challenge.title.bold(),
        difficulty,
        status,
        item.challenge.description.dimmed()
    )
}
