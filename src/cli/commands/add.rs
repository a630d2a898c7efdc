//! Quick add command implementation.
//!
//! This module implements the `ritmo add` command for natural language
//! habit entry.

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::cli::args::{AddArgs, OutputFormat};
use crate::core::{Category, Frequency, Goal, Habit};
use crate::error::RitmoError;
use crate::features::nlp::parse_habit;
use crate::output::to_json;
use crate::storage::HabitStore;

/// Execute the quick add command.
///
/// # Errors
///
/// Returns an error if parsing fails, a field is rejected, or the store
/// cannot be written.
pub fn add(
    store: &mut dyn HabitStore,
    args: &AddArgs,
    now: DateTime<Utc>,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    // Parse the natural language input
    let mut parsed = parse_habit(&args.text)?;

    // Apply overrides from CLI args
    if let Some(category) = &args.category {
        parsed.category = Some(category.parse::<Category>().map_err(|_| {
            RitmoError::Validation(format!(
                "unknown category '{category}' (expected health, fitness, productivity, or personal)"
            ))
        })?);
    }
    if let Some(frequency) = &args.frequency {
        parsed.frequency = Some(frequency.parse::<Frequency>()?);
    }
    if let Some(target) = args.target {
        parsed.target = Some(target);
    }
    if let Some(description) = &args.description {
        parsed.description = Some(description.clone());
    }

    let goal = Goal::new(
        parsed.frequency.unwrap_or_default(),
        parsed.target.unwrap_or(1),
    )?;
    let habit = Habit::new(
        &parsed.name,
        parsed.description.as_deref().unwrap_or(""),
        parsed.category.unwrap_or(Category::Personal),
        goal,
        now,
    )?;

    // If parse-only mode, just show what would be created
    if args.parse_only {
        return match format {
            OutputFormat::Json => to_json(&habit),
            OutputFormat::Pretty => Ok(format_preview(&habit)),
        };
    }

    store.add(habit.clone())?;

    match format {
        OutputFormat::Json => to_json(&habit),
        OutputFormat::Pretty => Ok(format!(
            "{} {} {} ({} x{})",
            "Added:".green().bold(),
            habit.name,
            format!("#{}", habit.category).cyan(),
            habit.goal.frequency,
            habit.goal.target
        )),
    }
}

fn format_preview(habit: &Habit) -> String {
    let mut output = format!("{}\n", "Would create:".bold());
    output.push_str(&format!("  Name:      {}\n", habit.name));
    output.push_str(&format!("  Category:  {}\n", habit.category));
    output.push_str(&format!(
        "  Goal:      {} x{}\n",
        habit.goal.frequency, habit.goal.target
    ));
    if !habit.description.is_empty() {
        output.push_str(&format!("  Notes:     {}\n", habit.description));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockHabitStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    fn args(text: &str) -> AddArgs {
        AddArgs {
            text: text.to_string(),
            category: None,
            description: None,
            frequency: None,
            target: None,
            parse_only: false,
        }
    }

    #[test]
    fn test_add_saves_parsed_habit() {
        let mut store = MockHabitStore::new();
        store
            .expect_add()
            .withf(|h: &Habit| {
                h.name == "Morning run"
                    && h.category == Category::Fitness
                    && h.goal.target == 1
            })
            .times(1)
            .returning(|_| Ok(()));

        let output = add(
            &mut store,
            &args("Morning run #fitness daily x1"),
            now(),
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(output.contains("Morning run"));
    }

    #[test]
    fn test_flags_override_text() {
        let mut store = MockHabitStore::new();
        store
            .expect_add()
            .withf(|h: &Habit| h.category == Category::Health && h.goal.target == 3)
            .times(1)
            .returning(|_| Ok(()));

        let mut add_args = args("Stretch #personal");
        add_args.category = Some("health".to_string());
        add_args.target = Some(3);
        add(&mut store, &add_args, now(), OutputFormat::Pretty).unwrap();
    }

    #[test]
    fn test_default_category_is_personal() {
        let mut store = MockHabitStore::new();
        store
            .expect_add()
            .withf(|h: &Habit| h.category == Category::Personal)
            .times(1)
            .returning(|_| Ok(()));

        add(&mut store, &args("Journal"), now(), OutputFormat::Pretty).unwrap();
    }

    #[test]
    fn test_zero_target_is_rejected_before_store() {
        let mut store = MockHabitStore::new();
        let mut add_args = args("Journal");
        add_args.target = Some(0);
        assert!(matches!(
            add(&mut store, &add_args, now(), OutputFormat::Pretty),
            Err(RitmoError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_only_does_not_save() {
        let mut store = MockHabitStore::new();
        let mut add_args = args("Journal #personal");
        add_args.parse_only = true;
        let output = add(&mut store, &add_args, now(), OutputFormat::Pretty).unwrap();
        assert!(output.contains("Would create"));
    }
}
