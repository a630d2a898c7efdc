//! Achievements command implementation.

use chrono::NaiveDate;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::engine::render_progress_bar;
use crate::error::RitmoError;
use crate::features::achievements::{evaluate, level_for_points, total_points, Rarity};
use crate::output::to_json;
use crate::storage::HabitStore;

/// Execute the achievements command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or output formatting fails.
pub fn achievements(
    store: &dyn HabitStore,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let habits = store.list()?;
    let statuses = evaluate(&habits, today);
    let points = total_points(&statuses);
    let level = level_for_points(points);

    match format {
        OutputFormat::Json => to_json(&json!({
            "points": points,
            "level": level,
            "achievements": statuses,
        })),
        OutputFormat::Pretty => {
            let unlocked = statuses.iter().filter(|s| s.unlocked).count();

            let mut output = Vec::new();
            output.push(format!(
                "{}  level {}  ·  {} points  ·  {}/{} unlocked",
                "🏆 ACHIEVEMENTS".bold(),
                level,
                points,
                unlocked,
                statuses.len()
            ));
            output.push("─".repeat(60));

            for status in &statuses {
                let rarity = match status.achievement.rarity {
                    Rarity::Common => status.achievement.rarity.to_string().normal(),
                    Rarity::Rare => status.achievement.rarity.to_string().blue(),
                    Rarity::Epic => status.achievement.rarity.to_string().purple(),
                    Rarity::Legendary => status.achievement.rarity.to_string().yellow(),
                };

                if status.unlocked {
                    output.push(format!(
                        "  {} {} [{}] {}  {}",
                        status.achievement.icon,
                        status.achievement.title.bold(),
                        rarity,
                        "✓ unlocked".green(),
                        format!("+{} pts", status.achievement.points).dimmed()
                    ));
                } else {
                    output.push(format!(
                        "  {} {} [{}]  {} {}",
                        status.achievement.icon,
                        status.achievement.title.dimmed(),
                        rarity,
                        render_progress_bar(status.current, status.target, 12),
                        format!("({}/{})", status.current, status.target).dimmed()
                    ));
                }
                output.push(format!(
                    "      {}",
                    status.achievement.description.dimmed()
                ));
            }

            Ok(output.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Goal, Habit};
    use crate::storage::MockHabitStore;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_renders_unlocked_and_locked() {
        let mut store = MockHabitStore::new();
        store.expect_list().returning(|| {
            let created = Utc.with_ymd_and_hms(2023, 12, 1, 8, 0, 0).unwrap();
            let mut habit =
                Habit::new("Run", "", Category::Fitness, Goal::default(), created).unwrap();
            let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
            for offset in 0..3 {
                habit.mark(today - Duration::days(offset));
            }
            Ok(vec![habit])
        });

        let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let output = achievements(&store, today, OutputFormat::Pretty).unwrap();
        assert!(output.contains("ACHIEVEMENTS"));
        assert!(output.contains("✓ unlocked"));
        assert!(output.contains("First Steps"));
    }

    #[test]
    fn test_json_includes_points_and_level() {
        let mut store = MockHabitStore::new();
        store.expect_list().returning(|| Ok(vec![]));

        let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let output = achievements(&store, today, OutputFormat::Json).unwrap();
        assert!(output.contains("\"points\": 0"));
        assert!(output.contains("\"level\": 1"));
    }
}
