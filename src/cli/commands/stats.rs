//! Statistics command implementation.
//!
//! Handles the stats subcommands for habit analytics.

use chrono::{NaiveDate, Weekday};
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, StatsCommands};
use crate::core::Habit;
use crate::engine::{
    generate_insights, render_bar_chart, render_heatmap, render_sparkline, Analytics, Insight,
    Summary,
};
use crate::error::RitmoError;
use crate::output::to_json;
use crate::storage::HabitStore;

/// Execute stats subcommands.
///
/// # Errors
///
/// Returns an error if the store cannot be read or output formatting fails.
pub fn stats(
    store: &dyn HabitStore,
    cmd: Option<StatsCommands>,
    today: NaiveDate,
    week_starts_on: Weekday,
    heatmap_weeks: usize,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let habits = store.list()?;
    let summary = Summary::calculate(&habits, today, week_starts_on);
    let analytics = Analytics::calculate(&habits, today, week_starts_on);

    match cmd {
        None | Some(StatsCommands::Dashboard) => {
            render_dashboard(&habits, &summary, &analytics, today, format)
        }
        Some(StatsCommands::Summary) => render_summary(&summary, format),
        Some(StatsCommands::Insights) => render_insights(&summary, &analytics, format),
        Some(StatsCommands::Trends) => render_trends(&analytics, format),
        Some(StatsCommands::Categories) => render_categories(&analytics, format),
        Some(StatsCommands::Heatmap { weeks }) => {
            let weeks = weeks.unwrap_or(heatmap_weeks);
            render_heatmap_cmd(&habits, today, weeks, format)
        }
    }
}

/// Render the full dashboard.
fn render_dashboard(
    habits: &[Habit],
    summary: &Summary,
    analytics: &Analytics,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "summary": summary,
            "analytics": analytics,
        })),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push("╔════════════════════════════════════════════════════════════════╗".to_string());
            output.push("║                    📊 HABIT DASHBOARD                          ║".to_string());
            output.push("╚════════════════════════════════════════════════════════════════╝".to_string());
            output.push(String::new());

            // Overview section
            output.push("📋 TODAY".bold().to_string());
            output.push("─".repeat(50));
            output.push(format!(
                "  Habits: {}  Done today: {}  Perfect day: {}",
                summary.total_habits,
                summary.completed_today.to_string().green(),
                if summary.total_habits > 0 && summary.completed_today == summary.total_habits {
                    "yes".green().to_string()
                } else {
                    "not yet".dimmed().to_string()
                }
            ));
            output.push(String::new());

            // Completion section
            output.push("✅ COMPLETION".bold().to_string());
            output.push("─".repeat(50));
            output.push(format!(
                "  This week: {:.0}%  This month: {:.0}%  All time: {:.0}%",
                summary.weekly_completion,
                summary.monthly_completion,
                analytics.completion_rate
            ));
            output.push(format!(
                "  Total completions: {}",
                analytics.total_completions
            ));
            output.push(String::new());

            // Streak section
            output.push("🔥 STREAKS".bold().to_string());
            output.push("─".repeat(50));
            let best = if summary.best_streak > 0 {
                format!("{} days", summary.best_streak).green().to_string()
            } else {
                "0 days".dimmed().to_string()
            };
            output.push(format!(
                "  Best: {best}  Combined: {} days  Average: {:.1} days",
                summary.sum_of_streaks, analytics.average_streak
            ));
            output.push(String::new());

            // Last 7 days sparkline
            let counts: Vec<usize> = analytics
                .weekly_trend
                .iter()
                .map(|d| d.completions)
                .collect();
            output.push("📈 LAST 7 DAYS".bold().to_string());
            output.push("─".repeat(50));
            output.push(format!("  {}", render_sparkline(&counts)));
            output.push(String::new());

            // Top habits
            if !analytics.habit_performance.is_empty() {
                output.push("🏆 TOP HABITS".bold().to_string());
                output.push("─".repeat(50));
                for perf in analytics.habit_performance.iter().take(3) {
                    output.push(format!(
                        "  {}  {:.0}%  {}",
                        perf.name.clone().bold(),
                        perf.rate,
                        format!("{}d streak", perf.streak).yellow()
                    ));
                }
                output.push(String::new());
            }

            // Insights
            let insights = generate_insights(summary, analytics);
            if !insights.is_empty() {
                output.push("💡 INSIGHTS".bold().to_string());
                output.push("─".repeat(50));
                for insight in &insights {
                    output.push(format_insight(insight));
                }
                output.push(String::new());
            }

            if habits.is_empty() {
                output.push(format!(
                    "  {} {}",
                    "No habits yet.".dimmed(),
                    format!("Today is {} - a good day to start.", today.format("%A")).dimmed()
                ));
            }

            Ok(output.join("\n"))
        }
    }
}

/// Render the compact summary.
fn render_summary(summary: &Summary, format: OutputFormat) -> Result<String, RitmoError> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Pretty => Ok(format!(
            "{} habits · {} done today · week {:.0}% · month {:.0}% · best streak {}d · combined {}d",
            summary.total_habits,
            summary.completed_today,
            summary.weekly_completion,
            summary.monthly_completion,
            summary.best_streak,
            summary.sum_of_streaks
        )),
    }
}

/// Render insights.
fn render_insights(
    summary: &Summary,
    analytics: &Analytics,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    let insights = generate_insights(summary, analytics);

    match format {
        OutputFormat::Json => to_json(&insights),
        OutputFormat::Pretty => {
            if insights.is_empty() {
                return Ok("No insights yet - log a few completions first.".to_string());
            }

            let mut output = vec!["💡 INSIGHTS".bold().to_string(), "─".repeat(50)];
            for insight in &insights {
                output.push(format_insight(insight));
            }
            Ok(output.join("\n"))
        }
    }
}

fn format_insight(insight: &Insight) -> String {
    let mut line = format!(
        "  {} [{}] {}",
        insight.level.icon(),
        insight.category.clone().cyan(),
        insight.message
    );
    if let Some(suggestion) = &insight.suggestion {
        line.push_str(&format!("\n      → {}", suggestion.clone().dimmed()));
    }
    line
}

/// Render daily and weekly trends.
fn render_trends(analytics: &Analytics, format: OutputFormat) -> Result<String, RitmoError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "weekly_trend": analytics.weekly_trend,
            "monthly_trend": analytics.monthly_trend,
        })),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push("📈 LAST 7 DAYS".bold().to_string());
            output.push("─".repeat(50));
            let daily: Vec<(String, usize)> = analytics
                .weekly_trend
                .iter()
                .map(|d| (d.date.format("%a").to_string(), d.completions))
                .collect();
            output.push(render_bar_chart(&daily, 3, 20));
            output.push(String::new());

            output.push("📅 LAST 4 WEEKS".bold().to_string());
            output.push("─".repeat(50));
            let weekly: Vec<(String, usize)> = analytics
                .monthly_trend
                .iter()
                .map(|w| (w.start.format("%b %d").to_string(), w.completions))
                .collect();
            output.push(render_bar_chart(&weekly, 6, 20));

            Ok(output.join("\n"))
        }
    }
}

/// Render the per-category breakdown.
fn render_categories(analytics: &Analytics, format: OutputFormat) -> Result<String, RitmoError> {
    match format {
        OutputFormat::Json => to_json(&analytics.categories),
        OutputFormat::Pretty => {
            let mut output = vec!["🗂  CATEGORIES".bold().to_string(), "─".repeat(50)];

            let data: Vec<(String, usize)> = analytics
                .categories
                .iter()
                .map(|(category, stats)| (category.to_string(), stats.completions))
                .collect();
            output.push(render_bar_chart(&data, 12, 20));
            output.push(String::new());

            for (category, stats) in analytics.categories.iter() {
                output.push(format!(
                    "  {:12} {} habits · {} completions · {:.0}%",
                    category.to_string(),
                    stats.count,
                    stats.completions,
                    stats.percentage
                ));
            }

            Ok(output.join("\n"))
        }
    }
}

/// Render the completion heatmap.
fn render_heatmap_cmd(
    habits: &[Habit],
    today: NaiveDate,
    weeks: usize,
    format: OutputFormat,
) -> Result<String, RitmoError> {
    match format {
        OutputFormat::Json => {
            // The heatmap is a pretty-only view; JSON callers get the trend
            // series instead.
            to_json(&json!({
                "weeks": weeks,
                "note": "use 'stats trends' for machine-readable series",
            }))
        }
        OutputFormat::Pretty => {
            let mut output = vec![
                format!("🗓  COMPLETIONS - LAST {weeks} WEEKS").bold().to_string(),
                "─".repeat(50),
            ];
            output.push(render_heatmap(habits, today, weeks));
            Ok(output.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Goal};
    use crate::storage::MockHabitStore;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_data() -> MockHabitStore {
        let mut store = MockHabitStore::new();
        store.expect_list().returning(|| {
            let created = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
            let mut habit =
                Habit::new("Run", "", Category::Fitness, Goal::default(), created).unwrap();
            habit.mark(date(2024, 1, 2));
            habit.mark(date(2024, 1, 3));
            Ok(vec![habit])
        });
        store
    }

    #[test]
    fn test_dashboard_renders_sections() {
        let store = store_with_data();
        let output = stats(
            &store,
            None,
            date(2024, 1, 3),
            Weekday::Sun,
            8,
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(output.contains("HABIT DASHBOARD"));
        assert!(output.contains("STREAKS"));
        assert!(output.contains("LAST 7 DAYS"));
    }

    #[test]
    fn test_summary_json_exposes_both_streak_fields() {
        let store = store_with_data();
        let output = stats(
            &store,
            Some(StatsCommands::Summary),
            date(2024, 1, 3),
            Weekday::Sun,
            8,
            OutputFormat::Json,
        )
        .unwrap();
        assert!(output.contains("sum_of_streaks"));
        assert!(output.contains("best_streak"));
    }

    #[test]
    fn test_categories_lists_all_four() {
        let store = store_with_data();
        let output = stats(
            &store,
            Some(StatsCommands::Categories),
            date(2024, 1, 3),
            Weekday::Sun,
            8,
            OutputFormat::Pretty,
        )
        .unwrap();
        for name in ["health", "fitness", "productivity", "personal"] {
            assert!(output.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_heatmap_respects_weeks_flag() {
        let store = store_with_data();
        let output = stats(
            &store,
            Some(StatsCommands::Heatmap { weeks: Some(2) }),
            date(2024, 1, 3),
            Weekday::Sun,
            8,
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(output.contains("LAST 2 WEEKS"));
    }
}
