use chrono::{NaiveDate, Weekday};
use colored::Colorize;

use crate::core::Habit;
use crate::engine::{longest_streak, render_progress_bar};

/// Format a list of habits as a pretty table
pub fn format_habits_pretty(habits: &[Habit], title: &str, today: NaiveDate) -> String {
    if habits.is_empty() {
        return format!("{title} (0 habits)\n  No habits yet - try 'ritmo add'");
    }

    let mut output = format!("{} ({} habits)\n", title, habits.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for habit in habits {
        let status_icon = if habit.is_completed_on(today) {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let mut line = format!("{} {}", status_icon, habit.name.bold());
        line.push_str(&format!("  {}", format!("#{}", habit.category).cyan()));

        if habit.streak > 0 {
            line.push_str(&format!("  {}", format!("{}d", habit.streak).yellow()));
        }

        line.push_str(&format!(
            "  {}",
            format!("{} x{}", habit.goal.frequency, habit.goal.target).dimmed()
        ));

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single habit as pretty output
pub fn format_habit_pretty(habit: &Habit, today: NaiveDate, week_starts_on: Weekday) -> String {
    let status_icon = if habit.is_completed_on(today) {
        "[x]".green()
    } else {
        "[ ]".white()
    };

    let mut output = format!("{} {}\n", status_icon, habit.name.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), habit.id));
    output.push_str(&format!("  {}: {}\n", "Category".dimmed(), habit.category));

    if !habit.description.is_empty() {
        output.push_str(&format!(
            "  {}: {}\n",
            "Description".dimmed(),
            habit.description
        ));
    }

    output.push_str(&format!(
        "  {}: {} x{}\n",
        "Goal".dimmed(),
        habit.goal.frequency,
        habit.goal.target
    ));

    let done = habit.completions_this_period(today, week_starts_on);
    output.push_str(&format!(
        "  {}: {}\n",
        "This period".dimmed(),
        render_progress_bar(done, habit.goal.target as usize, 20)
    ));

    output.push_str(&format!(
        "  {}: {} days\n",
        "Streak".dimmed(),
        habit.streak
    ));
    output.push_str(&format!(
        "  {}: {} days\n",
        "Longest streak".dimmed(),
        longest_streak(&habit.completed_dates)
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Completions".dimmed(),
        habit.total_completions()
    ));

    if let Some(last) = habit.last_completed() {
        output.push_str(&format!("  {}: {}\n", "Last completed".dimmed(), last));
    }

    output.push_str(&format!(
        "  {}: {}\n",
        "Created".dimmed(),
        habit.created_at.format("%Y-%m-%d")
    ));

    output
}
