//! Aggregate habit summary.
//!
//! The at-a-glance numbers shown at the top of the dashboard: totals,
//! today's progress, and completion rates for the current calendar week
//! and month. All values are derived fresh from the habit collection and
//! an explicit reference day; nothing here touches the clock or mutates
//! its input.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::core::{days_in_month, week_start, Habit};
use crate::engine::streak::current_streak;

/// Recomputed-on-demand snapshot of the habit collection.
///
/// The source computed a single ambiguous "current streak" number; this
/// exposes the sum (momentum) and the maximum (personal best) as two
/// separately named fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of habits tracked.
    pub total_habits: usize,
    /// Habits completed on the reference day.
    pub completed_today: usize,
    /// Percentage of possible completions logged this calendar week.
    pub weekly_completion: f64,
    /// Percentage of possible completions logged this calendar month.
    pub monthly_completion: f64,
    /// Sum of every habit's current streak.
    pub sum_of_streaks: u32,
    /// Longest current streak across habits.
    pub best_streak: u32,
}

impl Summary {
    /// Calculate the summary for a snapshot of habits.
    ///
    /// Percentages are unrounded; the output layer decides precision. An
    /// empty collection yields zeros everywhere, never NaN.
    #[must_use]
    pub fn calculate(habits: &[Habit], today: NaiveDate, week_starts_on: Weekday) -> Self {
        let completed_today = habits.iter().filter(|h| h.is_completed_on(today)).count();

        let streaks: Vec<u32> = habits
            .iter()
            .map(|h| current_streak(&h.completed_dates, today))
            .collect();

        Self {
            total_habits: habits.len(),
            completed_today,
            weekly_completion: weekly_completion(habits, today, week_starts_on),
            monthly_completion: monthly_completion(habits, today),
            sum_of_streaks: streaks.iter().sum(),
            best_streak: streaks.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Completions in the current calendar week over `habits * 7` slots.
fn weekly_completion(habits: &[Habit], today: NaiveDate, week_starts_on: Weekday) -> f64 {
    if habits.is_empty() {
        return 0.0;
    }

    let start = week_start(today, week_starts_on);
    let end = start + Duration::days(6);
    let completed: usize = habits
        .iter()
        .map(|h| in_window(h, start, end))
        .sum();

    let possible = habits.len() * 7;
    completed as f64 / possible as f64 * 100.0
}

/// Completions in the current calendar month over `habits * days-in-month`
/// slots, using the month's actual day count.
fn monthly_completion(habits: &[Habit], today: NaiveDate) -> f64 {
    if habits.is_empty() {
        return 0.0;
    }

    let completed: usize = habits
        .iter()
        .map(|h| {
            h.completed_dates
                .iter()
                .filter(|d| d.year() == today.year() && d.month() == today.month())
                .count()
        })
        .sum();

    let possible = habits.len() as i64 * days_in_month(today);
    completed as f64 / possible as f64 * 100.0
}

/// Distinct completion dates within [start, end], duplicates ignored.
fn in_window(habit: &Habit, start: NaiveDate, end: NaiveDate) -> usize {
    let mut dates: Vec<NaiveDate> = habit
        .completed_dates
        .iter()
        .copied()
        .filter(|d| *d >= start && *d <= end)
        .collect();
    dates.dedup();
    dates.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Goal};
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(name: &str, category: Category, dates: &[NaiveDate]) -> Habit {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut habit = Habit::new(name, "", category, Goal::default(), created).unwrap();
        for d in dates {
            habit.mark(*d);
        }
        habit
    }

    #[test]
    fn test_empty_collection_is_all_zeros() {
        let summary = Summary::calculate(&[], date(2024, 1, 3), Weekday::Sun);
        assert_eq!(summary.total_habits, 0);
        assert_eq!(summary.completed_today, 0);
        assert_eq!(summary.weekly_completion, 0.0);
        assert_eq!(summary.monthly_completion, 0.0);
        assert_eq!(summary.sum_of_streaks, 0);
        assert_eq!(summary.best_streak, 0);
    }

    #[test]
    fn test_completed_today_counts_habits_not_dates() {
        let today = date(2024, 1, 3);
        let habits = vec![
            habit("a", Category::Health, &[today]),
            habit("b", Category::Fitness, &[date(2024, 1, 2)]),
        ];
        let summary = Summary::calculate(&habits, today, Weekday::Sun);
        assert_eq!(summary.total_habits, 2);
        assert_eq!(summary.completed_today, 1);
    }

    #[test]
    fn test_sum_and_best_streak_are_distinct() {
        let today = date(2024, 1, 3);
        let habits = vec![
            habit(
                "a",
                Category::Health,
                &[date(2024, 1, 1), date(2024, 1, 2), today],
            ),
            habit("b", Category::Fitness, &[today]),
        ];
        let summary = Summary::calculate(&habits, today, Weekday::Sun);
        assert_eq!(summary.sum_of_streaks, 4);
        assert_eq!(summary.best_streak, 3);
    }

    #[test]
    fn test_weekly_completion_denominator_is_full_week() {
        // Wednesday 2024-01-03; Sunday-start week is Dec 31 .. Jan 6.
        let today = date(2024, 1, 3);
        let habits = vec![habit(
            "a",
            Category::Health,
            &[date(2024, 1, 1), date(2024, 1, 2), today],
        )];
        let summary = Summary::calculate(&habits, today, Weekday::Sun);
        assert!((summary.weekly_completion - 3.0 / 7.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_completion_respects_week_start() {
        // Dec 31 2023 is a Sunday. With Monday-start weeks it belongs to
        // the previous week and stops counting.
        let today = date(2024, 1, 3);
        let habits = vec![habit("a", Category::Health, &[date(2023, 12, 31), today])];

        let sunday = Summary::calculate(&habits, today, Weekday::Sun);
        let monday = Summary::calculate(&habits, today, Weekday::Mon);
        assert!(sunday.weekly_completion > monday.weekly_completion);
    }

    #[test]
    fn test_monthly_completion_uses_actual_day_count() {
        // February 2024 has 29 days.
        let today = date(2024, 2, 10);
        let habits = vec![habit("a", Category::Health, &[date(2024, 2, 1), today])];
        let summary = Summary::calculate(&habits, today, Weekday::Sun);
        assert!((summary.monthly_completion - 2.0 / 29.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent_for_same_input() {
        let today = date(2024, 1, 3);
        let habits = vec![
            habit("a", Category::Health, &[date(2024, 1, 1), today]),
            habit("b", Category::Personal, &[]),
        ];
        let first = Summary::calculate(&habits, today, Weekday::Sun);
        let second = Summary::calculate(&habits, today, Weekday::Sun);
        assert_eq!(first, second);
    }
}
