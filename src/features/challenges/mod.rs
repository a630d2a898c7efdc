//! Time-boxed challenges over the current week and month.
//!
//! Challenge windows are derived from the reference day, and progress is
//! computed from the completion log. The original design filled progress
//! with random placeholder values; that was a placeholder, not behavior to
//! keep - identical data always yields identical progress here.

mod catalog;

pub use catalog::{
    Challenge, ChallengeGoal, ChallengeKind, Difficulty, MONTHLY_CHALLENGES, WEEKLY_CHALLENGES,
};

use chrono::{Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::core::{days_in_month, month_start, week_start, Category, Habit};

/// A challenge with its evaluated standing for the current window.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeProgress {
    #[serde(flatten)]
    pub challenge: Challenge,
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
    /// Days counted toward the goal so far.
    pub current: u32,
    /// Days required by the goal.
    pub target: u32,
    pub completed: bool,
    /// Whole days remaining in the window after `today`.
    pub days_left: i64,
}

/// Evaluate every weekly and monthly challenge for the given day.
#[must_use]
pub fn evaluate(habits: &[Habit], today: NaiveDate, week_starts_on: Weekday) -> Vec<ChallengeProgress> {
    let week = (
        week_start(today, week_starts_on),
        week_start(today, week_starts_on) + Duration::days(6),
    );
    let month = (
        month_start(today),
        month_start(today) + Duration::days(days_in_month(today) - 1),
    );

    WEEKLY_CHALLENGES
        .iter()
        .chain(MONTHLY_CHALLENGES.iter())
        .map(|challenge| {
            let (start, end) = match challenge.kind {
                ChallengeKind::Weekly => week,
                ChallengeKind::Monthly => month,
            };
            let current = progress_in_window(habits, challenge.goal, start, end.min(today));
            let target = challenge.goal.target();

            ChallengeProgress {
                challenge: *challenge,
                start,
                end,
                current,
                target,
                completed: current >= target,
                days_left: (end - today).num_days().max(0),
            }
        })
        .collect()
}

/// Days in [start, end] that count toward the goal.
fn progress_in_window(habits: &[Habit], goal: ChallengeGoal, start: NaiveDate, end: NaiveDate) -> u32 {
    if habits.is_empty() || end < start {
        return 0;
    }

    match goal {
        ChallengeGoal::ConsecutiveActiveDays(_) => {
            let mut best = 0u32;
            let mut run = 0u32;
            for date in days(start, end) {
                if completions_on(habits, date) >= 1 {
                    run += 1;
                    best = best.max(run);
                } else {
                    run = 0;
                }
            }
            best
        }
        ChallengeGoal::DaysWithAtLeast { habits: min, .. } => days(start, end)
            .filter(|d| completions_on(habits, *d) >= min)
            .count() as u32,
        ChallengeGoal::CategoryDays { category, .. } => days(start, end)
            .filter(|d| category_completed_on(habits, category, *d))
            .count() as u32,
        ChallengeGoal::BalancedDays(_) => days(start, end)
            .filter(|d| {
                Category::ALL
                    .iter()
                    .all(|c| category_completed_on(habits, *c, *d))
            })
            .count() as u32,
    }
}

fn days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let span = (end - start).num_days();
    (0..=span).map(move |offset| start + Duration::days(offset))
}

fn completions_on(habits: &[Habit], date: NaiveDate) -> usize {
    habits.iter().filter(|h| h.is_completed_on(date)).count()
}

fn category_completed_on(habits: &[Habit], category: Category, date: NaiveDate) -> bool {
    habits
        .iter()
        .any(|h| h.category == category && h.is_completed_on(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Goal;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(category: Category, dates: &[NaiveDate]) -> Habit {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut habit = Habit::new("h", "", category, Goal::default(), created).unwrap();
        for d in dates {
            habit.mark(*d);
        }
        habit
    }

    fn find<'a>(progress: &'a [ChallengeProgress], id: &str) -> &'a ChallengeProgress {
        progress
            .iter()
            .find(|p| p.challenge.id == id)
            .expect("challenge in catalog")
    }

    #[test]
    fn test_windows_follow_calendar() {
        // Wednesday 2024-03-13; Sunday-start week is Mar 10..16.
        let today = date(2024, 3, 13);
        let progress = evaluate(&[], today, Weekday::Sun);

        let weekly = find(&progress, "seven_day_run");
        assert_eq!(weekly.start, date(2024, 3, 10));
        assert_eq!(weekly.end, date(2024, 3, 16));
        assert_eq!(weekly.days_left, 3);

        let monthly = find(&progress, "total_transformation");
        assert_eq!(monthly.start, date(2024, 3, 1));
        assert_eq!(monthly.end, date(2024, 3, 31));
    }

    #[test]
    fn test_category_days_count_distinct_days() {
        let today = date(2024, 3, 13);
        let habits = vec![
            habit(
                Category::Fitness,
                &[date(2024, 3, 11), date(2024, 3, 12), date(2024, 3, 13)],
            ),
            // Same days in another fitness habit must not double-count.
            habit(Category::Fitness, &[date(2024, 3, 11)]),
        ];
        let progress = evaluate(&habits, today, Weekday::Sun);
        assert_eq!(find(&progress, "fitness_first").current, 3);
    }

    #[test]
    fn test_consecutive_active_days_reset_on_gap() {
        let today = date(2024, 3, 16);
        let habits = vec![habit(
            Category::Personal,
            &[
                date(2024, 3, 10),
                date(2024, 3, 11),
                // gap on the 12th
                date(2024, 3, 13),
                date(2024, 3, 14),
                date(2024, 3, 15),
            ],
        )];
        let progress = evaluate(&habits, today, Weekday::Sun);
        assert_eq!(find(&progress, "seven_day_run").current, 3);
    }

    #[test]
    fn test_balanced_days_needs_every_category() {
        let today = date(2024, 3, 13);
        let day = date(2024, 3, 11);
        let habits = vec![
            habit(Category::Health, &[day]),
            habit(Category::Fitness, &[day]),
            habit(Category::Productivity, &[day]),
            habit(Category::Personal, &[day, date(2024, 3, 12)]),
        ];
        let progress = evaluate(&habits, today, Weekday::Sun);
        // Only Mar 11 has all four categories.
        assert_eq!(find(&progress, "perfect_balance").current, 1);
    }

    #[test]
    fn test_progress_never_counts_future_days() {
        let today = date(2024, 3, 13);
        let habits = vec![habit(Category::Fitness, &[date(2024, 3, 15)])];
        let progress = evaluate(&habits, today, Weekday::Sun);
        assert_eq!(find(&progress, "fitness_first").current, 0);
    }

    #[test]
    fn test_completion_flag() {
        let today = date(2024, 3, 13);
        let days: Vec<NaiveDate> = (10..=13).map(|d| date(2024, 3, d)).collect();
        let habits = vec![habit(Category::Productivity, &days)];
        let progress = evaluate(&habits, today, Weekday::Sun);
        let deep_work = find(&progress, "deep_work");
        assert_eq!(deep_work.current, 4);
        assert!(deep_work.completed);
    }
}
