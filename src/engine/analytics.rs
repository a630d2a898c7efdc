//! Deeper habit analytics.
//!
//! Everything behind `ritmo stats`: overall completion rate, per-category
//! breakdown, daily and weekly trends, and per-habit performance. Like the
//! summary, this is a pure function of the habit snapshot and an explicit
//! reference day.

use chrono::{Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::core::{week_start, Category, Habit};
use crate::engine::streak::current_streak;

/// Breakdown entry for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryStats {
    /// Habits filed under this category.
    pub count: usize,
    /// Completions logged across those habits.
    pub completions: usize,
    /// Share of all completions, in [0, 100].
    pub percentage: f64,
}

/// Per-category statistics over the closed category set.
///
/// One named field per category keeps the breakdown exhaustive at compile
/// time - adding a category will not compile until every consumer handles
/// it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub health: CategoryStats,
    pub fitness: CategoryStats,
    pub productivity: CategoryStats,
    pub personal: CategoryStats,
}

impl CategoryBreakdown {
    /// Stats for one category.
    #[must_use]
    pub const fn get(&self, category: Category) -> &CategoryStats {
        match category {
            Category::Health => &self.health,
            Category::Fitness => &self.fitness,
            Category::Productivity => &self.productivity,
            Category::Personal => &self.personal,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut CategoryStats {
        match category {
            Category::Health => &mut self.health,
            Category::Fitness => &mut self.fitness,
            Category::Productivity => &mut self.productivity,
            Category::Personal => &mut self.personal,
        }
    }

    /// Iterate categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryStats)> {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}

/// Completions on a single day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPoint {
    pub date: NaiveDate,
    pub completions: usize,
}

/// Completions in a single calendar week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekPoint {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub completions: usize,
}

/// One habit's standing in the performance ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitPerformance {
    pub id: String,
    pub name: String,
    /// Completions over days active, in [0, 100].
    pub rate: f64,
    pub streak: u32,
}

/// Full analytics snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    /// Completions logged across all habits.
    pub total_completions: usize,
    /// Mean current streak across habits.
    pub average_streak: f64,
    /// Longest current streak across habits.
    pub best_streak: u32,
    /// Completions over possible completions since the oldest habit was
    /// created, in [0, 100].
    pub completion_rate: f64,
    pub categories: CategoryBreakdown,
    /// Completions per day for the last 7 days, oldest first.
    pub weekly_trend: Vec<DayPoint>,
    /// Completions per calendar week for the last 4 weeks, oldest first.
    pub monthly_trend: Vec<WeekPoint>,
    /// Habits ranked by completion rate, best first.
    pub habit_performance: Vec<HabitPerformance>,
}

impl Analytics {
    /// Calculate analytics for a snapshot of habits.
    ///
    /// Percentages are unrounded. An empty collection yields zeros and
    /// empty series, never NaN.
    #[must_use]
    pub fn calculate(habits: &[Habit], today: NaiveDate, week_starts_on: Weekday) -> Self {
        let total_completions: usize = habits.iter().map(Habit::total_completions).sum();

        let streaks: Vec<u32> = habits
            .iter()
            .map(|h| current_streak(&h.completed_dates, today))
            .collect();
        let sum_of_streaks: u32 = streaks.iter().sum();
        let average_streak = if habits.is_empty() {
            0.0
        } else {
            f64::from(sum_of_streaks) / habits.len() as f64
        };

        // Rate denominator: the longest any habit has been active.
        let days_active = habits
            .iter()
            .map(|h| h.days_active(today))
            .max()
            .unwrap_or(1);
        let completion_rate = if habits.is_empty() {
            0.0
        } else {
            total_completions as f64 / (habits.len() as i64 * days_active) as f64 * 100.0
        };

        let mut habit_performance: Vec<HabitPerformance> = habits
            .iter()
            .zip(&streaks)
            .map(|(h, streak)| HabitPerformance {
                id: h.id.clone(),
                name: h.name.clone(),
                rate: h.total_completions() as f64 / days_active as f64 * 100.0,
                streak: *streak,
            })
            .collect();
        habit_performance
            .sort_by(|a, b| b.rate.partial_cmp(&a.rate).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            total_completions,
            average_streak,
            best_streak: streaks.iter().copied().max().unwrap_or(0),
            completion_rate,
            categories: category_breakdown(habits, total_completions),
            weekly_trend: weekly_trend(habits, today),
            monthly_trend: monthly_trend(habits, today, week_starts_on),
            habit_performance,
        }
    }
}

fn category_breakdown(habits: &[Habit], total_completions: usize) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::default();

    for habit in habits {
        let entry = breakdown.get_mut(habit.category);
        entry.count += 1;
        entry.completions += habit.total_completions();
    }

    if total_completions > 0 {
        for category in Category::ALL {
            let entry = breakdown.get_mut(category);
            entry.percentage = entry.completions as f64 / total_completions as f64 * 100.0;
        }
    }

    breakdown
}

/// Habits completed per day over the last 7 days.
fn weekly_trend(habits: &[Habit], today: NaiveDate) -> Vec<DayPoint> {
    (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DayPoint {
                date,
                completions: habits.iter().filter(|h| h.is_completed_on(date)).count(),
            }
        })
        .collect()
}

/// Completions per calendar week over the last 4 weeks.
fn monthly_trend(habits: &[Habit], today: NaiveDate, week_starts_on: Weekday) -> Vec<WeekPoint> {
    let current_start = week_start(today, week_starts_on);

    (0..4)
        .rev()
        .map(|offset| {
            let start = current_start - Duration::weeks(offset);
            let end = start + Duration::days(6);
            let completions = habits
                .iter()
                .flat_map(|h| h.completed_dates.iter())
                .filter(|d| **d >= start && **d <= end)
                .count();
            WeekPoint {
                start,
                end,
                completions,
            }
        })
        .collect()
}
