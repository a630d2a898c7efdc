//! Habit data model.
//!
//! A habit is a recurring behavior tracked with a log of completion dates.
//! The completion log is the source of truth; `streak` is a cached value
//! recomputed by the store after every mutation.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::datetime::week_start;
use crate::error::RitmoError;

/// The closed set of habit categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Fitness,
    Productivity,
    Personal,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [
        Self::Health,
        Self::Fitness,
        Self::Productivity,
        Self::Personal,
    ];

    /// Lowercase name as stored on disk.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Fitness => "fitness",
            Self::Productivity => "productivity",
            Self::Personal => "personal",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = RitmoError;

    /// Parse a category name.
    ///
    /// # Errors
    ///
    /// An unrecognized name is a `DataIntegrity` error - the category set is
    /// closed and never silently defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "health" => Ok(Self::Health),
            "fitness" => Ok(Self::Fitness),
            "productivity" => Ok(Self::Productivity),
            "personal" => Ok(Self::Personal),
            other => Err(RitmoError::DataIntegrity(format!(
                "unknown category '{other}' (expected health, fitness, productivity, or personal)"
            ))),
        }
    }
}

/// How often a habit's goal target applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        })
    }
}

impl std::str::FromStr for Frequency {
    type Err = RitmoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            other => Err(RitmoError::Validation(format!(
                "unknown frequency '{other}' (expected daily or weekly)"
            ))),
        }
    }
}

/// Target number of completions per period.
///
/// Used only for display-side progress ratios; the statistics engine never
/// enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub frequency: Frequency,
    pub target: u32,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            frequency: Frequency::Daily,
            target: 1,
        }
    }
}

impl Goal {
    /// Create a goal, rejecting a zero target.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if `target` is zero.
    pub fn new(frequency: Frequency, target: u32) -> Result<Self, RitmoError> {
        if target == 0 {
            return Err(RitmoError::Validation(
                "goal target must be at least 1".to_string(),
            ));
        }
        Ok(Self { frequency, target })
    }
}

/// A tracked habit with its completion log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    /// Sorted, duplicate-free completion dates. The store maintains the
    /// invariant; consumers still treat the log as a set.
    #[serde(default)]
    pub completed_dates: Vec<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub goal: Goal,
    /// Cached current streak, recomputed by the store after every toggle.
    #[serde(default)]
    pub streak: u32,
}

impl Habit {
    /// Create a habit with a derived id and an empty completion log.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the name is empty or the goal target
    /// is zero.
    pub fn new(
        name: &str,
        description: &str,
        category: Category,
        goal: Goal,
        created_at: DateTime<Utc>,
    ) -> Result<Self, RitmoError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RitmoError::Validation(
                "habit name must not be empty".to_string(),
            ));
        }
        // Re-validate the target so deserialized goals can't sneak in a zero.
        let goal = Goal::new(goal.frequency, goal.target)?;

        Ok(Self {
            id: Self::generate_id(name, created_at),
            name: name.to_string(),
            description: description.trim().to_string(),
            category,
            completed_dates: Vec::new(),
            created_at,
            goal,
            streak: 0,
        })
    }

    /// Derive a readable, unique-enough id from the name and creation time.
    #[must_use]
    pub fn generate_id(name: &str, created_at: DateTime<Utc>) -> String {
        let slug: String = name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect();
        let slug = slug.trim_matches('-');
        let slug = if slug.is_empty() { "habit" } else { slug };
        format!("{slug}-{:x}", created_at.timestamp_millis())
    }

    /// Whether the habit was completed on the given date.
    #[must_use]
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.binary_search(&date).is_ok()
    }

    /// Add a completion date, keeping the log sorted and duplicate-free.
    pub fn mark(&mut self, date: NaiveDate) {
        if let Err(pos) = self.completed_dates.binary_search(&date) {
            self.completed_dates.insert(pos, date);
        }
    }

    /// Remove a completion date if present.
    pub fn unmark(&mut self, date: NaiveDate) {
        if let Ok(pos) = self.completed_dates.binary_search(&date) {
            self.completed_dates.remove(pos);
        }
    }

    /// Sort and deduplicate the completion log in place.
    ///
    /// Stores call this when loading data that may not uphold the invariant.
    pub fn normalize(&mut self) {
        self.completed_dates.sort_unstable();
        self.completed_dates.dedup();
    }

    /// Whole days since the habit was created, floored at 1.
    #[must_use]
    pub fn days_active(&self, today: NaiveDate) -> i64 {
        (today - self.created_at.date_naive()).num_days().max(1)
    }

    /// Completions within the current goal period.
    #[must_use]
    pub fn completions_this_period(&self, today: NaiveDate, week_starts_on: Weekday) -> usize {
        match self.goal.frequency {
            Frequency::Daily => usize::from(self.is_completed_on(today)),
            Frequency::Weekly => {
                let start = week_start(today, week_starts_on);
                self.completed_dates
                    .iter()
                    .filter(|d| **d >= start && **d <= today)
                    .count()
            }
        }
    }

    /// Display-side ratio of period completions to the goal target, clamped
    /// to [0, 1]. A non-positive target contributes zero rather than a
    /// division by zero.
    #[must_use]
    pub fn goal_progress(&self, today: NaiveDate, week_starts_on: Weekday) -> f64 {
        if self.goal.target == 0 {
            return 0.0;
        }
        let done = self.completions_this_period(today, week_starts_on) as f64;
        (done / f64::from(self.goal.target)).min(1.0)
    }

    /// Total completions logged.
    #[must_use]
    pub fn total_completions(&self) -> usize {
        self.completed_dates.len()
    }

    /// Most recent completion date, if any.
    #[must_use]
    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.completed_dates.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("health".parse::<Category>().unwrap(), Category::Health);
        assert_eq!("  Fitness ".parse::<Category>().unwrap(), Category::Fitness);
        assert!(matches!(
            "chores".parse::<Category>(),
            Err(RitmoError::DataIntegrity(_))
        ));
    }

    #[test]
    fn test_goal_rejects_zero_target() {
        assert!(matches!(
            Goal::new(Frequency::Daily, 0),
            Err(RitmoError::Validation(_))
        ));
        assert!(Goal::new(Frequency::Weekly, 3).is_ok());
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let result = Habit::new("   ", "", Category::Personal, Goal::default(), created());
        assert!(matches!(result, Err(RitmoError::Validation(_))));
    }

    #[test]
    fn test_generate_id_slugs_name() {
        let id = Habit::generate_id("Morning Run!", created());
        assert!(id.starts_with("morning-run"));
    }

    #[test]
    fn test_mark_keeps_log_sorted_and_unique() {
        let mut habit =
            Habit::new("Read", "", Category::Personal, Goal::default(), created()).unwrap();
        habit.mark(date(2024, 1, 3));
        habit.mark(date(2024, 1, 1));
        habit.mark(date(2024, 1, 3));
        assert_eq!(
            habit.completed_dates,
            vec![date(2024, 1, 1), date(2024, 1, 3)]
        );

        habit.unmark(date(2024, 1, 1));
        assert_eq!(habit.completed_dates, vec![date(2024, 1, 3)]);
    }

    #[test]
    fn test_normalize_dedupes() {
        let mut habit =
            Habit::new("Read", "", Category::Personal, Goal::default(), created()).unwrap();
        habit.completed_dates = vec![date(2024, 1, 2), date(2024, 1, 1), date(2024, 1, 2)];
        habit.normalize();
        assert_eq!(
            habit.completed_dates,
            vec![date(2024, 1, 1), date(2024, 1, 2)]
        );
    }

    #[test]
    fn test_goal_progress_daily() {
        let mut habit =
            Habit::new("Read", "", Category::Personal, Goal::default(), created()).unwrap();
        let today = date(2024, 1, 10);
        assert_eq!(habit.goal_progress(today, Weekday::Sun), 0.0);
        habit.mark(today);
        assert_eq!(habit.goal_progress(today, Weekday::Sun), 1.0);
    }

    #[test]
    fn test_goal_progress_weekly_counts_window() {
        let goal = Goal::new(Frequency::Weekly, 3).unwrap();
        let mut habit = Habit::new("Gym", "", Category::Fitness, goal, created()).unwrap();
        // Wednesday; Sunday-start week began Jan 7.
        let today = date(2024, 1, 10);
        habit.mark(date(2024, 1, 8));
        habit.mark(date(2024, 1, 9));
        habit.mark(date(2024, 1, 6)); // previous week, ignored
        let progress = habit.goal_progress(today, Weekday::Sun);
        assert!((progress - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_round_trip_uses_camel_case() {
        let mut habit =
            Habit::new("Read", "20 pages", Category::Health, Goal::default(), created()).unwrap();
        habit.mark(date(2024, 1, 2));
        let json = serde_json::to_string(&habit).unwrap();
        assert!(json.contains("completedDates"));
        assert!(json.contains("\"2024-01-02\""));
        let back: Habit = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, habit.id);
        assert_eq!(back.category, Category::Health);
    }

    #[test]
    fn test_unknown_category_fails_deserialization() {
        let json = r#"{
            "id": "x", "name": "X", "category": "chores",
            "createdAt": "2024-01-01T08:00:00Z",
            "goal": {"frequency": "daily", "target": 1}
        }"#;
        assert!(serde_json::from_str::<Habit>(json).is_err());
    }
}
