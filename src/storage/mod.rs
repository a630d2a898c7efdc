//! Storage layer for ritmo.
//!
//! Persistence lives behind the [`HabitStore`] port so the rest of the
//! application - and above all the statistics engine - never knows which
//! backend is in use. Two backends are provided:
//! - `json`: a single JSON document, rewritten on every mutation
//! - `sqlite`: a `SQLite` database with versioned migrations
//!
//! Stores hand out owned snapshots. Mutations go through the store, which
//! recomputes the cached streak from the updated completion log - the log
//! is the source of truth, the streak is derived.

mod json;
mod migrations;
mod sqlite;

pub use json::JsonStore;
pub use sqlite::SqliteStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::core::Habit;
use crate::engine::current_streak;
use crate::error::RitmoError;

/// Which storage backend to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Single JSON document under the data directory.
    #[default]
    Json,
    /// `SQLite` database under the data directory.
    Sqlite,
}

/// The storage port: everything the application needs from persistence.
#[cfg_attr(test, mockall::automock)]
pub trait HabitStore {
    /// A snapshot of every habit.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn list(&self) -> Result<Vec<Habit>, RitmoError>;

    /// A single habit by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no habit has the given id.
    fn get(&self, id: &str) -> Result<Habit, RitmoError>;

    /// Add a new habit.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if a habit with the same id already exists.
    fn add(&mut self, habit: Habit) -> Result<(), RitmoError>;

    /// Replace a stored habit with the given state.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no habit has the given id.
    fn update(&mut self, habit: &Habit) -> Result<(), RitmoError>;

    /// Delete a habit, returning its final state.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no habit has the given id.
    fn remove(&mut self, id: &str) -> Result<Habit, RitmoError>;

    /// Flip one completion date and recompute the cached streak.
    ///
    /// The updated habit is written back before being returned, so the
    /// caller always sees exactly what was stored.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a future date and `NotFound` for an
    /// unknown habit.
    fn toggle(&mut self, id: &str, date: NaiveDate, today: NaiveDate) -> Result<Habit, RitmoError> {
        if date > today {
            return Err(RitmoError::Validation(format!(
                "cannot mark a future date ({date})"
            )));
        }

        let mut habit = self.get(id)?;
        if habit.is_completed_on(date) {
            habit.unmark(date);
        } else {
            habit.mark(date);
        }
        habit.streak = current_streak(&habit.completed_dates, today);

        self.update(&habit)?;
        Ok(habit)
    }
}

/// Open the configured backend at its default location under `paths`.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or the backend
/// fails to open.
pub fn open(paths: &Paths, backend: Backend) -> Result<Box<dyn HabitStore>, RitmoError> {
    paths.ensure_dirs()?;
    match backend {
        Backend::Json => Ok(Box::new(JsonStore::open(paths.data_file.clone())?)),
        Backend::Sqlite => Ok(Box::new(SqliteStore::open_at(&paths.database)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Goal};
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_habit() -> (JsonStore, String) {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = JsonStore::open(dir.path().join("habits.json")).unwrap();
        // Leak the tempdir so the path stays alive for the test body.
        std::mem::forget(dir);
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let habit =
            Habit::new("Read", "", Category::Personal, Goal::default(), created).unwrap();
        let id = habit.id.clone();
        store.add(habit).unwrap();
        (store, id)
    }

    #[test]
    fn test_toggle_marks_and_recomputes_streak() {
        let (mut store, id) = store_with_habit();
        let today = date(2024, 1, 3);

        store.toggle(&id, date(2024, 1, 1), today).unwrap();
        store.toggle(&id, date(2024, 1, 2), today).unwrap();
        let habit = store.toggle(&id, today, today).unwrap();
        assert_eq!(habit.streak, 3);
    }

    #[test]
    fn test_toggle_off_shortens_streak_from_source_of_truth() {
        let (mut store, id) = store_with_habit();
        let today = date(2024, 1, 3);
        for d in 1..=3 {
            store.toggle(&id, date(2024, 1, d), today).unwrap();
        }

        // Un-marking the middle day breaks the run one day back.
        let habit = store.toggle(&id, date(2024, 1, 2), today).unwrap();
        assert_eq!(
            habit.completed_dates,
            vec![date(2024, 1, 1), date(2024, 1, 3)]
        );
        assert_eq!(habit.streak, 1);
    }

    #[test]
    fn test_toggle_rejects_future_date() {
        let (mut store, id) = store_with_habit();
        let today = date(2024, 1, 3);
        let result = store.toggle(&id, date(2024, 1, 4), today);
        assert!(matches!(result, Err(RitmoError::Validation(_))));
    }

    #[test]
    fn test_toggle_unknown_habit_is_not_found() {
        let (mut store, _) = store_with_habit();
        let today = date(2024, 1, 3);
        assert!(matches!(
            store.toggle("nope", today, today),
            Err(RitmoError::NotFound(_))
        ));
    }
}
