//! JSON document store.
//!
//! All habits live in one JSON array (`~/.ritmo/habits.json`), loaded on
//! open and rewritten after every mutation. This mirrors the original
//! app's local-storage persistence.

use std::path::PathBuf;

use crate::core::Habit;
use crate::error::RitmoError;
use crate::storage::HabitStore;

/// File-backed habit store.
pub struct JsonStore {
    path: PathBuf,
    habits: Vec<Habit>,
}

impl JsonStore {
    /// Open the store, loading existing data if the file exists.
    ///
    /// A missing file is an empty store; a malformed file is an error
    /// rather than silently discarded data.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: PathBuf) -> Result<Self, RitmoError> {
        let habits = match std::fs::read(&path) {
            Ok(bytes) => {
                let mut habits: Vec<Habit> = serde_json::from_slice(&bytes)?;
                // Defend against hand-edited files: the log must be a set.
                for habit in &mut habits {
                    habit.normalize();
                }
                habits
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self { path, habits })
    }

    fn persist(&self) -> Result<(), RitmoError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(&self.habits)?;
        std::fs::write(&self.path, payload)?;
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize, RitmoError> {
        self.habits
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| RitmoError::NotFound(format!("habit '{id}'")))
    }
}

impl HabitStore for JsonStore {
    fn list(&self) -> Result<Vec<Habit>, RitmoError> {
        Ok(self.habits.clone())
    }

    fn get(&self, id: &str) -> Result<Habit, RitmoError> {
        let pos = self.position(id)?;
        Ok(self.habits[pos].clone())
    }

    fn add(&mut self, habit: Habit) -> Result<(), RitmoError> {
        if self.habits.iter().any(|h| h.id == habit.id) {
            return Err(RitmoError::Validation(format!(
                "habit '{}' already exists",
                habit.id
            )));
        }
        self.habits.push(habit);
        self.persist()
    }

    fn update(&mut self, habit: &Habit) -> Result<(), RitmoError> {
        let pos = self.position(&habit.id)?;
        self.habits[pos] = habit.clone();
        self.persist()
    }

    fn remove(&mut self, id: &str) -> Result<Habit, RitmoError> {
        let pos = self.position(id)?;
        let removed = self.habits.remove(pos);
        self.persist()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Goal};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample(name: &str) -> Habit {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        Habit::new(name, "", Category::Health, Goal::default(), created).unwrap()
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonStore::open(dir.path().join("habits.json")).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_persists_across_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("habits.json");

        let habit = sample("Read");
        let id = habit.id.clone();
        {
            let mut store = JsonStore::open(path.clone()).unwrap();
            store.add(habit).unwrap();
        }

        let store = JsonStore::open(path).unwrap();
        assert_eq!(store.get(&id).unwrap().name, "Read");
    }

    #[test]
    fn test_add_duplicate_id_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = JsonStore::open(dir.path().join("habits.json")).unwrap();
        let habit = sample("Read");
        store.add(habit.clone()).unwrap();
        assert!(matches!(
            store.add(habit),
            Err(RitmoError::Validation(_))
        ));
    }

    #[test]
    fn test_remove_returns_final_state() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = JsonStore::open(dir.path().join("habits.json")).unwrap();
        let habit = sample("Read");
        let id = habit.id.clone();
        store.add(habit).unwrap();

        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.id, id);
        assert!(matches!(store.get(&id), Err(RitmoError::NotFound(_))));
    }

    #[test]
    fn test_open_normalizes_duplicate_dates() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("habits.json");

        let mut habit = sample("Read");
        habit.completed_dates = vec![
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        ];
        std::fs::write(&path, serde_json::to_vec(&vec![habit]).unwrap()).unwrap();

        let store = JsonStore::open(path).unwrap();
        let loaded = &store.list().unwrap()[0];
        assert_eq!(loaded.completed_dates.len(), 2);
        assert!(loaded.completed_dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("habits.json");
        std::fs::write(&path, b"not json").unwrap();
        assert!(JsonStore::open(path).is_err());
    }
}
