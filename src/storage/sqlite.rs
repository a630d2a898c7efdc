//! `SQLite` habit store.
//!
//! The database is stored at `~/.ritmo/ritmo.db` with one row per habit
//! and one row per completion. It stands in for the original app's remote
//! database backend and is selected via `storage.backend: sqlite` in the
//! config file.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};

use crate::core::{Frequency, Goal, Habit};
use crate::error::RitmoError;
use crate::storage::{migrations, HabitStore};

/// Database-backed habit store.
pub struct SqliteStore {
    conn: Connection,
}

/// A habits row before field parsing.
struct RawHabit {
    id: String,
    name: String,
    description: String,
    category: String,
    created_at: String,
    goal_frequency: String,
    goal_target: i64,
    streak: i64,
}

impl SqliteStore {
    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &Path) -> Result<Self, RitmoError> {
        let conn = Connection::open(path).map_err(|e| {
            RitmoError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        Self::init(conn)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, RitmoError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            RitmoError::Database(format!("Failed to open in-memory database: {e}"))
        })?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, RitmoError> {
        // Cascading deletes on completions need foreign keys on.
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| RitmoError::Database(format!("Failed to enable foreign keys: {e}")))?;

        migrations::run(&conn)?;
        Ok(Self { conn })
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, RitmoError> {
        migrations::get_version(&self.conn)
    }

    fn load_raw(&self, id: &str) -> Result<Option<RawHabit>, RitmoError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, description, category, created_at,
                        goal_frequency, goal_target, streak
                 FROM habits WHERE id = ?1",
            )
            .map_err(db_err)?;

        let mut rows = stmt
            .query_map(params![id], raw_from_row)
            .map_err(db_err)?;

        rows.next().transpose().map_err(db_err)
    }

    fn completions(&self, id: &str) -> Result<Vec<NaiveDate>, RitmoError> {
        let mut stmt = self
            .conn
            .prepare("SELECT date FROM completions WHERE habit_id = ?1 ORDER BY date")
            .map_err(db_err)?;

        let dates = stmt
            .query_map(params![id], |row| row.get::<_, String>(0))
            .map_err(db_err)?
            .collect::<Result<Vec<String>, _>>()
            .map_err(db_err)?;

        dates
            .iter()
            .map(|text| {
                NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| {
                    RitmoError::Database(format!("Malformed completion date '{text}': {e}"))
                })
            })
            .collect()
    }

    fn hydrate(&self, raw: RawHabit) -> Result<Habit, RitmoError> {
        let completed_dates = self.completions(&raw.id)?;

        // An unrecognized category is corrupted data, not a default.
        let category = raw.category.parse()?;
        let frequency: Frequency = raw.goal_frequency.parse().map_err(|_| {
            RitmoError::DataIntegrity(format!(
                "unknown goal frequency '{}' on habit '{}'",
                raw.goal_frequency, raw.id
            ))
        })?;
        let created_at = DateTime::parse_from_rfc3339(&raw.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                RitmoError::Database(format!(
                    "Malformed created_at on habit '{}': {e}",
                    raw.id
                ))
            })?;

        Ok(Habit {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            category,
            completed_dates,
            created_at,
            goal: Goal {
                frequency,
                target: u32::try_from(raw.goal_target.max(0)).unwrap_or(1),
            },
            streak: u32::try_from(raw.streak.max(0)).unwrap_or(0),
        })
    }

    fn write_completions(&self, habit: &Habit) -> Result<(), RitmoError> {
        self.conn
            .execute(
                "DELETE FROM completions WHERE habit_id = ?1",
                params![habit.id],
            )
            .map_err(db_err)?;

        let mut stmt = self
            .conn
            .prepare("INSERT INTO completions (habit_id, date) VALUES (?1, ?2)")
            .map_err(db_err)?;
        for date in &habit.completed_dates {
            stmt.execute(params![habit.id, date.format("%Y-%m-%d").to_string()])
                .map_err(db_err)?;
        }

        Ok(())
    }
}

fn raw_from_row(row: &rusqlite::Row<'_>) -> Result<RawHabit, rusqlite::Error> {
    Ok(RawHabit {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        created_at: row.get(4)?,
        goal_frequency: row.get(5)?,
        goal_target: row.get(6)?,
        streak: row.get(7)?,
    })
}

fn db_err(e: rusqlite::Error) -> RitmoError {
    RitmoError::Database(format!("Query failed: {e}"))
}

impl HabitStore for SqliteStore {
    fn list(&self) -> Result<Vec<Habit>, RitmoError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, description, category, created_at,
                        goal_frequency, goal_target, streak
                 FROM habits ORDER BY created_at",
            )
            .map_err(db_err)?;

        let raws = stmt
            .query_map([], raw_from_row)
            .map_err(db_err)?
            .collect::<Result<Vec<RawHabit>, _>>()
            .map_err(db_err)?;

        raws.into_iter().map(|raw| self.hydrate(raw)).collect()
    }

    fn get(&self, id: &str) -> Result<Habit, RitmoError> {
        match self.load_raw(id)? {
            Some(raw) => self.hydrate(raw),
            None => Err(RitmoError::NotFound(format!("habit '{id}'"))),
        }
    }

    fn add(&mut self, habit: Habit) -> Result<(), RitmoError> {
        if self.load_raw(&habit.id)?.is_some() {
            return Err(RitmoError::Validation(format!(
                "habit '{}' already exists",
                habit.id
            )));
        }

        self.conn
            .execute(
                "INSERT INTO habits
                   (id, name, description, category, created_at,
                    goal_frequency, goal_target, streak)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    habit.id,
                    habit.name,
                    habit.description,
                    habit.category.as_str(),
                    habit.created_at.to_rfc3339(),
                    habit.goal.frequency.to_string(),
                    i64::from(habit.goal.target),
                    i64::from(habit.streak),
                ],
            )
            .map_err(db_err)?;

        self.write_completions(&habit)
    }

    fn update(&mut self, habit: &Habit) -> Result<(), RitmoError> {
        let changed = self
            .conn
            .execute(
                "UPDATE habits
                 SET name = ?2, description = ?3, category = ?4,
                     goal_frequency = ?5, goal_target = ?6, streak = ?7
                 WHERE id = ?1",
                params![
                    habit.id,
                    habit.name,
                    habit.description,
                    habit.category.as_str(),
                    habit.goal.frequency.to_string(),
                    i64::from(habit.goal.target),
                    i64::from(habit.streak),
                ],
            )
            .map_err(db_err)?;

        if changed == 0 {
            return Err(RitmoError::NotFound(format!("habit '{}'", habit.id)));
        }

        self.write_completions(habit)
    }

    fn remove(&mut self, id: &str) -> Result<Habit, RitmoError> {
        let habit = self.get(id)?;
        self.conn
            .execute("DELETE FROM habits WHERE id = ?1", params![id])
            .map_err(db_err)?;
        Ok(habit)
    }
}
