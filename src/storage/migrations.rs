//! Database migrations for ritmo.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::RitmoError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, RitmoError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| RitmoError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), RitmoError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| RitmoError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), RitmoError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), RitmoError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(RitmoError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `habits`: habit definitions and the cached streak
/// - `completions`: one row per (habit, date) completion
fn migrate_v1(conn: &Connection) -> Result<(), RitmoError> {
    conn.execute_batch(
        r"
        -- Habit definitions
        CREATE TABLE IF NOT EXISTS habits (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            category TEXT NOT NULL,
            created_at TEXT NOT NULL,
            goal_frequency TEXT NOT NULL DEFAULT 'daily',
            goal_target INTEGER NOT NULL DEFAULT 1,
            streak INTEGER NOT NULL DEFAULT 0
        );

        -- Completion log; the primary key makes dates a set per habit
        CREATE TABLE IF NOT EXISTS completions (
            habit_id TEXT NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            PRIMARY KEY (habit_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_completions_date
        ON completions(date);
        ",
    )
    .map_err(|e| RitmoError::Database(format!("Migration v1 failed: {e}")))
}
