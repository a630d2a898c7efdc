//! Path resolution for ritmo configuration and data files.
//!
//! All ritmo data is stored in `~/.ritmo/`:
//! - `config.yaml` - Main configuration file
//! - `habits.json` - Habit data (JSON backend)
//! - `ritmo.db` - SQLite database (sqlite backend)
//!
//! The `RITMO_HOME` environment variable overrides the root, which keeps
//! tests and scripted runs away from real data.

use std::path::PathBuf;

use crate::error::RitmoError;

/// Paths to ritmo configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.ritmo/`
    pub root: PathBuf,
    /// Config file: `~/.ritmo/config.yaml`
    pub config_file: PathBuf,
    /// Habit data file: `~/.ritmo/habits.json`
    pub data_file: PathBuf,
    /// Database file: `~/.ritmo/ritmo.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths from `RITMO_HOME` or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `RITMO_HOME` nor `HOME` is set.
    pub fn new() -> Result<Self, RitmoError> {
        if let Ok(root) = std::env::var("RITMO_HOME") {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            RitmoError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".ritmo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            data_file: root.join("habits.json"),
            database: root.join("ritmo.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), RitmoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                RitmoError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".ritmo"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-ritmo");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.data_file, root.join("habits.json"));
        assert_eq!(paths.database, root.join("ritmo.db"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested"));

        paths.ensure_dirs().unwrap();
        assert!(paths.root.exists());
    }
}
