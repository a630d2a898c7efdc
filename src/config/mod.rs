//! Configuration management for ritmo.
//!
//! This module handles loading and saving configuration from `~/.ritmo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, StatsConfig, StorageConfig, WeekStart};
