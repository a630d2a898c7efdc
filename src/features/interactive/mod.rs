//! Interactive fuzzy finder for habits.
//!
//! This module provides an interactive terminal interface for browsing
//! and selecting habits using fuzzy search powered by skim.

mod picker;

pub use picker::{pick_habits, PickOptions, PickResult};
