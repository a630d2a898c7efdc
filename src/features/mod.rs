//! Feature implementations for ritmo.
//!
//! This module contains the implementation of features layered on top of
//! the core model and statistics engine:
//! - Natural language parsing for quick habit entry
//! - Interactive picker
//! - Achievements
//! - Weekly and monthly challenges
//! - Motivational quotes

pub mod achievements;
pub mod challenges;
pub mod interactive;
pub mod nlp;
pub mod quotes;
