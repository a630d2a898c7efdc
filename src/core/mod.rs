//! Core abstractions for ritmo.
//!
//! The habit data model and shared date utilities used across features.

mod datetime;
mod habit;

pub use datetime::{days_in_month, month_start, parse_date_arg, week_start};
pub use habit::{Category, Frequency, Goal, Habit};
