//! Natural language parsing for quick habit entry.
//!
//! Turns strings like "Morning run #fitness daily x1 // 30 minutes" into
//! structured habit data for `ritmo add`.

mod parser;

pub use parser::{parse_habit, ParsedHabit};
