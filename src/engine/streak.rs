//! Streak calculations.
//!
//! A streak is the number of consecutive calendar days, walking backward
//! from the reference day, on which a completion exists. An uncompleted
//! reference day means the streak is 0 - there is no grace day.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::core::Habit;

/// Count consecutive completed days ending at `today`.
///
/// The input is treated as a set: duplicates are ignored, order is
/// irrelevant, and future dates never count.
#[must_use]
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let set: BTreeSet<NaiveDate> = dates.iter().copied().collect();

    let mut streak = 0;
    let mut cursor = today;
    while set.contains(&cursor) {
        streak += 1;
        cursor -= Duration::days(1);
    }

    streak
}

/// Longest run of consecutive completed days anywhere in the log.
#[must_use]
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    let set: BTreeSet<NaiveDate> = dates.iter().copied().collect();

    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for date in set {
        run = match prev {
            Some(p) if (date - p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }

    longest
}

/// Consecutive days ending at `today` on which every habit was completed.
///
/// Returns 0 when there are no habits.
#[must_use]
pub fn perfect_day_run(habits: &[Habit], today: NaiveDate) -> u32 {
    if habits.is_empty() {
        return 0;
    }

    let mut run = 0;
    let mut cursor = today;
    while habits.iter().all(|h| h.is_completed_on(cursor)) {
        run += 1;
        cursor -= Duration::days(1);
    }

    run
}
