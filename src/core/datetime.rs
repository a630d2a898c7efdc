//! Date parsing and calendar helpers.
//!
//! Commands accept natural-language dates for backfilling completions
//! (`ritmo done run --date yesterday`). Parsing is relative to an explicit
//! reference day, never the system clock, so it stays testable.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::RitmoError;

/// Parse a natural language date expression relative to `today`.
///
/// Supports:
/// - `today`, `yesterday`
/// - `N days ago`, `N weeks ago`
/// - weekday names (`monday`, `last monday`) - the most recent occurrence,
///   today included
/// - ISO format (`2024-12-15`)
///
/// # Errors
///
/// Returns `InvalidDate` if the input matches none of the patterns.
pub fn parse_date_arg(input: &str, today: NaiveDate) -> Result<NaiveDate, RitmoError> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "today" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    if let Some(date) = parse_ago(&input, today) {
        return Ok(date);
    }

    if let Some(date) = parse_weekday(&input, today) {
        return Ok(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
        return Ok(date);
    }

    Err(RitmoError::InvalidDate(format!(
        "'{input}' (try today, yesterday, '3 days ago', a weekday name, or YYYY-MM-DD)"
    )))
}

/// Parse "N days ago" / "N weeks ago" patterns.
fn parse_ago(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() == 3 && parts[2] == "ago" {
        let amount: i64 = parts[0].parse().ok()?;
        let days = match parts[1].trim_end_matches('s') {
            "day" => amount,
            "week" => amount * 7,
            _ => return None,
        };
        return Some(today - Duration::days(days));
    }

    None
}

/// Parse a weekday name into its most recent occurrence (today included).
fn parse_weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let name = input.strip_prefix("last ").unwrap_or(input);

    let weekday = match name {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };

    let back = i64::from(
        (7 + today.weekday().num_days_from_sunday() - weekday.num_days_from_sunday()) % 7,
    );
    Some(today - Duration::days(back))
}

/// First day of the calendar week containing `date`.
#[must_use]
pub fn week_start(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    let back = i64::from(
        (7 + date.weekday().num_days_from_sunday() - week_starts_on.num_days_from_sunday()) % 7,
    );
    date - Duration::days(back)
}

/// First day of the calendar month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the calendar month containing `date` (28–31).
#[must_use]
pub fn days_in_month(date: NaiveDate) -> i64 {
    let first = month_start(date);
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next.map_or(31, |n| (n - first).num_days())
}
