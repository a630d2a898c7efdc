//! Motivational quote of the day.
//!
//! The quote rotates by day ordinal, so it is stable for a whole day and
//! fully determined by the date - no RNG involved.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Quote theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteCategory {
    Success,
    Perseverance,
    Growth,
    Mindset,
    Health,
}

/// A motivational quote.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    pub category: QuoteCategory,
}

/// The quote catalog.
pub const QUOTES: [Quote; 10] = [
    Quote {
        text: "Success is the sum of small efforts repeated day in and day out.",
        author: "Robert Collier",
        category: QuoteCategory::Perseverance,
    },
    Quote {
        text: "It does not matter how slowly you go as long as you do not stop.",
        author: "Confucius",
        category: QuoteCategory::Perseverance,
    },
    Quote {
        text: "Habits are the compound interest of self-improvement.",
        author: "James Clear",
        category: QuoteCategory::Growth,
    },
    Quote {
        text: "Your future is created by what you do today, not tomorrow.",
        author: "Robert Kiyosaki",
        category: QuoteCategory::Mindset,
    },
    Quote {
        text: "Discipline is doing what needs to be done, even when you don't want to do it.",
        author: "Anonymous",
        category: QuoteCategory::Mindset,
    },
    Quote {
        text: "Every day is a new opportunity to change your life.",
        author: "Anonymous",
        category: QuoteCategory::Growth,
    },
    Quote {
        text: "Motivation gets you going, habit keeps you going.",
        author: "Jim Ryun",
        category: QuoteCategory::Perseverance,
    },
    Quote {
        text: "One small step every day leads to big changes in a year.",
        author: "Anonymous",
        category: QuoteCategory::Growth,
    },
    Quote {
        text: "Take care of your body. It's the only place you have to live.",
        author: "Jim Rohn",
        category: QuoteCategory::Health,
    },
    Quote {
        text: "We are what we repeatedly do. Excellence, then, is not an act, but a habit.",
        author: "Will Durant",
        category: QuoteCategory::Success,
    },
];

/// The quote for a given day.
#[must_use]
pub fn quote_of_the_day(today: NaiveDate) -> &'static Quote {
    let ordinal = today.num_days_from_ce().unsigned_abs() as usize;
    &QUOTES[ordinal % QUOTES.len()]
}
