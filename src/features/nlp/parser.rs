//! Natural language habit parser.
//!
//! Parses strings like "Morning run #fitness daily x1 // 30 minutes"
//! into structured habit data.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{Category, Frequency};
use crate::error::RitmoError;

/// Result of parsing a quick-add string.
#[derive(Debug, Clone, Default)]
pub struct ParsedHabit {
    /// The habit name (main text after extracting all patterns).
    pub name: String,
    /// Category from a `#category` tag.
    pub category: Option<Category>,
    /// Frequency from a `daily` / `weekly` keyword.
    pub frequency: Option<Frequency>,
    /// Goal target from an `xN` token.
    pub target: Option<u32>,
    /// Description (text after //).
    pub description: Option<String>,
}

// Compiled regex patterns
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([\w-]+)").unwrap_or_else(|e| panic!("Invalid tag regex: {e}")));

static TARGET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // x3 or X3 as a standalone token
    Regex::new(r"(?i)\bx(\d+)\b").unwrap_or_else(|e| panic!("Invalid target regex: {e}"))
});

static FREQUENCY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(daily|weekly|every day|every week)\b")
        .unwrap_or_else(|e| panic!("Invalid frequency regex: {e}"))
});

static NOTES_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "// description" at the end
    Regex::new(r"//\s*(.+)$").unwrap_or_else(|e| panic!("Invalid notes regex: {e}"))
});

/// Parse a quick-add habit string.
///
/// # Errors
///
/// Returns a `Validation` error if a `#tag` names an unknown category or
/// no name remains after extracting the patterns.
pub fn parse_habit(input: &str) -> Result<ParsedHabit, RitmoError> {
    let mut remaining = input.trim().to_string();
    let mut parsed = ParsedHabit::default();

    // Description first so later patterns don't eat into it.
    if let Some(caps) = NOTES_PATTERN.captures(&remaining) {
        if let Some(m) = caps.get(1) {
            parsed.description = Some(m.as_str().trim().to_string());
        }
        remaining = NOTES_PATTERN.replace(&remaining, "").to_string();
    }

    if let Some(caps) = TAG_PATTERN.captures(&remaining) {
        if let Some(m) = caps.get(1) {
            parsed.category = Some(m.as_str().parse::<Category>().map_err(|_| {
                RitmoError::Validation(format!(
                    "unknown category tag '#{}' (expected #health, #fitness, #productivity, or #personal)",
                    m.as_str()
                ))
            })?);
        }
        remaining = TAG_PATTERN.replace(&remaining, "").to_string();
    }

    if let Some(caps) = FREQUENCY_PATTERN.captures(&remaining) {
        if let Some(m) = caps.get(1) {
            parsed.frequency = Some(match m.as_str().to_lowercase().as_str() {
                "weekly" | "every week" => Frequency::Weekly,
                _ => Frequency::Daily,
            });
        }
        remaining = FREQUENCY_PATTERN.replace(&remaining, "").to_string();
    }

    if let Some(caps) = TARGET_PATTERN.captures(&remaining) {
        if let Some(m) = caps.get(1) {
            parsed.target = m.as_str().parse().ok();
        }
        remaining = TARGET_PATTERN.replace(&remaining, "").to_string();
    }

    parsed.name = remaining.split_whitespace().collect::<Vec<_>>().join(" ");
    if parsed.name.is_empty() {
        return Err(RitmoError::Validation(
            "no habit name found in input".to_string(),
        ));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_name() {
        let parsed = parse_habit("Drink water").unwrap();
        assert_eq!(parsed.name, "Drink water");
        assert!(parsed.category.is_none());
        assert!(parsed.frequency.is_none());
    }

    #[test]
    fn test_parse_full_pattern() {
        let parsed = parse_habit("Morning run #fitness daily x1 // 30 minutes").unwrap();
        assert_eq!(parsed.name, "Morning run");
        assert_eq!(parsed.category, Some(Category::Fitness));
        assert_eq!(parsed.frequency, Some(Frequency::Daily));
        assert_eq!(parsed.target, Some(1));
        assert_eq!(parsed.description.as_deref(), Some("30 minutes"));
    }

    #[test]
    fn test_parse_weekly_phrase() {
        let parsed = parse_habit("Gym #fitness every week x3").unwrap();
        assert_eq!(parsed.frequency, Some(Frequency::Weekly));
        assert_eq!(parsed.target, Some(3));
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        assert!(matches!(
            parse_habit("Walk the dog #chores"),
            Err(RitmoError::Validation(_))
        ));
    }

    #[test]
    fn test_name_only_patterns_is_rejected() {
        assert!(matches!(
            parse_habit("#health daily"),
            Err(RitmoError::Validation(_))
        ));
    }

    #[test]
    fn test_x_inside_word_is_not_a_target() {
        let parsed = parse_habit("Fix xylophone #personal").unwrap();
        assert_eq!(parsed.name, "Fix xylophone");
        assert!(parsed.target.is_none());
    }
}
