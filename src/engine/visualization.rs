//! Terminal visualization for statistics.
//!
//! ASCII charts shared by the stats commands. These are pure string
//! renderers: habit data and the reference day come in, text comes out.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, Weekday};

use crate::core::{week_start, Habit};

/// Characters for bar chart rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart from (label, value) pairs.
#[must_use]
pub fn render_bar_chart(
    data: &[(String, usize)],
    max_label_width: usize,
    bar_width: usize,
) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);
    let mut lines = Vec::new();

    for (label, value) in data {
        let truncated_label = if label.len() > max_label_width {
            format!("{}...", &label[..max_label_width.saturating_sub(3)])
        } else {
            format!("{label:max_label_width$}")
        };

        let bar_length = (*value as f64 / max_value as f64 * bar_width as f64) as usize;
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width - bar_length);

        lines.push(format!("{truncated_label} |{bar}{padding} {value}"));
    }

    lines.join("\n")
}

/// Render a compact inline sparkline.
#[must_use]
pub fn render_sparkline(values: &[usize]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max_value = *values.iter().max().unwrap_or(&1);
    let max_value = max_value.max(1);

    values
        .iter()
        .map(|&v| {
            let normalized = (v as f64 / max_value as f64 * 7.0) as usize;
            if v == 0 {
                BAR_CHARS[0]
            } else {
                BAR_CHARS[normalized.min(7)]
            }
        })
        .collect()
}

/// Render a simple progress bar with percentage.
#[must_use]
pub fn render_progress_bar(current: usize, total: usize, width: usize) -> String {
    let total = total.max(1);
    let progress = (current as f64 / total as f64).min(1.0);
    let filled = (progress * width as f64) as usize;
    let empty = width - filled;

    let bar = format!(
        "[{}{}]",
        FULL_BLOCK.to_string().repeat(filled),
        "░".repeat(empty)
    );

    format!("{} {:.0}%", bar, progress * 100.0)
}

/// Render a completion heatmap: one row per weekday, one column per week.
///
/// Intensity reflects how many habits were completed that day relative to
/// the busiest day in the window. Days after `today` render blank.
#[must_use]
pub fn render_heatmap(habits: &[Habit], today: NaiveDate, weeks: usize) -> String {
    let weeks = weeks.max(1);
    let current_week_start = week_start(today, Weekday::Mon);
    let window_start = current_week_start - Duration::weeks(weeks as i64 - 1);

    // Habits completed per day in the window.
    let mut by_date: HashMap<NaiveDate, usize> = HashMap::new();
    for habit in habits {
        for date in &habit.completed_dates {
            if *date >= window_start && *date <= today {
                *by_date.entry(*date).or_default() += 1;
            }
        }
    }

    let max_count = by_date.values().max().copied().unwrap_or(1).max(1);

    let mut lines = Vec::new();
    let day_labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

    // Header with week numbers, oldest week first.
    let mut header = "     ".to_string();
    for w in 0..weeks {
        header.push_str(&format!("W{:<2}", weeks - w));
    }
    lines.push(header);

    for (day_idx, label) in day_labels.iter().enumerate() {
        let mut row = format!("{label} ");

        for week in 0..weeks {
            let start = window_start + Duration::weeks(week as i64);
            let date = start + Duration::days(day_idx as i64);
            if date > today {
                row.push_str("   ");
                continue;
            }

            let count = by_date.get(&date).copied().unwrap_or(0);
            let intensity = if count == 0 {
                '·'
            } else {
                let level = (count as f64 / max_count as f64 * 4.0) as usize;
                match level {
                    0 => '░',
                    1 => '▒',
                    2 => '▓',
                    _ => '█',
                }
            };
            row.push_str(&format!(" {intensity} "));
        }

        lines.push(row);
    }

    lines.push(String::new());
    lines.push("Legend: · = 0  ░ = low  ▒ = medium  ▓ = high  █ = peak".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Goal};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_render_sparkline() {
        let values = [0, 2, 5, 3, 8, 4, 1];
        let sparkline = render_sparkline(&values);
        assert_eq!(sparkline.chars().count(), 7);
    }

    #[test]
    fn test_render_sparkline_empty() {
        assert!(render_sparkline(&[]).is_empty());
    }

    #[test]
    fn test_render_bar_chart() {
        let data = vec![
            ("health".to_string(), 5),
            ("fitness".to_string(), 10),
        ];
        let chart = render_bar_chart(&data, 12, 10);
        assert!(chart.contains("health"));
        assert!(chart.contains("10"));
    }

    #[test]
    fn test_render_progress_bar() {
        assert!(render_progress_bar(50, 100, 20).contains("50%"));
        assert!(render_progress_bar(100, 100, 20).contains("100%"));
        assert!(render_progress_bar(0, 100, 20).contains("0%"));
    }

    #[test]
    fn test_render_heatmap_has_seven_rows() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut habit =
            Habit::new("h", "", Category::Health, Goal::default(), created).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        habit.mark(today);

        let heatmap = render_heatmap(&[habit], today, 4);
        assert!(heatmap.contains("Mon"));
        assert!(heatmap.contains("Sun"));
        assert!(heatmap.contains("Legend"));
    }
}
