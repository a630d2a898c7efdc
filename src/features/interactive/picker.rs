//! Fuzzy picker implementation using skim.
//!
//! Provides an interactive terminal interface for selecting habits.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::NaiveDate;
use skim::prelude::*;

use crate::core::Habit;

/// Options for the picker.
#[derive(Debug, Clone, Default)]
pub struct PickOptions {
    /// Allow multiple selections.
    pub multi: bool,
    /// Initial query string.
    pub query: Option<String>,
    /// Prompt text.
    pub prompt: Option<String>,
}

/// Result of the picker interaction.
#[derive(Debug, Clone)]
pub struct PickResult {
    /// Selected habit IDs.
    pub selected_ids: Vec<String>,
    /// Whether the user aborted.
    pub aborted: bool,
}

/// A wrapper around Habit that implements `SkimItem`.
struct HabitItem {
    habit: Habit,
    display: String,
}

impl HabitItem {
    fn new(habit: Habit, today: NaiveDate) -> Self {
        let status_icon = if habit.is_completed_on(today) {
            "[x]"
        } else {
            "[ ]"
        };

        let streak = if habit.streak > 0 {
            format!(" ({}d streak)", habit.streak)
        } else {
            String::new()
        };

        let display = format!(
            "{} {} #{}{}",
            status_icon, habit.name, habit.category, streak
        );

        Self { habit, display }
    }
}

impl SkimItem for HabitItem {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.display)
    }

    fn preview(&self, _context: PreviewContext<'_>) -> ItemPreview {
        let mut preview = String::new();

        preview.push_str(&format!("Name: {}\n", self.habit.name));
        preview.push_str(&format!("ID: {}\n", self.habit.id));
        preview.push_str(&format!("Category: {}\n", self.habit.category));
        preview.push_str(&format!(
            "Goal: {} x{}\n",
            self.habit.goal.frequency, self.habit.goal.target
        ));
        preview.push_str(&format!("Streak: {} days\n", self.habit.streak));
        preview.push_str(&format!(
            "Completions: {}\n",
            self.habit.total_completions()
        ));

        if let Some(last) = self.habit.last_completed() {
            preview.push_str(&format!("Last completed: {last}\n"));
        }

        if !self.habit.description.is_empty() {
            preview.push_str(&format!("\n{}\n", self.habit.description));
        }

        ItemPreview::Text(preview)
    }

    fn output(&self) -> Cow<'_, str> {
        // Return the ID for easy processing
        Cow::Borrowed(&self.habit.id)
    }
}

/// Run the interactive picker on a list of habits.
///
/// Returns the selected items, or None if there is nothing to pick from or
/// the picker could not start.
pub fn pick_habits(habits: Vec<Habit>, today: NaiveDate, options: PickOptions) -> Option<PickResult> {
    if habits.is_empty() {
        return None;
    }

    // Header string must outlive the options builder.
    let header = format!(
        "Enter: toggle today | Ctrl-C: cancel{}",
        if options.multi { " | Tab: select more" } else { "" }
    );

    let skim_options = SkimOptionsBuilder::default()
        .height(Some("50%"))
        .multi(options.multi)
        .prompt(Some(options.prompt.as_deref().unwrap_or("Select habit > ")))
        .query(options.query.as_deref())
        .preview(Some(""))
        .preview_window(Some("right:50%:wrap"))
        .bind(vec![
            "ctrl-c:abort",
            "enter:accept",
            "tab:toggle",
        ])
        .header(Some(&header))
        .build()
        .ok()?;

    let items: Vec<Arc<dyn SkimItem>> = habits
        .into_iter()
        .map(|h| {
            let item: Arc<dyn SkimItem> = Arc::new(HabitItem::new(h, today));
            item
        })
        .collect();

    let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();
    for item in items {
        let _ = tx.send(item);
    }
    drop(tx); // Close sender

    let output = Skim::run_with(&skim_options, Some(rx))?;

    if output.is_abort {
        return Some(PickResult {
            selected_ids: vec![],
            aborted: true,
        });
    }

    let selected_ids: Vec<String> = output
        .selected_items
        .iter()
        .map(|item| item.output().to_string())
        .collect();

    Some(PickResult {
        selected_ids,
        aborted: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Goal};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_habit_item_display() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let mut habit = Habit::new(
            "Morning run",
            "",
            Category::Fitness,
            Goal::default(),
            created,
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        habit.mark(today);
        habit.streak = 1;

        let item = HabitItem::new(habit, today);
        assert!(item.display.contains("[x]"));
        assert!(item.display.contains("Morning run"));
        assert!(item.display.contains("#fitness"));
        assert!(item.display.contains("1d streak"));
    }

    #[test]
    fn test_pick_habits_empty() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert!(pick_habits(vec![], today, PickOptions::default()).is_none());
    }
}
