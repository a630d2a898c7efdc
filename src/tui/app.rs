//! Application state for the TUI.

use chrono::{NaiveDate, Weekday};

use crate::core::Habit;
use crate::engine::Summary;
use crate::error::RitmoError;
use crate::storage::HabitStore;

/// Application state.
pub struct App<'a> {
    /// The habit store.
    store: &'a mut dyn HabitStore,
    /// Current habit snapshot.
    pub habits: Vec<Habit>,
    /// Summary over the snapshot.
    pub summary: Summary,
    /// Currently selected index.
    pub selected: usize,
    /// The reference day completions toggle against.
    pub today: NaiveDate,
    /// Week start for the summary header.
    pub week_starts_on: Weekday,
    /// Status message to display.
    pub status: Option<String>,
    /// Pending 'g' key for 'gg' command.
    pub pending_g: bool,
}

impl<'a> App<'a> {
    /// Create a new app instance.
    ///
    /// # Errors
    ///
    /// Returns an error if loading habits fails.
    pub fn new(
        store: &'a mut dyn HabitStore,
        today: NaiveDate,
        week_starts_on: Weekday,
    ) -> Result<Self, RitmoError> {
        let habits = store.list()?;
        let summary = Summary::calculate(&habits, today, week_starts_on);

        Ok(Self {
            store,
            habits,
            summary,
            selected: 0,
            today,
            week_starts_on,
            status: Some("Press ? for help".to_string()),
            pending_g: false,
        })
    }

    /// Reload habits from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if loading habits fails.
    pub fn refresh(&mut self) -> Result<(), RitmoError> {
        self.habits = self.store.list()?;
        self.summary = Summary::calculate(&self.habits, self.today, self.week_starts_on);

        // Adjust selection if it's out of bounds
        if !self.habits.is_empty() && self.selected >= self.habits.len() {
            self.selected = self.habits.len() - 1;
        }

        self.status = Some(format!("Refreshed {} habits", self.habits.len()));
        Ok(())
    }

    /// Get the currently selected habit.
    pub fn selected_habit(&self) -> Option<&Habit> {
        self.habits.get(self.selected)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.pending_g = false;
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.habits.is_empty() && self.selected < self.habits.len() - 1 {
            self.selected += 1;
        }
        self.pending_g = false;
    }

    /// Jump to first item.
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.pending_g = false;
    }

    /// Jump to last item.
    pub fn select_last(&mut self) {
        if !self.habits.is_empty() {
            self.selected = self.habits.len() - 1;
        }
        self.pending_g = false;
    }

    /// Toggle today's completion for the selected habit.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn toggle_selected(&mut self) -> Result<(), RitmoError> {
        if let Some(habit) = self.selected_habit() {
            let id = habit.id.clone();
            let updated = self.store.toggle(&id, self.today, self.today)?;
            self.status = Some(if updated.is_completed_on(self.today) {
                format!("Completed: {}", updated.name)
            } else {
                format!("Un-marked: {}", updated.name)
            });
            self.refresh()?;
        }
        Ok(())
    }

    /// Handle 'g' key for 'gg' command.
    pub fn handle_g(&mut self) {
        if self.pending_g {
            // Second 'g' - go to top
            self.select_first();
        } else {
            // First 'g' - wait for second
            self.pending_g = true;
            self.status = Some("g-".to_string());
        }
    }

    /// Cancel pending 'g' command.
    pub fn cancel_pending(&mut self) {
        self.pending_g = false;
        self.status = None;
    }
}
