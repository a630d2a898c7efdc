//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    // Create layout: header, list, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // List
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the header with the daily summary.
fn render_header(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let title = format!(
        " {} · {}/{} done · week {:.0}% · best streak {}d ",
        app.today.format("%A, %b %d"),
        app.summary.completed_today,
        app.summary.total_habits,
        app.summary.weekly_completion,
        app.summary.best_streak
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the habit list.
fn render_list(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .habits
        .iter()
        .enumerate()
        .map(|(i, habit)| {
            let is_selected = i == app.selected;
            let done_today = habit.is_completed_on(app.today);

            let status_icon = if done_today { "[x]" } else { "[ ]" };

            let mut spans = vec![
                Span::styled(
                    format!("{status_icon} "),
                    Style::default().fg(if done_today {
                        Color::Green
                    } else {
                        Color::White
                    }),
                ),
                Span::styled(
                    &habit.name,
                    Style::default().add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::styled(
                    format!("  #{}", habit.category),
                    Style::default().fg(Color::Blue),
                ),
            ];

            if habit.streak > 0 {
                spans.push(Span::styled(
                    format!("  {}d", habit.streak),
                    Style::default().fg(Color::Yellow),
                ));
            }

            spans.push(Span::styled(
                format!("  {} x{}", habit.goal.frequency, habit.goal.target),
                Style::default().fg(Color::DarkGray),
            ));

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("j/k:nav | space:toggle today | r:refresh | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
