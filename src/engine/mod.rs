//! The statistics engine.
//!
//! Pure derivations over a snapshot of habits and an explicit reference
//! day ("today"). The engine never reads the clock, never touches storage,
//! and never mutates its input - callers hand it a fully-formed collection
//! and consume the returned values immediately:
//! - Streaks (current, longest, perfect-day runs)
//! - Aggregate summary (totals, weekly/monthly completion)
//! - Analytics (completion rate, category breakdown, trends, ranking)
//! - Insights (canned observations over the computed numbers)
//! - Terminal visualizations

pub mod analytics;
pub mod insights;
pub mod streak;
pub mod summary;
pub mod visualization;

pub use analytics::{Analytics, CategoryBreakdown, CategoryStats, DayPoint, HabitPerformance, WeekPoint};
pub use insights::{generate_insights, Insight, InsightLevel, MAX_INSIGHTS};
pub use streak::{current_streak, longest_streak, perfect_day_run};
pub use summary::Summary;
pub use visualization::{render_bar_chart, render_heatmap, render_progress_bar, render_sparkline};
