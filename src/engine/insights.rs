//! Insight generation from habit statistics.
//!
//! A fixed table of rules over the computed summary and analytics. Rules
//! are evaluated in a fixed order, sorted by level, and capped at
//! [`MAX_INSIGHTS`]; no rule matching means an empty list, never an error.

use serde::Serialize;

use crate::engine::analytics::Analytics;
use crate::engine::summary::Summary;

/// At most this many insights are returned.
pub const MAX_INSIGHTS: usize = 4;

/// Insight importance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsightLevel {
    /// Needs attention.
    High,
    /// Worth noting.
    Medium,
    /// Informational.
    Low,
}

impl InsightLevel {
    /// Get icon for this level.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::High => "!",
            Self::Medium => "*",
            Self::Low => "-",
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// An observation about the user's habit data.
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    /// The insight message.
    pub message: String,
    /// Importance level.
    pub level: InsightLevel,
    /// Concern the insight belongs to.
    pub category: String,
    /// Optional suggestion.
    pub suggestion: Option<String>,
}

impl Insight {
    fn new(message: &str, level: InsightLevel, category: &str) -> Self {
        Self {
            message: message.to_string(),
            level,
            category: category.to_string(),
            suggestion: None,
        }
    }

    fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

/// Generate up to [`MAX_INSIGHTS`] insights from computed statistics.
#[must_use]
pub fn generate_insights(summary: &Summary, analytics: &Analytics) -> Vec<Insight> {
    let mut insights = Vec::new();

    insights.extend(today_insights(summary));
    insights.extend(streak_insights(summary));
    insights.extend(rate_insights(analytics));
    insights.extend(category_insights(analytics));
    insights.extend(trend_insights(analytics));

    insights.sort_by_key(|i| i.level.rank());
    insights.truncate(MAX_INSIGHTS);
    insights
}

fn today_insights(summary: &Summary) -> Vec<Insight> {
    let mut insights = Vec::new();

    if summary.total_habits == 0 {
        return insights;
    }

    if summary.completed_today == 0 {
        insights.push(
            Insight::new(
                "No habits completed yet today",
                InsightLevel::Medium,
                "Today",
            )
            .with_suggestion("Even one small completion keeps the momentum going"),
        );
    } else if summary.completed_today == summary.total_habits {
        insights.push(Insight::new(
            "Perfect day - every habit completed!",
            InsightLevel::Low,
            "Today",
        ));
    }

    insights
}

fn streak_insights(summary: &Summary) -> Vec<Insight> {
    let mut insights = Vec::new();

    if summary.best_streak >= 30 {
        insights.push(Insight::new(
            &format!(
                "Incredible! Your best streak is {} days - a true habit master",
                summary.best_streak
            ),
            InsightLevel::Low,
            "Streak",
        ));
    } else if summary.best_streak >= 7 {
        insights.push(Insight::new(
            &format!(
                "Your best streak is {} days - keep going to reach a full month!",
                summary.best_streak
            ),
            InsightLevel::Low,
            "Streak",
        ));
    }

    insights
}

fn rate_insights(analytics: &Analytics) -> Vec<Insight> {
    let mut insights = Vec::new();

    if analytics.total_completions == 0 {
        return insights;
    }

    if analytics.completion_rate >= 80.0 {
        insights.push(Insight::new(
            &format!(
                "Your completion rate is {:.0}% - excellent consistency!",
                analytics.completion_rate
            ),
            InsightLevel::Low,
            "Consistency",
        ));
    } else if analytics.completion_rate >= 60.0 {
        insights.push(
            Insight::new(
                &format!(
                    "Your completion rate is {:.0}% - there's room to improve",
                    analytics.completion_rate
                ),
                InsightLevel::Medium,
                "Consistency",
            )
            .with_suggestion("Pick your weakest habit and focus on it this week"),
        );
    }

    insights
}

fn category_insights(analytics: &Analytics) -> Vec<Insight> {
    let mut insights = Vec::new();

    if analytics.total_completions == 0 {
        return insights;
    }

    let strongest = analytics
        .categories
        .iter()
        .filter(|(_, s)| s.count > 0)
        .max_by(|a, b| {
            a.1.percentage
                .partial_cmp(&b.1.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some((category, stats)) = strongest {
        if stats.percentage > 0.0 {
            insights.push(Insight::new(
                &format!(
                    "Your strongest category is {} with {:.0}% of your completions",
                    category, stats.percentage
                ),
                InsightLevel::Low,
                "Categories",
            ));
        }
    }

    insights
}

fn trend_insights(analytics: &Analytics) -> Vec<Insight> {
    let mut insights = Vec::new();

    if analytics.weekly_trend.len() < 7 {
        return insights;
    }

    let earlier: usize = analytics.weekly_trend[..3].iter().map(|d| d.completions).sum();
    let recent: usize = analytics.weekly_trend[4..].iter().map(|d| d.completions).sum();

    if recent > earlier && recent > 0 {
        insights.push(Insight::new(
            "You're on an upward trend - the last few days beat the start of the week",
            InsightLevel::Low,
            "Trend",
        ));
    }

    insights
}
