//! The challenge catalog.

use serde::Serialize;

use crate::core::Category;

/// Window a challenge runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    /// Current calendar week.
    Weekly,
    /// Current calendar month.
    Monthly,
}

/// Challenge difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

/// What counts toward a challenge within its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeGoal {
    /// Longest run of consecutive days with at least one completion.
    ConsecutiveActiveDays(u32),
    /// Days on which at least `habits` distinct habits were completed.
    DaysWithAtLeast { habits: usize, days: u32 },
    /// Days with at least one completion in the given category.
    CategoryDays { category: Category, days: u32 },
    /// Days with at least one completion in every category.
    BalancedDays(u32),
}

impl ChallengeGoal {
    /// The target number of days.
    #[must_use]
    pub const fn target(self) -> u32 {
        match self {
            Self::ConsecutiveActiveDays(days)
            | Self::BalancedDays(days)
            | Self::DaysWithAtLeast { days, .. }
            | Self::CategoryDays { days, .. } => days,
        }
    }
}

/// A single challenge definition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Challenge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ChallengeKind,
    pub goal: ChallengeGoal,
    pub icon: &'static str,
    pub points: u32,
    pub difficulty: Difficulty,
}

/// Challenges running over the current week.
pub const WEEKLY_CHALLENGES: [Challenge; 5] = [
    Challenge {
        id: "seven_day_run",
        title: "Seven-Day Run",
        description: "Complete at least one habit 7 days in a row",
        kind: ChallengeKind::Weekly,
        goal: ChallengeGoal::ConsecutiveActiveDays(7),
        icon: "🔥",
        points: 100,
        difficulty: Difficulty::Easy,
    },
    Challenge {
        id: "multitask_pro",
        title: "Multitask Pro",
        description: "Complete 3 different habits in a single day, 5 times this week",
        kind: ChallengeKind::Weekly,
        goal: ChallengeGoal::DaysWithAtLeast { habits: 3, days: 5 },
        icon: "⚡",
        points: 150,
        difficulty: Difficulty::Medium,
    },
    Challenge {
        id: "fitness_first",
        title: "Fitness First",
        description: "Complete a fitness habit on 5 days this week",
        kind: ChallengeKind::Weekly,
        goal: ChallengeGoal::CategoryDays {
            category: Category::Fitness,
            days: 5,
        },
        icon: "🌅",
        points: 120,
        difficulty: Difficulty::Medium,
    },
    Challenge {
        id: "zen_master",
        title: "Zen Master",
        description: "Complete a health habit on 5 days this week",
        kind: ChallengeKind::Weekly,
        goal: ChallengeGoal::CategoryDays {
            category: Category::Health,
            days: 5,
        },
        icon: "🧘",
        points: 100,
        difficulty: Difficulty::Easy,
    },
    Challenge {
        id: "deep_work",
        title: "Deep Work",
        description: "Complete a productivity habit on 4 days this week",
        kind: ChallengeKind::Weekly,
        goal: ChallengeGoal::CategoryDays {
            category: Category::Productivity,
            days: 4,
        },
        icon: "🚀",
        points: 180,
        difficulty: Difficulty::Hard,
    },
];

/// Challenges running over the current month.
pub const MONTHLY_CHALLENGES: [Challenge; 5] = [
    Challenge {
        id: "total_transformation",
        title: "Total Transformation",
        description: "Complete at least one habit every day of the month",
        kind: ChallengeKind::Monthly,
        goal: ChallengeGoal::DaysWithAtLeast { habits: 1, days: 30 },
        icon: "👑",
        points: 500,
        difficulty: Difficulty::Hard,
    },
    Challenge {
        id: "consistent_athlete",
        title: "Consistent Athlete",
        description: "Work out on at least 20 days this month",
        kind: ChallengeKind::Monthly,
        goal: ChallengeGoal::CategoryDays {
            category: Category::Fitness,
            days: 20,
        },
        icon: "💪",
        points: 300,
        difficulty: Difficulty::Medium,
    },
    Challenge {
        id: "steady_learner",
        title: "Steady Learner",
        description: "Complete a productivity habit on 15 days this month",
        kind: ChallengeKind::Monthly,
        goal: ChallengeGoal::CategoryDays {
            category: Category::Productivity,
            days: 15,
        },
        icon: "📚",
        points: 250,
        difficulty: Difficulty::Medium,
    },
    Challenge {
        id: "health_hero",
        title: "Health Hero",
        description: "Complete a health habit on 25 days this month",
        kind: ChallengeKind::Monthly,
        goal: ChallengeGoal::CategoryDays {
            category: Category::Health,
            days: 25,
        },
        icon: "🦸",
        points: 400,
        difficulty: Difficulty::Hard,
    },
    Challenge {
        id: "perfect_balance",
        title: "Perfect Balance",
        description: "Complete a habit from every category on 10 days this month",
        kind: ChallengeKind::Monthly,
        goal: ChallengeGoal::BalancedDays(10),
        icon: "⚖️",
        points: 350,
        difficulty: Difficulty::Hard,
    },
];
