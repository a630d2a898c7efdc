//! The achievement catalog.

use serde::Serialize;

use crate::core::Category;

/// Achievement rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        })
    }
}

/// What has to be true for an achievement to unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Best current streak reaches this many days.
    Streak(u32),
    /// Total completions across all habits reach this count.
    TotalCompletions(usize),
    /// Every habit completed for this many consecutive days ending today.
    PerfectDays(u32),
    /// This many habits tracked.
    HabitCount(usize),
    /// Completions in one category reach this count.
    CategoryMaster(Category, usize),
}

/// A single achievement definition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: Requirement,
    pub points: u32,
    pub rarity: Rarity,
}

/// All achievements, grouped roughly by theme.
pub const ACHIEVEMENTS: [Achievement; 13] = [
    // Streaks
    Achievement {
        id: "first_streak",
        title: "First Steps",
        description: "Complete a habit 3 days in a row",
        icon: "🔥",
        requirement: Requirement::Streak(3),
        points: 50,
        rarity: Rarity::Common,
    },
    Achievement {
        id: "week_warrior",
        title: "Week Warrior",
        description: "Hold a 7-day streak",
        icon: "⚔️",
        requirement: Requirement::Streak(7),
        points: 100,
        rarity: Rarity::Common,
    },
    Achievement {
        id: "month_master",
        title: "Month Master",
        description: "Reach a 30-day streak",
        icon: "👑",
        requirement: Requirement::Streak(30),
        points: 500,
        rarity: Rarity::Epic,
    },
    Achievement {
        id: "legendary_streak",
        title: "Living Legend",
        description: "Hold a 100-day streak",
        icon: "🌟",
        requirement: Requirement::Streak(100),
        points: 2000,
        rarity: Rarity::Legendary,
    },
    // Completions
    Achievement {
        id: "century_club",
        title: "Century Club",
        description: "Log 100 completions in total",
        icon: "💯",
        requirement: Requirement::TotalCompletions(100),
        points: 200,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "thousand_strong",
        title: "A Thousand Victories",
        description: "Log 1000 completions in total",
        icon: "🚀",
        requirement: Requirement::TotalCompletions(1000),
        points: 1000,
        rarity: Rarity::Legendary,
    },
    // Perfect days
    Achievement {
        id: "perfect_week",
        title: "Perfect Week",
        description: "Complete every habit 7 days in a row",
        icon: "✨",
        requirement: Requirement::PerfectDays(7),
        points: 300,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "perfect_month",
        title: "Flawless Month",
        description: "Complete every habit 30 days in a row",
        icon: "💎",
        requirement: Requirement::PerfectDays(30),
        points: 1500,
        rarity: Rarity::Legendary,
    },
    // Collection
    Achievement {
        id: "habit_collector",
        title: "Habit Collector",
        description: "Track 5 habits at once",
        icon: "📚",
        requirement: Requirement::HabitCount(5),
        points: 100,
        rarity: Rarity::Common,
    },
    // Category mastery
    Achievement {
        id: "health_guru",
        title: "Health Guru",
        description: "Log 50 health completions",
        icon: "❤️",
        requirement: Requirement::CategoryMaster(Category::Health, 50),
        points: 250,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "fitness_beast",
        title: "Fitness Beast",
        description: "Log 50 fitness completions",
        icon: "💪",
        requirement: Requirement::CategoryMaster(Category::Fitness, 50),
        points: 250,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "productivity_ninja",
        title: "Productivity Ninja",
        description: "Log 50 productivity completions",
        icon: "⚡",
        requirement: Requirement::CategoryMaster(Category::Productivity, 50),
        points: 250,
        rarity: Rarity::Rare,
    },
    Achievement {
        id: "personal_best",
        title: "Personal Best",
        description: "Log 50 personal completions",
        icon: "🌱",
        requirement: Requirement::CategoryMaster(Category::Personal, 50),
        points: 250,
        rarity: Rarity::Rare,
    },
];
