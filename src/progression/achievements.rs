//! Achievements and badges
//!
//! Achievements unlock when a learner's progress meets a criterion and grant
//! their XP reward. Badges are cosmetic awards tied to milestones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Condition an achievement waits for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    /// Cumulative XP at or above the value
    TotalXp(u64),
    /// Level at or above the value
    LevelReached(u32),
    /// Number of enrolled courses at or above the value
    CoursesEnrolled(u32),
    /// Longest streak at or above the value (days)
    StreakDays(u32),
}

/// The slice of learner progress that criteria are evaluated against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub total_xp: u64,
    pub level: u32,
    pub courses_enrolled: u32,
    pub longest_streak: u32,
}

impl Criterion {
    pub fn is_met(&self, progress: &ProgressSnapshot) -> bool {
        match *self {
            Criterion::TotalXp(xp) => progress.total_xp >= xp,
            Criterion::LevelReached(level) => progress.level >= level,
            Criterion::CoursesEnrolled(n) => progress.courses_enrolled >= n,
            Criterion::StreakDays(days) => progress.longest_streak >= days,
        }
    }
}

/// Achievement definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub xp_reward: u64,
    pub criterion: Criterion,
}

/// An achievement a learner has earned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub xp_reward: u64,
    pub unlocked_at: DateTime<Utc>,
}

impl UnlockedAchievement {
    pub fn from_def(def: &AchievementDef, unlocked_at: DateTime<Utc>) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            icon: def.icon.clone(),
            xp_reward: def.xp_reward,
            unlocked_at,
        }
    }
}

/// Badge rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// A badge held by a learner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: Rarity,
    pub earned_at: DateTime<Utc>,
}

/// Badge granted on a learner's first enrollment
pub fn beginner_badge(earned_at: DateTime<Utc>) -> Badge {
    Badge {
        id: "beginner".to_string(),
        name: "Beginner".to_string(),
        description: "Enrolled in first course".to_string(),
        icon: "star".to_string(),
        rarity: Rarity::Common,
        earned_at,
    }
}

fn def(id: &str, name: &str, description: &str, icon: &str, xp_reward: u64, criterion: Criterion) -> AchievementDef {
    AchievementDef {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        xp_reward,
        criterion,
    }
}

/// Built-in achievement definitions
pub fn default_achievements() -> Vec<AchievementDef> {
    vec![
        // Enrollment
        def("first_enrollment", "First Steps", "Enroll in your first course", "book-open", 50, Criterion::CoursesEnrolled(1)),
        def("course_collector", "Course Collector", "Enroll in three courses", "bookshelf", 100, Criterion::CoursesEnrolled(3)),
        // XP and levels
        def("rising_star", "Rising Star", "Earn 1,000 XP", "star-shooting", 100, Criterion::TotalXp(1000)),
        def("scholar", "Scholar", "Reach level 5", "school", 150, Criterion::LevelReached(5)),
        def("luminary", "Luminary", "Reach level 20", "lightbulb-on", 500, Criterion::LevelReached(20)),
        // Streaks
        def("streak_champion", "Streak Champion", "Keep a 7-day activity streak", "fire", 100, Criterion::StreakDays(7)),
        def("unstoppable", "Unstoppable", "Keep a 30-day activity streak", "lightning-bolt", 300, Criterion::StreakDays(30)),
    ]
}
