//! XP ledger
//!
//! Holds a learner's cumulative XP together with the achievements, badges
//! and streak that depend on it. Levels are recomputed from `total_xp` on
//! demand and never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::achievements::{AchievementDef, Badge, ProgressSnapshot, UnlockedAchievement};
use super::streak::Streak;
use super::xp::ExperienceProfile;

/// One credited XP amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpEntry {
    pub amount: u64,
    pub reason: String,
    pub at: DateTime<Utc>,
}

/// Outcome of crediting XP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpAward {
    pub before: ExperienceProfile,
    pub after: ExperienceProfile,
    /// Achievements unlocked as a consequence of the award
    pub unlocked: Vec<UnlockedAchievement>,
}

impl XpAward {
    pub fn leveled_up(&self) -> bool {
        self.after.level > self.before.level
    }

    pub fn levels_gained(&self) -> u32 {
        self.after.level - self.before.level
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpLedger {
    pub total_xp: u64,
    pub history: Vec<XpEntry>,
    pub achievements: Vec<UnlockedAchievement>,
    pub badges: Vec<Badge>,
    pub streak: Streak,
}

impl XpLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level band for the current total
    pub fn experience(&self) -> ExperienceProfile {
        ExperienceProfile::from_total(self.total_xp)
    }

    /// Credit XP, mark today's activity and unlock any achievements now met
    pub fn award(
        &mut self,
        amount: u64,
        reason: &str,
        now: DateTime<Utc>,
        defs: &[AchievementDef],
        courses_enrolled: u32,
    ) -> XpAward {
        let before = self.experience();
        self.credit(amount, reason, now);
        self.streak.record_activity(now.date_naive());
        let unlocked = self.check_achievements(defs, courses_enrolled, now);
        let after = self.experience();

        if after.level > before.level {
            log::info!("Level up: {} -> {} ({})", before.level, after.level, reason);
        }

        XpAward { before, after, unlocked }
    }

    /// Unlock every achievement whose criterion is met.
    ///
    /// Rewards from one unlock can satisfy another, so this repeats until
    /// a pass unlocks nothing.
    pub fn check_achievements(
        &mut self,
        defs: &[AchievementDef],
        courses_enrolled: u32,
        now: DateTime<Utc>,
    ) -> Vec<UnlockedAchievement> {
        let mut unlocked = Vec::new();
        loop {
            let snapshot = self.snapshot(courses_enrolled);
            let ready: Vec<&AchievementDef> = defs
                .iter()
                .filter(|d| !self.has_achievement(&d.id) && d.criterion.is_met(&snapshot))
                .collect();
            if ready.is_empty() {
                break;
            }
            for def in ready {
                // Definitions may repeat an id
                if self.has_achievement(&def.id) {
                    continue;
                }
                let achievement = UnlockedAchievement::from_def(def, now);
                log::info!("Achievement unlocked: {}", def.id);
                self.achievements.push(achievement.clone());
                if def.xp_reward > 0 {
                    self.credit(def.xp_reward, &format!("Achievement: {}", def.name), now);
                }
                unlocked.push(achievement);
            }
        }
        unlocked
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }

    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b.id == id)
    }

    /// Add a badge unless one with the same id is already held
    pub fn earn_badge(&mut self, badge: Badge) -> bool {
        if self.has_badge(&badge.id) {
            return false;
        }
        log::info!("Badge earned: {}", badge.id);
        self.badges.push(badge);
        true
    }

    fn credit(&mut self, amount: u64, reason: &str, at: DateTime<Utc>) {
        self.total_xp = self.total_xp.saturating_add(amount);
        self.history.push(XpEntry {
            amount,
            reason: reason.to_string(),
            at,
        });
    }

    fn snapshot(&self, courses_enrolled: u32) -> ProgressSnapshot {
        ProgressSnapshot {
            total_xp: self.total_xp,
            level: self.experience().level,
            courses_enrolled,
            longest_streak: self.streak.longest,
        }
    }
}
