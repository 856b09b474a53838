//! Progression systems

pub mod xp;
pub mod streak;
pub mod achievements;
pub mod ledger;

pub use xp::{ExperienceProfile, compute_level, level_span, level_title, total_xp_for_level};
pub use streak::Streak;
pub use achievements::{AchievementDef, Badge, Criterion, ProgressSnapshot, Rarity, UnlockedAchievement};
pub use achievements::{beginner_badge, default_achievements};
pub use ledger::{XpAward, XpEntry, XpLedger};
