//! Experience and leveling
//!
//! Converts cumulative XP into a level and the band of XP bounding it.
//! The width of each band grows by 150 XP per level: 100 XP to go from
//! level 1 to 2, 250 from 2 to 3, 400 from 3 to 4, and so on.

use serde::{Deserialize, Serialize};

use crate::error::{LmsError, Result};

/// XP needed to leave level 1
pub const FIRST_LEVEL_SPAN: u64 = 100;

/// A learner's position on the leveling curve, always derived from `total_xp`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExperienceProfile {
    /// Cumulative XP ever earned
    pub total_xp: u64,
    /// Current level (1-indexed)
    pub level: u32,
    /// XP earned since the start of the current level
    pub current_level_xp: u64,
    /// Width of the current level's XP band
    pub next_level_xp: u64,
}

impl ExperienceProfile {
    /// Walk the leveling curve up to `total_xp`
    pub fn from_total(total_xp: u64) -> Self {
        let mut level: u32 = 1;
        let mut xp_for_current_level: u64 = 0;
        let mut xp_for_next_level: u64 = FIRST_LEVEL_SPAN;

        while total_xp >= xp_for_next_level {
            xp_for_current_level = xp_for_next_level;
            level += 1;
            let span = level_span(level);
            match xp_for_current_level.checked_add(span) {
                Some(next) => xp_for_next_level = next,
                None => {
                    // The next threshold lies beyond u64, so no input can cross it
                    xp_for_next_level = u64::MAX;
                    break;
                }
            }
        }

        Self {
            total_xp,
            level,
            current_level_xp: total_xp - xp_for_current_level,
            next_level_xp: xp_for_next_level - xp_for_current_level,
        }
    }

    /// XP still missing before the next level
    pub fn xp_to_next_level(&self) -> u64 {
        self.next_level_xp - self.current_level_xp
    }

    /// Fraction of the current band completed, in `[0, 1)`
    pub fn progress(&self) -> f64 {
        self.current_level_xp as f64 / self.next_level_xp as f64
    }

    /// Display title for the current level
    pub fn title(&self) -> &'static str {
        level_title(self.level)
    }
}

/// Compute the experience profile for a signed XP total.
///
/// Negative totals are rejected rather than clamped.
pub fn compute_level(total_xp: i64) -> Result<ExperienceProfile> {
    let total = u64::try_from(total_xp)
        .map_err(|_| LmsError::invalid(format!("total XP must be non-negative, got {}", total_xp)))?;
    Ok(ExperienceProfile::from_total(total))
}

/// XP span of the band that starts at `level`
pub fn level_span(level: u32) -> u64 {
    if level == 0 {
        return 0;
    }
    let level = level as u64;
    level * 100 + (level - 1) * 50
}

/// Cumulative XP at which `level` begins
pub fn total_xp_for_level(level: u32) -> u64 {
    (1..level).map(level_span).sum()
}

/// Get a title/rank based on level
pub fn level_title(level: u32) -> &'static str {
    match level {
        0..=2 => "Newcomer",
        3..=4 => "Learner",
        5..=7 => "Scholar",
        8..=10 => "Achiever",
        11..=14 => "Expert",
        15..=18 => "Mentor",
        19..=24 => "Luminary",
        _ => "Legend",
    }
}
