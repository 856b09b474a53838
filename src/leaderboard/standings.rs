//! Leaderboard ranking and summary statistics

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progression::ExperienceProfile;

/// Raw leaderboard record for one participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub points: u64,
    pub xp: u64,
    #[serde(default)]
    pub completed_courses: u32,
    #[serde(default)]
    pub completed_challenges: u32,
    #[serde(default)]
    pub streak: u32,
    pub last_active: DateTime<Utc>,
}

/// An entry with its position and derived level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based; tied entries share a rank and the next rank is skipped
    pub rank: u32,
    pub entry: LeaderboardEntry,
    pub experience: ExperienceProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBucket {
    pub level: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardSummary {
    pub participants: usize,
    pub average_points: f64,
    pub top_score: u64,
    pub total_xp: u64,
    pub average_level: f64,
    pub top_streak: u32,
    /// Levels held by at least one participant, ascending
    pub distribution: Vec<LevelBucket>,
}

/// Rank entries by points, then XP.
///
/// Entries whose name does not contain `query` (case-insensitive) are left
/// out. Ranks are assigned after filtering.
pub fn standings(entries: &[LeaderboardEntry], query: &str) -> Vec<Standing> {
    let needle = query.to_lowercase();
    let mut sorted: Vec<&LeaderboardEntry> = entries
        .iter()
        .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
        .collect();
    sorted.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| b.xp.cmp(&a.xp)));

    let mut result: Vec<Standing> = Vec::with_capacity(sorted.len());
    for (i, entry) in sorted.into_iter().enumerate() {
        let rank = match result.last() {
            Some(prev) if prev.entry.points == entry.points && prev.entry.xp == entry.xp => prev.rank,
            _ => i as u32 + 1,
        };
        result.push(Standing {
            rank,
            entry: entry.clone(),
            experience: ExperienceProfile::from_total(entry.xp),
        });
    }
    result
}

/// Position of a user on the unfiltered board
pub fn position_of(entries: &[LeaderboardEntry], user_id: &str) -> Option<u32> {
    standings(entries, "")
        .into_iter()
        .find(|s| s.entry.user_id == user_id)
        .map(|s| s.rank)
}

pub fn summary(entries: &[LeaderboardEntry]) -> LeaderboardSummary {
    let participants = entries.len();
    let levels: Vec<u32> = entries
        .iter()
        .map(|e| ExperienceProfile::from_total(e.xp).level)
        .collect();

    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for &level in &levels {
        *counts.entry(level).or_default() += 1;
    }
    let distribution = counts
        .into_iter()
        .map(|(level, count)| LevelBucket { level, count })
        .collect();

    let mean = |sum: f64| if participants == 0 { 0.0 } else { sum / participants as f64 };

    LeaderboardSummary {
        participants,
        average_points: mean(entries.iter().map(|e| e.points as f64).sum()),
        top_score: entries.iter().map(|e| e.points).max().unwrap_or(0),
        total_xp: entries.iter().fold(0u64, |acc, e| acc.saturating_add(e.xp)),
        average_level: mean(levels.iter().map(|&l| l as f64).sum()),
        top_streak: entries.iter().map(|e| e.streak).max().unwrap_or(0),
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: &str, name: &str, points: u64, xp: u64, streak: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            user_id: id.to_string(),
            name: name.to_string(),
            role: "Learner".to_string(),
            points,
            xp,
            completed_courses: 0,
            completed_challenges: 0,
            streak,
            last_active: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
        }
    }

    fn board() -> Vec<LeaderboardEntry> {
        vec![
            entry("3", "Michael Brown", 950, 6500, 4),
            entry("1", "Alex Johnson", 1250, 8500, 15),
            entry("2", "Sarah Williams", 1100, 7800, 9),
            entry("4", "Emily Davis", 950, 6500, 2),
            entry("5", "David Wilson", 950, 6000, 1),
        ]
    }

    #[test]
    fn test_order_and_competition_ranks() {
        let s = standings(&board(), "");
        let ranks: Vec<(String, u32)> = s.iter().map(|s| (s.entry.user_id.clone(), s.rank)).collect();
        assert_eq!(
            ranks,
            vec![
                ("1".to_string(), 1),
                ("2".to_string(), 2),
                ("3".to_string(), 3),
                ("4".to_string(), 3),
                ("5".to_string(), 5),
            ]
        );
    }

    #[test]
    fn test_level_derived_from_xp() {
        let s = standings(&board(), "");
        for standing in &s {
            assert_eq!(standing.experience, ExperienceProfile::from_total(standing.entry.xp));
        }
    }

    #[test]
    fn test_query_filters_before_ranking() {
        let s = standings(&board(), "DAVI");
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].entry.name, "Emily Davis");
        assert_eq!(s[0].rank, 1);
        assert_eq!(s[1].rank, 2);
    }

    #[test]
    fn test_position_of() {
        assert_eq!(position_of(&board(), "2"), Some(2));
        assert_eq!(position_of(&board(), "99"), None);
    }

    #[test]
    fn test_summary() {
        let sum = summary(&board());
        assert_eq!(sum.participants, 5);
        assert_eq!(sum.top_score, 1250);
        assert_eq!(sum.top_streak, 15);
        assert_eq!(sum.total_xp, 35300);
        assert!((sum.average_points - 1040.0).abs() < 1e-9);
        let counted: usize = sum.distribution.iter().map(|b| b.count).sum();
        assert_eq!(counted, 5);
        assert!(sum.distribution.iter().all(|b| b.count > 0));
        assert!(sum.distribution.windows(2).all(|w| w[0].level < w[1].level));
    }

    #[test]
    fn test_distribution_is_sparse_for_huge_xp() {
        let entries = vec![
            entry("1", "Whale", 10, 1_000_000_000_000_000_000, 0),
            entry("2", "Newcomer", 5, 0, 0),
            entry("3", "Other Newcomer", 5, 50, 0),
        ];
        let sum = summary(&entries);
        assert_eq!(sum.distribution.len(), 2);
        assert_eq!(sum.distribution[0], LevelBucket { level: 1, count: 2 });
        assert_eq!(sum.distribution[1].level, ExperienceProfile::from_total(1_000_000_000_000_000_000).level);
        assert_eq!(sum.distribution[1].count, 1);
    }

    #[test]
    fn test_empty_summary() {
        let sum = summary(&[]);
        assert_eq!(sum.participants, 0);
        assert_eq!(sum.average_points, 0.0);
        assert!(sum.distribution.is_empty());
        assert!(standings(&[], "").is_empty());
    }
}
