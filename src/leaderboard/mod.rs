//! Gamified leaderboard

pub mod standings;

pub use standings::{LeaderboardEntry, LeaderboardSummary, LevelBucket, Standing};
pub use standings::{position_of, standings, summary};
