//! TourLMS - learning progression core
//!
//! Leveling, achievements, course enrollment, forum ranking and the
//! leaderboard behind the TourLMS learning app.

pub mod error;
pub mod config;
pub mod progression;
pub mod forum;
pub mod courses;
pub mod leaderboard;
pub mod data;
pub mod save;

// Re-export commonly used types
pub use error::{LmsError, Result};
pub use progression::{ExperienceProfile, compute_level};
pub use forum::{CategoryFilter, CategoryInfo, ForumBoard, ForumPost, ForumTab, SortMode, rank, list_categories};
pub use courses::{Learner, CourseCatalog};
