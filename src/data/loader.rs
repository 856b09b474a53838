//! RON data loader
//!
//! Loads seed content from RON files in the data directory, falling back to
//! the built-in defaults for any file that is missing or unreadable.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::seed::{default_catalog, default_leaderboard, default_posts};
use crate::courses::CourseCatalog;
use crate::error::Result;
use crate::forum::{default_categories, CategoryDef, ForumBoard, ForumPost};
use crate::leaderboard::LeaderboardEntry;
use crate::progression::{default_achievements, AchievementDef};

pub const CATEGORIES_FILE: &str = "categories.ron";
pub const POSTS_FILE: &str = "posts.ron";
pub const COURSES_FILE: &str = "courses.ron";
pub const ACHIEVEMENTS_FILE: &str = "achievements.ron";
pub const LEADERBOARD_FILE: &str = "leaderboard.ron";

/// All content the application starts from
#[derive(Debug, Clone)]
pub struct DataManager {
    pub categories: Vec<CategoryDef>,
    pub posts: Vec<ForumPost>,
    pub catalog: CourseCatalog,
    pub achievements: Vec<AchievementDef>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl DataManager {
    /// Load from `dir`, file by file
    pub fn load_from_dir(dir: &Path) -> Self {
        Self {
            categories: load_or(dir, CATEGORIES_FILE, default_categories),
            posts: load_or(dir, POSTS_FILE, default_posts),
            catalog: load_or(dir, COURSES_FILE, default_catalog),
            achievements: load_or(dir, ACHIEVEMENTS_FILE, default_achievements),
            leaderboard: load_or(dir, LEADERBOARD_FILE, default_leaderboard),
        }
    }

    /// A forum board over the loaded categories and posts
    pub fn forum_board(&self) -> ForumBoard {
        ForumBoard::new(self.categories.clone(), self.posts.clone())
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            posts: default_posts(),
            catalog: default_catalog(),
            achievements: default_achievements(),
            leaderboard: default_leaderboard(),
        }
    }
}

fn load_or<T: DeserializeOwned>(dir: &Path, file: &str, fallback: fn() -> T) -> T {
    let path = dir.join(file);
    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(value) => {
                    log::debug!("Loaded {}", path.display());
                    return value;
                }
                Err(e) => log::warn!("Failed to parse {}: {}. Using defaults.", file, e),
            },
            Err(e) => log::warn!("Failed to read {}: {}. Using defaults.", file, e),
        }
    }
    fallback()
}

fn write_ron<T: Serialize>(dir: &Path, file: &str, value: &T) -> Result<()> {
    let text = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?;
    fs::write(dir.join(file), text)?;
    Ok(())
}

/// Export all default data to RON files for easy editing
pub fn export_default_data(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;

    write_ron(dir, CATEGORIES_FILE, &default_categories())?;
    write_ron(dir, POSTS_FILE, &default_posts())?;
    write_ron(dir, COURSES_FILE, &default_catalog())?;
    write_ron(dir, ACHIEVEMENTS_FILE, &default_achievements())?;
    write_ron(dir, LEADERBOARD_FILE, &default_leaderboard())?;

    log::info!("Exported default data to {}", dir.display());
    Ok(())
}
