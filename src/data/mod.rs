//! Data loading and seed content
//!
//! Seed data (categories, posts, courses, achievements, leaderboard) can be
//! supplied as RON files so the content is editable without recompiling.

pub mod loader;
pub mod seed;

pub use loader::{DataManager, export_default_data};
pub use seed::{default_catalog, default_leaderboard, default_posts, default_user};
