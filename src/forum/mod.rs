//! Discussion forum
//!
//! Posts, categories, the ranking pipeline behind the topic tabs, and the
//! board that owns forum state.

pub mod post;
pub mod categories;
pub mod ranking;
pub mod board;

pub use post::{Author, Comment, ForumPost};
pub use categories::{CategoryDef, CategoryInfo, default_categories, list_categories};
pub use ranking::{CategoryFilter, ForumTab, SortMode, rank};
pub use board::{ForumBoard, ForumStats, ForumView, NewPost};
