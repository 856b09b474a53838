//! Filtering and ordering of forum posts
//!
//! Pinned posts always lead, then featured posts, then the order of the
//! selected sort mode. The sort is stable, so posts that compare equal keep
//! the order they were supplied in.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::post::ForumPost;
use crate::error::LmsError;

/// How a post list is ordered after pin/feature precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Newest first
    Recent,
    /// Most liked first
    Popular,
    /// Only posts without comments
    Unanswered,
}

impl SortMode {
    /// Tertiary comparator applied after pin/feature precedence
    fn compare(&self, a: &ForumPost, b: &ForumPost) -> Ordering {
        match self {
            SortMode::Recent => b.created_at.cmp(&a.created_at),
            SortMode::Popular => b.like_count().cmp(&a.like_count()),
            SortMode::Unanswered => b.is_unanswered().cmp(&a.is_unanswered()),
        }
    }
}

/// The tabs of the forum screen.
///
/// Three of them rank posts; `Categories` asks for the category list
/// instead and therefore has no `SortMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForumTab {
    /// Newest topics
    Recent,
    /// Most liked topics
    Popular,
    /// Topics nobody has replied to
    Unanswered,
    /// Category list with post counts
    Categories,
}

impl ForumTab {
    /// Ordering for the tab, or `None` for `Categories`
    pub fn sort_mode(&self) -> Option<SortMode> {
        match self {
            ForumTab::Recent => Some(SortMode::Recent),
            ForumTab::Popular => Some(SortMode::Popular),
            ForumTab::Unanswered => Some(SortMode::Unanswered),
            ForumTab::Categories => None,
        }
    }

    /// Name accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            ForumTab::Recent => "recent",
            ForumTab::Popular => "popular",
            ForumTab::Unanswered => "unanswered",
            ForumTab::Categories => "categories",
        }
    }
}

impl FromStr for ForumTab {
    type Err = LmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(ForumTab::Recent),
            "popular" => Ok(ForumTab::Popular),
            "unanswered" => Ok(ForumTab::Unanswered),
            "categories" => Ok(ForumTab::Categories),
            other => Err(LmsError::invalid(format!("unknown forum tab '{}'", other))),
        }
    }
}

impl fmt::Display for ForumTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<ForumTab> for SortMode {
    type Error = LmsError;

    fn try_from(tab: ForumTab) -> Result<Self, Self::Error> {
        tab.sort_mode()
            .ok_or_else(|| LmsError::invalid("the categories tab lists categories and has no sort order"))
    }
}

impl FromStr for SortMode {
    type Err = LmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ForumTab>()?.try_into()
    }
}

/// Category restriction for a ranking query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(key) => key == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = LmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            "" => Err(LmsError::invalid("category filter must not be empty")),
            key => Ok(CategoryFilter::Only(key.to_string())),
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(key: Option<&str>) -> Self {
        key.map_or(CategoryFilter::All, |k| CategoryFilter::Only(k.to_string()))
    }
}

/// Pinned first, then featured
fn precedence(a: &ForumPost, b: &ForumPost) -> Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then_with(|| b.is_featured.cmp(&a.is_featured))
}

/// Filter and order `posts` for display.
///
/// A post is kept when the query is empty or appears (case-insensitively)
/// in its title or content, and its category passes `filter`. The
/// `Unanswered` mode additionally keeps only posts without comments.
pub fn rank<'a>(
    posts: &'a [ForumPost],
    query: &str,
    filter: &CategoryFilter,
    mode: SortMode,
) -> Vec<&'a ForumPost> {
    let needle = query.to_lowercase();

    let mut ranked: Vec<&ForumPost> = posts
        .iter()
        .filter(|p| mode != SortMode::Unanswered || p.is_unanswered())
        .filter(|p| filter.matches(&p.category))
        .filter(|p| p.matches_lowercase(&needle))
        .collect();

    ranked.sort_by(|a, b| precedence(a, b).then_with(|| mode.compare(a, b)));

    log::debug!(
        "Ranked {} of {} posts (mode={:?}, query={:?}, filter={:?})",
        ranked.len(),
        posts.len(),
        mode,
        query,
        filter
    );
    ranked
}
