//! Forum board state
//!
//! The board owns the post list and category definitions. Callers hold it
//! explicitly and pass it where needed; ranking stays a pure read.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::categories::{list_categories, CategoryDef, CategoryInfo};
use super::post::{Author, Comment, ForumPost};
use super::ranking::{rank, CategoryFilter, ForumTab, SortMode};
use crate::error::{LmsError, Result};

/// Input for a new topic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Aggregate figures shown above the topic list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumStats {
    pub total_topics: usize,
    /// Topics plus comments
    pub total_posts: usize,
    /// Distinct authors of topics and comments
    pub active_users: usize,
    /// Topics created on the current day
    pub new_today: usize,
}

/// What a forum tab displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForumView<'a> {
    Posts(Vec<&'a ForumPost>),
    Categories(Vec<CategoryInfo>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumBoard {
    categories: Vec<CategoryDef>,
    posts: Vec<ForumPost>,
    #[serde(default)]
    next_id: u64,
}

impl ForumBoard {
    pub fn new(categories: Vec<CategoryDef>, posts: Vec<ForumPost>) -> Self {
        let next_id = (posts.len() + posts.iter().map(|p| p.comments.len()).sum::<usize>()) as u64 + 1;
        Self {
            categories,
            posts,
            next_id,
        }
    }

    pub fn posts(&self) -> &[ForumPost] {
        &self.posts
    }

    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    pub fn post(&self, post_id: &str) -> Result<&ForumPost> {
        self.posts
            .iter()
            .find(|p| p.id == post_id)
            .ok_or_else(|| LmsError::not_found("post", post_id))
    }

    fn post_mut(&mut self, post_id: &str) -> Result<&mut ForumPost> {
        self.posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| LmsError::not_found("post", post_id))
    }

    pub fn rank(&self, query: &str, filter: &CategoryFilter, mode: SortMode) -> Vec<&ForumPost> {
        rank(&self.posts, query, filter, mode)
    }

    pub fn list_categories(&self) -> Vec<CategoryInfo> {
        list_categories(&self.categories, &self.posts)
    }

    /// Content for a forum tab: a ranked list, or the categories for `Categories`
    pub fn view(&self, tab: ForumTab, query: &str, filter: &CategoryFilter) -> ForumView<'_> {
        match tab.sort_mode() {
            Some(mode) => ForumView::Posts(self.rank(query, filter, mode)),
            None => ForumView::Categories(self.list_categories()),
        }
    }

    /// Add a topic at the front of the board
    pub fn create_post(&mut self, new: NewPost, author: Author, now: DateTime<Utc>) -> Result<&ForumPost> {
        if new.title.trim().is_empty() || new.content.trim().is_empty() {
            return Err(LmsError::invalid("a post needs a title and content"));
        }
        if !self.categories.iter().any(|c| c.id == new.category) {
            return Err(LmsError::invalid(format!("unknown category '{}'", new.category)));
        }

        let id = self.allocate_id("p");
        log::info!("New forum post {} in {} by {}", id, new.category, author.id);
        self.posts.insert(
            0,
            ForumPost {
                id,
                title: new.title,
                content: new.content,
                author,
                category: new.category,
                created_at: now,
                likes: Default::default(),
                comments: Vec::new(),
                views: 0,
                tags: new.tags,
                is_pinned: false,
                is_featured: false,
            },
        );
        Ok(&self.posts[0])
    }

    /// Like the post, or remove the like if `user_id` already liked it.
    ///
    /// Returns whether the post is liked by `user_id` afterwards.
    pub fn toggle_like(&mut self, post_id: &str, user_id: &str) -> Result<bool> {
        let post = self.post_mut(post_id)?;
        if post.likes.remove(user_id) {
            Ok(false)
        } else {
            post.likes.insert(user_id.to_string());
            Ok(true)
        }
    }

    /// Fetch a post for reading, counting the view
    pub fn open_post(&mut self, post_id: &str) -> Result<&ForumPost> {
        let post = self.post_mut(post_id)?;
        post.views += 1;
        Ok(post)
    }

    pub fn reply(&mut self, post_id: &str, author: Author, content: &str, now: DateTime<Utc>) -> Result<&Comment> {
        if content.trim().is_empty() {
            return Err(LmsError::invalid("a reply needs content"));
        }
        // Check existence before burning an id
        self.post(post_id)?;
        let id = self.allocate_id("c");
        let post = self.post_mut(post_id)?;
        post.comments.push(Comment {
            id,
            content: content.to_string(),
            author,
            created_at: now,
            likes: Default::default(),
        });
        let comment = post
            .comments
            .last()
            .ok_or_else(|| LmsError::not_found("comment", post_id))?;
        Ok(comment)
    }

    pub fn stats(&self, now: DateTime<Utc>) -> ForumStats {
        let today = now.date_naive();
        let mut authors: HashSet<&str> = HashSet::new();
        let mut total_posts = 0;
        for post in &self.posts {
            authors.insert(&post.author.id);
            total_posts += 1 + post.comments.len();
            for comment in &post.comments {
                authors.insert(&comment.author.id);
            }
        }
        ForumStats {
            total_topics: self.posts.len(),
            total_posts,
            active_users: authors.len(),
            new_today: self.posts.iter().filter(|p| p.created_at.date_naive() == today).count(),
        }
    }

    fn allocate_id(&mut self, prefix: &str) -> String {
        loop {
            let id = format!("{}{}", prefix, self.next_id);
            self.next_id += 1;
            let taken = self
                .posts
                .iter()
                .any(|p| p.id == id || p.comments.iter().any(|c| c.id == id));
            if !taken {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed::default_posts;
    use crate::forum::categories::default_categories;
    use chrono::TimeZone;

    fn board() -> ForumBoard {
        ForumBoard::new(default_categories(), default_posts())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 12, 9, 0, 0).unwrap()
    }

    fn new_post(category: &str) -> NewPost {
        NewPost {
            title: "Study group".to_string(),
            content: "Anyone up for a weekly call?".to_string(),
            category: category.to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_create_post_goes_first() {
        let mut board = board();
        let before = board.posts().len();
        let id = board
            .create_post(new_post("general"), Author::new("me", "You"), now())
            .unwrap()
            .id
            .clone();
        assert_eq!(board.posts().len(), before + 1);
        assert_eq!(board.posts()[0].id, id);
        assert!(board.posts()[0].is_unanswered());
    }

    #[test]
    fn test_create_post_validation() {
        let mut board = board();
        let mut blank = new_post("general");
        blank.title = "   ".to_string();
        assert!(matches!(
            board.create_post(blank, Author::new("me", "You"), now()),
            Err(LmsError::InvalidInput(_))
        ));
        assert!(matches!(
            board.create_post(new_post("memes"), Author::new("me", "You"), now()),
            Err(LmsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_toggle_like() {
        let mut board = board();
        let id = board.posts()[0].id.clone();
        let before = board.post(&id).unwrap().like_count();
        assert!(board.toggle_like(&id, "me").unwrap());
        assert_eq!(board.post(&id).unwrap().like_count(), before + 1);
        assert!(!board.toggle_like(&id, "me").unwrap());
        assert_eq!(board.post(&id).unwrap().like_count(), before);
        assert!(matches!(board.toggle_like("nope", "me"), Err(LmsError::NotFound { .. })));
    }

    #[test]
    fn test_open_post_counts_views() {
        let mut board = board();
        let id = board.posts()[1].id.clone();
        let views = board.post(&id).unwrap().views;
        board.open_post(&id).unwrap();
        board.open_post(&id).unwrap();
        assert_eq!(board.post(&id).unwrap().views, views + 2);
    }

    #[test]
    fn test_reply_answers_post() {
        let mut board = board();
        let unanswered = board
            .rank("", &CategoryFilter::All, SortMode::Unanswered)
            .first()
            .map(|p| p.id.clone())
            .unwrap();
        board.reply(&unanswered, Author::new("me", "You"), "Great idea", now()).unwrap();
        assert!(!board.post(&unanswered).unwrap().is_unanswered());
        assert!(board
            .rank("", &CategoryFilter::All, SortMode::Unanswered)
            .iter()
            .all(|p| p.id != unanswered));
        assert!(board.reply(&unanswered, Author::new("me", "You"), " ", now()).is_err());
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut board = board();
        let target = board.posts()[0].id.clone();
        for _ in 0..5 {
            board.create_post(new_post("ideas"), Author::new("me", "You"), now()).unwrap();
            board.reply(&target, Author::new("me", "You"), "+1", now()).unwrap();
        }
        let mut ids: Vec<String> = board.posts().iter().map(|p| p.id.clone()).collect();
        ids.extend(board.posts().iter().flat_map(|p| p.comments.iter().map(|c| c.id.clone())));
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_view_by_tab() {
        let board = board();
        match board.view(ForumTab::Categories, "", &CategoryFilter::All) {
            ForumView::Categories(c) => assert_eq!(c.len(), board.categories().len()),
            other => panic!("expected categories, got {:?}", other),
        }
        match board.view(ForumTab::Popular, "", &CategoryFilter::All) {
            ForumView::Posts(p) => assert_eq!(p.len(), board.posts().len()),
            other => panic!("expected posts, got {:?}", other),
        }
    }

    #[test]
    fn test_stats() {
        let mut board = board();
        let stats = board.stats(now());
        assert_eq!(stats.total_topics, board.posts().len());
        assert_eq!(stats.new_today, 0);
        board.create_post(new_post("general"), Author::new("newbie", "New"), now()).unwrap();
        let after = board.stats(now());
        assert_eq!(after.new_today, 1);
        assert_eq!(after.total_posts, stats.total_posts + 1);
        assert_eq!(after.active_users, stats.active_users + 1);
    }
}
