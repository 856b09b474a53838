//! Forum category definitions

use serde::{Deserialize, Serialize};

use super::post::ForumPost;

/// A category a post can be filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// A category with its post count, for a category picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub post_count: usize,
}

/// List `defs` in their defined order, counting the posts filed under each
pub fn list_categories(defs: &[CategoryDef], posts: &[ForumPost]) -> Vec<CategoryInfo> {
    defs.iter()
        .map(|def| CategoryInfo {
            id: def.id.clone(),
            name: def.name.clone(),
            icon: def.icon.clone(),
            post_count: posts.iter().filter(|p| p.category == def.id).count(),
        })
        .collect()
}

/// Built-in category set
pub fn default_categories() -> Vec<CategoryDef> {
    [
        ("general", "General Discussion", "forum"),
        ("questions", "Questions", "help-circle"),
        ("announcements", "Announcements", "bullhorn"),
        ("feedback", "Feedback", "message-alert"),
        ("ideas", "Ideas", "lightbulb-on"),
        ("challenges", "Challenges", "trophy"),
    ]
    .into_iter()
    .map(|(id, name, icon)| CategoryDef {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forum::post::Author;
    use chrono::{TimeZone, Utc};

    fn post_in(category: &str) -> ForumPost {
        ForumPost {
            id: category.to_string(),
            title: String::new(),
            content: String::new(),
            author: Author::new("u1", "Alex"),
            category: category.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
            likes: Default::default(),
            comments: vec![],
            views: 0,
            tags: vec![],
            is_pinned: false,
            is_featured: false,
        }
    }

    #[test]
    fn test_counts_follow_posts() {
        let posts = vec![post_in("ideas"), post_in("ideas"), post_in("general"), post_in("unknown")];
        let infos = list_categories(&default_categories(), &posts);
        assert_eq!(infos.len(), 6);
        assert_eq!(infos[0].id, "general");
        assert_eq!(infos[0].post_count, 1);
        let ideas = infos.iter().find(|c| c.id == "ideas").unwrap();
        assert_eq!(ideas.post_count, 2);
        assert_eq!(infos.iter().map(|c| c.post_count).sum::<usize>(), 3);
    }

    #[test]
    fn test_empty_posts_still_list_categories() {
        let infos = list_categories(&default_categories(), &[]);
        assert_eq!(infos.len(), 6);
        assert!(infos.iter().all(|c| c.post_count == 0));
    }
}
