//! Built-in seed content
//!
//! Used when no data files are present, and as the source for
//! `export_default_data`.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};

use crate::courses::{Course, CourseCatalog, Role, User};
use crate::forum::{Author, Comment, ForumPost};
use crate::leaderboard::LeaderboardEntry;

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|n| n.and_utc())
        .unwrap_or_default()
}

fn likers(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn comment(id: &str, content: &str, author: Author, at: DateTime<Utc>, liked_by: &[&str]) -> Comment {
    Comment {
        id: id.to_string(),
        content: content.to_string(),
        author,
        created_at: at,
        likes: likers(liked_by),
    }
}

/// Seed forum topics
pub fn default_posts() -> Vec<ForumPost> {
    let admin = Author::new("admin1", "Admin Team");
    vec![
        ForumPost {
            id: "1".to_string(),
            title: "Welcome to the community forum".to_string(),
            content: "Introduce yourself and tell everyone what you are learning. Please keep discussions respectful.".to_string(),
            author: admin.clone(),
            category: "announcements".to_string(),
            created_at: ts(2023, 5, 1, 10, 0),
            likes: likers(&["user1", "user2", "user3", "user4"]),
            comments: vec![comment(
                "c1",
                "Happy to be here, see you around!",
                Author::new("user1", "Alex Johnson"),
                ts(2023, 5, 1, 11, 30),
                &[],
            )],
            views: 125,
            tags: vec!["welcome".to_string(), "introduction".to_string()],
            is_pinned: true,
            is_featured: false,
        },
        ForumPost {
            id: "2".to_string(),
            title: "Where should a beginner start?".to_string(),
            content: "I just joined. Which course would you take first to get the basics right?".to_string(),
            author: Author::new("user2", "Sarah Williams"),
            category: "questions".to_string(),
            created_at: ts(2023, 5, 10, 14, 25),
            likes: likers(&["user3", "user5", "user7"]),
            comments: vec![
                comment(
                    "c2",
                    "The AI introduction course is a gentle start.",
                    Author::new("user3", "Michael Brown"),
                    ts(2023, 5, 10, 15, 10),
                    &["user2"],
                ),
                comment(
                    "c3",
                    "Read the getting-started guide first, it saves a lot of time.",
                    Author::new("user4", "Emily Davis"),
                    ts(2023, 5, 10, 16, 45),
                    &[],
                ),
            ],
            views: 89,
            tags: vec!["getting-started".to_string(), "help".to_string()],
            is_pinned: false,
            is_featured: false,
        },
        ForumPost {
            id: "3".to_string(),
            title: "Feature request: dark mode".to_string(),
            content: "Studying late at night would be easier on the eyes with a dark theme.".to_string(),
            author: Author::new("user5", "David Wilson"),
            category: "ideas".to_string(),
            created_at: ts(2023, 5, 12, 9, 15),
            likes: likers(&["user1", "user2", "user6", "user7", "user8"]),
            comments: Vec::new(),
            views: 64,
            tags: vec!["feature-request".to_string(), "ui".to_string()],
            is_pinned: false,
            is_featured: true,
        },
        ForumPost {
            id: "4".to_string(),
            title: "Monthly challenge: finish five courses".to_string(),
            content: "Complete five courses this month to earn an exclusive badge.".to_string(),
            author: Author::new("admin2", "Challenge Team"),
            category: "challenges".to_string(),
            created_at: ts(2023, 5, 15, 8, 0),
            likes: likers(&["user1", "user3", "user5", "user9"]),
            comments: vec![comment(
                "c4",
                "Does a course count once every module is done?",
                Author::new("user6", "Jessica Lee"),
                ts(2023, 5, 15, 10, 30),
                &[],
            )],
            views: 112,
            tags: vec!["challenge".to_string(), "badge".to_string()],
            is_pinned: true,
            is_featured: false,
        },
        ForumPost {
            id: "5".to_string(),
            title: "Login fails on Android".to_string(),
            content: "The app shows an error after entering my password on Android. Is anyone else seeing this?".to_string(),
            author: Author::new("user7", "Robert Garcia"),
            category: "feedback".to_string(),
            created_at: ts(2023, 5, 14, 18, 20),
            likes: likers(&["user8"]),
            comments: vec![
                comment(
                    "c5",
                    "Same here on a Pixel.",
                    Author::new("user8", "Olivia Martinez"),
                    ts(2023, 5, 14, 19, 5),
                    &["user7"],
                ),
                comment(
                    "c6",
                    "Thanks for the report, a fix is on the way.",
                    admin,
                    ts(2023, 5, 14, 20, 15),
                    &["user7", "user8", "user9"],
                ),
            ],
            views: 76,
            tags: vec!["bug".to_string(), "android".to_string()],
            is_pinned: false,
            is_featured: false,
        },
    ]
}

fn course(id: &str, title: &str, description: &str, facilitator: &str, category: &str, progress: u8, next_module: &str) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        facilitator_name: facilitator.to_string(),
        thumbnail: format!("https://via.placeholder.com/800x400?text={}", id),
        category: category.to_string(),
        progress,
        next_module: next_module.to_string(),
    }
}

/// The learner a fresh installation signs in as
pub fn default_user() -> User {
    User::new("u1", "Akin Zulu", "akin.zulu@africanintelligence.com", Role::Student)
}

/// Seed course catalog
pub fn default_catalog() -> CourseCatalog {
    CourseCatalog {
        hub: vec![
            course("c1", "Introduction to Artificial Intelligence", "The basics of AI and machine learning.", "Jane Doe", "AI", 50, "Module 2: Machine Learning Basics"),
            course("c2", "Data Science Fundamentals", "Data analysis and visualization techniques.", "John Smith", "Data Science", 75, "Module 3: Data Visualization"),
            course("c3", "Web Development with React", "Build modern web applications.", "Aisha Khan", "Web Development", 20, "Module 1: Components"),
        ],
        recommended: vec![
            course("c5", "Python for Data Analysis", "Python for data science work.", "Sarah Johnson", "Data Science", 0, "Module 1: Python Basics"),
            course("c6", "Deep Learning Essentials", "Deep learning techniques and frameworks.", "Michael Brown", "Deep Learning", 0, "Module 1: Neural Networks"),
        ],
        facilitated: vec![
            course("c4", "Advanced Machine Learning", "Neural networks and deep learning in depth.", "Jane Doe", "AI", 0, "Module 1: Neural Networks"),
        ],
    }
}

/// Seed leaderboard participants
pub fn default_leaderboard() -> Vec<LeaderboardEntry> {
    [
        ("1", "Alex Johnson", "Manager", 1250, 8500, 12, 8, 15),
        ("2", "Sarah Williams", "Developer", 1100, 7800, 10, 7, 12),
        ("3", "Michael Brown", "Designer", 950, 6500, 8, 6, 10),
        ("4", "Emily Davis", "Analyst", 850, 5800, 7, 5, 8),
        ("5", "David Wilson", "Engineer", 800, 5200, 6, 4, 7),
        ("6", "Jessica Lee", "Marketer", 750, 4800, 5, 4, 6),
        ("7", "Robert Garcia", "Support", 700, 4200, 5, 3, 5),
        ("8", "Olivia Martinez", "Writer", 650, 3800, 4, 3, 4),
        ("9", "James Taylor", "Researcher", 600, 3200, 3, 2, 3),
        ("10", "Sophia Anderson", "Student", 550, 2800, 3, 2, 2),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (id, name, role, points, xp, courses, challenges, streak))| LeaderboardEntry {
        user_id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        points,
        xp,
        completed_courses: courses,
        completed_challenges: challenges,
        streak,
        last_active: ts(2023, 5, 15 - i as u32, 10, 30),
    })
    .collect()
}
