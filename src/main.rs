//! TourLMS - command line entry point
//!
//! Loads seed data and saved state from the data directory, runs one
//! command, and writes back any state the command changed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use tourlms::config::AppConfig;
use tourlms::courses::{EnrollOutcome, Learner, PreferencesUpdate};
use tourlms::data::{default_user, export_default_data, DataManager};
use tourlms::forum::{Author, CategoryFilter, ForumBoard, ForumTab, ForumView, NewPost};
use tourlms::leaderboard::{standings, summary};
use tourlms::progression::{compute_level, XpAward};
use tourlms::save::{load_board, load_profile, save_board, save_profile, LearnerProfile};

#[derive(Debug, Parser)]
#[command(name = "tourlms")]
#[command(about = "TourLMS learning progression and forum tools", version)]
struct Cli {
    /// Directory holding data files and saved state
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the level band for an XP total
    Level {
        #[arg(allow_hyphen_values = true)]
        xp: i64,
    },
    /// List forum topics for a tab
    Forum(ForumArgs),
    /// Show forum totals
    ForumStats,
    /// Start a new topic
    Post(PostArgs),
    /// Like or unlike a topic
    Like { post_id: String },
    /// Reply to a topic
    Reply { post_id: String, text: String },
    /// Show the leaderboard
    Leaderboard {
        #[arg(long, default_value = "")]
        query: String,
    },
    /// List the course hub and recommendations
    Courses,
    /// Enroll in a course
    Enroll { course_id: String },
    /// Credit XP to the current learner
    Award { xp: u64, reason: String },
    /// Show the current learner's progress
    Profile,
    /// Change notification or theme preferences
    Prefs(PrefsArgs),
    /// Write the built-in data set as RON files
    ExportData {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct ForumArgs {
    /// recent, popular, unanswered or categories
    #[arg(long, default_value = "recent")]
    tab: String,
    #[arg(long, default_value = "")]
    query: String,
    /// Category key, or "all"
    #[arg(long, default_value = "all")]
    category: String,
}

#[derive(Debug, Args)]
struct PostArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    content: String,
    #[arg(long)]
    category: String,
    #[arg(long)]
    tag: Vec<String>,
}

#[derive(Debug, Args)]
struct PrefsArgs {
    #[arg(long)]
    notifications: Option<bool>,
    #[arg(long)]
    dark_mode: Option<bool>,
}

/// Everything a command may read or change
struct Session {
    config: AppConfig,
    data: DataManager,
    json: bool,
}

impl Session {
    fn board(&self) -> Result<ForumBoard> {
        let saved = load_board(&self.config.forum_path())
            .with_context(|| format!("reading {}", self.config.forum_path().display()))?;
        Ok(saved.unwrap_or_else(|| self.data.forum_board()))
    }

    fn store_board(&self, board: &ForumBoard) -> Result<()> {
        save_board(&self.config.forum_path(), board).context("saving forum")
    }

    fn learner(&self) -> Result<Learner> {
        let saved = load_profile(&self.config.profile_path())
            .with_context(|| format!("reading {}", self.config.profile_path().display()))?;
        Ok(match saved {
            Some(profile) => profile.into_learner(&self.data.catalog),
            None => Learner::sign_in(default_user(), &self.data.catalog),
        })
    }

    fn store_learner(&self, learner: &Learner) -> Result<()> {
        save_profile(&self.config.profile_path(), &LearnerProfile::from_learner(learner)).context("saving profile")
    }

    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.data_dir.as_deref());
    log::debug!("Using data directory {}", config.data_dir.display());

    let session = Session {
        data: DataManager::load_from_dir(&config.data_dir),
        config,
        json: cli.json,
    };

    let result = run(&session, cli.command);
    if let Err(ref e) = result {
        log::error!("Command failed: {:#}", e);
    }
    result
}

fn run(session: &Session, command: Command) -> Result<()> {
    let now = Utc::now();

    match command {
        Command::Level { xp } => {
            let profile = compute_level(xp)?;
            session.emit(&profile, || {
                format!(
                    "Level {} ({}): {}/{} XP into the level, {} to go",
                    profile.level,
                    profile.title(),
                    profile.current_level_xp,
                    profile.next_level_xp,
                    profile.xp_to_next_level()
                )
            })
        }

        Command::Forum(args) => {
            let tab: ForumTab = args.tab.parse()?;
            let filter: CategoryFilter = args.category.parse()?;
            let board = session.board()?;
            match board.view(tab, &args.query, &filter) {
                ForumView::Posts(posts) => session.emit(&posts, || {
                    posts
                        .iter()
                        .map(|p| {
                            let mark = if p.is_pinned {
                                "[pinned] "
                            } else if p.is_featured {
                                "[featured] "
                            } else {
                                ""
                            };
                            format!(
                                "{:>4}  {}{}  ({}, {} likes, {} replies)",
                                p.id,
                                mark,
                                p.title,
                                p.category,
                                p.like_count(),
                                p.comment_count()
                            )
                        })
                        .collect::<Vec<_>>()
                        .join("\n")
                }),
                ForumView::Categories(categories) => session.emit(&categories, || {
                    categories
                        .iter()
                        .map(|c| format!("{:<14} {} ({})", c.id, c.name, c.post_count))
                        .collect::<Vec<_>>()
                        .join("\n")
                }),
            }
        }

        Command::ForumStats => {
            let stats = session.board()?.stats(now);
            session.emit(&stats, || {
                format!(
                    "{} topics, {} posts, {} active users, {} new today",
                    stats.total_topics, stats.total_posts, stats.active_users, stats.new_today
                )
            })
        }

        Command::Post(args) => {
            let learner = session.learner()?;
            let mut board = session.board()?;
            let author = Author::new(learner.user.id.clone(), learner.user.name.clone());
            let post = board
                .create_post(
                    NewPost {
                        title: args.title,
                        content: args.content,
                        category: args.category,
                        tags: args.tag,
                    },
                    author,
                    now,
                )?
                .clone();
            session.store_board(&board)?;
            session.emit(&post, || format!("Posted {} in {}", post.id, post.category))
        }

        Command::Like { post_id } => {
            let learner = session.learner()?;
            let mut board = session.board()?;
            let liked = board.toggle_like(&post_id, &learner.user.id)?;
            let count = board.post(&post_id)?.like_count();
            session.store_board(&board)?;
            session.emit(&serde_json::json!({ "post": &post_id, "liked": liked, "likes": count }), || {
                format!("{} {} ({} likes)", if liked { "Liked" } else { "Unliked" }, post_id, count)
            })
        }

        Command::Reply { post_id, text } => {
            let learner = session.learner()?;
            let mut board = session.board()?;
            let author = Author::new(learner.user.id.clone(), learner.user.name.clone());
            let comment = board.reply(&post_id, author, &text, now)?.clone();
            session.store_board(&board)?;
            session.emit(&comment, || format!("Replied to {} as {}", post_id, comment.id))
        }

        Command::Leaderboard { query } => {
            let ranked = standings(&session.data.leaderboard, &query);
            if session.json {
                let body = serde_json::json!({
                    "standings": ranked,
                    "summary": summary(&session.data.leaderboard),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
                return Ok(());
            }
            for s in &ranked {
                println!(
                    "{:>3}. {:<20} {:>6} pts  {:>6} XP  level {}",
                    s.rank, s.entry.name, s.entry.points, s.entry.xp, s.experience.level
                );
            }
            Ok(())
        }

        Command::Courses => {
            let catalog = &session.data.catalog;
            let learner = session.learner()?;
            session.emit(catalog, || {
                let line = |c: &tourlms::courses::Course| {
                    let mark = if learner.is_enrolled(&c.id) { "*" } else { " " };
                    format!("{} {:<4} {} [{}]", mark, c.id, c.title, c.category)
                };
                let mut out = vec!["Course hub:".to_string()];
                out.extend(catalog.hub.iter().map(line));
                out.push("Recommended:".to_string());
                out.extend(catalog.recommended.iter().map(line));
                out.join("\n")
            })
        }

        Command::Enroll { course_id } => {
            let mut learner = session.learner()?;
            let outcome = learner.enroll(&session.data.catalog, &session.data.achievements, &course_id, now)?;
            session.store_learner(&learner)?;
            match outcome {
                EnrollOutcome::Enrolled(award) => report_award(session, &award, &format!("Enrolled in {}", course_id)),
                EnrollOutcome::AlreadyEnrolled => session.emit(
                    &serde_json::json!({ "course": &course_id, "already_enrolled": true }),
                    || format!("Already enrolled in {}", course_id),
                ),
            }
        }

        Command::Award { xp, reason } => {
            let mut learner = session.learner()?;
            let award = learner.award_xp(xp, &reason, &session.data.achievements, now);
            session.store_learner(&learner)?;
            report_award(session, &award, &format!("+{} XP for {}", xp, reason))
        }

        Command::Profile => {
            let learner = session.learner()?;
            let stats = learner.stats(now);
            session.emit(&stats, || {
                let e = stats.experience;
                format!(
                    "{} ({})\nLevel {} {}: {} XP total, {}/{} in level\nCourses: {}  Streak: {} (best {})  Achievements: {}  Badges: {}",
                    learner.user.name,
                    learner.user.role,
                    e.level,
                    e.title(),
                    e.total_xp,
                    e.current_level_xp,
                    e.next_level_xp,
                    stats.total_enrolled,
                    stats.current_streak,
                    stats.longest_streak,
                    stats.achievements,
                    stats.badges
                )
            })
        }

        Command::Prefs(args) => {
            let mut learner = session.learner()?;
            learner.update_preferences(PreferencesUpdate {
                notifications: args.notifications,
                dark_mode: args.dark_mode,
            });
            session.store_learner(&learner)?;
            let prefs = learner.user.preferences;
            session.emit(&prefs, || {
                format!("notifications: {}, dark mode: {}", prefs.notifications, prefs.dark_mode)
            })
        }

        Command::ExportData { out } => {
            let dir = out.unwrap_or_else(|| session.config.data_dir.clone());
            export_default_data(&dir).with_context(|| format!("exporting to {}", dir.display()))?;
            session.emit(&serde_json::json!({ "exported": &dir }), || format!("Wrote data files to {}", dir.display()))
        }
    }
}

fn report_award(session: &Session, award: &XpAward, headline: &str) -> Result<()> {
    let body = serde_json::json!({
        "before": award.before,
        "after": award.after,
        "leveled_up": award.leveled_up(),
        "unlocked": award.unlocked,
    });
    session.emit(&body, || {
        let mut lines = vec![format!("{} (total {} XP)", headline, award.after.total_xp)];
        if award.leveled_up() {
            lines.push(format!("Level up! {} -> {}", award.before.level, award.after.level));
        }
        for a in &award.unlocked {
            lines.push(format!("Achievement unlocked: {} (+{} XP)", a.name, a.xp_reward));
        }
        lines.join("\n")
    })
}
