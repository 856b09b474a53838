//! A signed-in learner's session state
//!
//! Enrollment, XP awards and preferences for one user. The learner is an
//! ordinary value owned by the caller; persisting it is the job of
//! `save::profile`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::course::{Course, CourseCatalog};
use super::user::{PreferencesUpdate, Role, User};
use crate::error::{LmsError, Result};
use crate::progression::{beginner_badge, AchievementDef, ExperienceProfile, XpAward, XpLedger};

/// XP granted for enrolling in a course
pub const ENROLLMENT_XP: u64 = 50;

/// Result of an enrollment request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled(XpAward),
    AlreadyEnrolled,
}

/// Dashboard summary for a learner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerStats {
    pub total_enrolled: usize,
    pub experience: ExperienceProfile,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub achievements: usize,
    pub badges: usize,
    /// Mean completion over enrolled courses, 0 when none
    pub average_progress: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Learner {
    pub user: User,
    pub enrolled: Vec<Course>,
    pub ledger: XpLedger,
}

impl Learner {
    pub fn new(user: User) -> Self {
        Self {
            user,
            enrolled: Vec::new(),
            ledger: XpLedger::new(),
        }
    }

    /// Start a session with the role's default course load: students are
    /// placed in every hub course, other roles start empty.
    pub fn sign_in(user: User, catalog: &CourseCatalog) -> Self {
        let enrolled = match user.role {
            Role::Student => catalog.hub.clone(),
            _ => Vec::new(),
        };
        log::info!("Signed in {} ({}) with {} courses", user.id, user.role, enrolled.len());
        Self {
            user,
            enrolled,
            ledger: XpLedger::new(),
        }
    }

    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrolled.iter().any(|c| c.id == course_id)
    }

    /// Enroll in a catalog course, granting enrollment XP the first time
    pub fn enroll(
        &mut self,
        catalog: &CourseCatalog,
        defs: &[AchievementDef],
        course_id: &str,
        now: DateTime<Utc>,
    ) -> Result<EnrollOutcome> {
        let course = catalog
            .find(course_id)
            .ok_or_else(|| LmsError::not_found("course", course_id))?;

        if self.is_enrolled(course_id) {
            log::debug!("{} already enrolled in {}", self.user.id, course_id);
            return Ok(EnrollOutcome::AlreadyEnrolled);
        }

        self.enrolled.push(course.clone());
        log::info!("{} enrolled in {}", self.user.id, course_id);
        if self.enrolled.len() == 1 {
            self.ledger.earn_badge(beginner_badge(now));
        }
        let award = self.award_xp(ENROLLMENT_XP, "Course enrollment", defs, now);
        Ok(EnrollOutcome::Enrolled(award))
    }

    pub fn award_xp(&mut self, amount: u64, reason: &str, defs: &[AchievementDef], now: DateTime<Utc>) -> XpAward {
        let courses = self.enrolled.len() as u32;
        self.ledger.award(amount, reason, now, defs, courses)
    }

    /// Courses this learner runs as a facilitator
    pub fn facilitated_courses<'a>(&self, catalog: &'a CourseCatalog) -> &'a [Course] {
        match self.user.role {
            Role::Facilitator => &catalog.facilitated[..],
            _ => &[],
        }
    }

    pub fn update_preferences(&mut self, update: PreferencesUpdate) {
        self.user.preferences.apply(update);
    }

    pub fn experience(&self) -> ExperienceProfile {
        self.ledger.experience()
    }

    pub fn stats(&self, now: DateTime<Utc>) -> LearnerStats {
        let average_progress = if self.enrolled.is_empty() {
            0.0
        } else {
            self.enrolled.iter().map(|c| c.progress as f32).sum::<f32>() / self.enrolled.len() as f32
        };
        LearnerStats {
            total_enrolled: self.enrolled.len(),
            experience: self.experience(),
            current_streak: self.ledger.streak.current_on(now.date_naive()),
            longest_streak: self.ledger.streak.longest,
            achievements: self.ledger.achievements.len(),
            badges: self.ledger.badges.len(),
            average_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed::default_catalog;
    use crate::progression::default_achievements;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 11, 13, 32, 0).unwrap()
    }

    fn learner() -> Learner {
        Learner::new(User::new("u1", "Akin Zulu", "akin@example.com", Role::Student))
    }

    #[test]
    fn test_enroll_awards_once() {
        let catalog = default_catalog();
        let mut learner = learner();

        let first = learner.enroll(&catalog, &[], "c1", now()).unwrap();
        assert!(matches!(first, EnrollOutcome::Enrolled(_)));
        assert_eq!(learner.ledger.total_xp, ENROLLMENT_XP);
        assert!(learner.ledger.has_badge("beginner"));

        let again = learner.enroll(&catalog, &[], "c1", now()).unwrap();
        assert_eq!(again, EnrollOutcome::AlreadyEnrolled);
        assert_eq!(learner.ledger.total_xp, ENROLLMENT_XP);
        assert_eq!(learner.enrolled.len(), 1);
    }

    #[test]
    fn test_enroll_unknown_course() {
        let catalog = default_catalog();
        let mut learner = learner();
        assert!(matches!(
            learner.enroll(&catalog, &[], "nope", now()),
            Err(LmsError::NotFound { .. })
        ));
        assert!(learner.enrolled.is_empty());
    }

    #[test]
    fn test_enroll_recommended_course_unlocks_achievement() {
        let catalog = default_catalog();
        let defs = default_achievements();
        let mut learner = learner();
        match learner.enroll(&catalog, &defs, "c5", now()).unwrap() {
            EnrollOutcome::Enrolled(award) => {
                assert!(award.unlocked.iter().any(|a| a.id == "first_enrollment"));
                assert!(award.leveled_up());
            }
            EnrollOutcome::AlreadyEnrolled => panic!("expected a new enrollment"),
        }
    }

    #[test]
    fn test_sign_in_by_role() {
        let catalog = default_catalog();
        let student = Learner::sign_in(User::new("u1", "A", "a@x", Role::Student), &catalog);
        assert_eq!(student.enrolled.len(), catalog.hub.len());
        assert!(student.facilitated_courses(&catalog).is_empty());

        let facilitator = Learner::sign_in(User::new("u2", "B", "b@x", Role::Facilitator), &catalog);
        assert!(facilitator.enrolled.is_empty());
        assert_eq!(facilitator.facilitated_courses(&catalog).len(), catalog.facilitated.len());
    }

    #[test]
    fn test_stats() {
        let catalog = default_catalog();
        let mut learner = learner();
        assert_eq!(learner.stats(now()).average_progress, 0.0);
        learner.enroll(&catalog, &[], "c1", now()).unwrap();
        learner.enroll(&catalog, &[], "c2", now()).unwrap();
        let stats = learner.stats(now());
        assert_eq!(stats.total_enrolled, 2);
        assert_eq!(stats.experience.total_xp, 100);
        assert_eq!(stats.experience.level, 2);
        assert_eq!(stats.current_streak, 1);
        assert!((stats.average_progress - 62.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_update_preferences() {
        let mut learner = learner();
        learner.update_preferences(PreferencesUpdate {
            notifications: Some(false),
            dark_mode: None,
        });
        assert!(!learner.user.preferences.notifications);
        assert!(!learner.user.preferences.dark_mode);
    }
}
