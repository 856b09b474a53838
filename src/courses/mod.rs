//! Courses, users and enrollment

pub mod course;
pub mod user;
pub mod learner;

pub use course::{Course, CourseCatalog};
pub use user::{Preferences, PreferencesUpdate, Role, User};
pub use learner::{EnrollOutcome, Learner, LearnerStats, ENROLLMENT_XP};
