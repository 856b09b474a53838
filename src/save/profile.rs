//! Learner profile storage

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{read_json, write_json};
use crate::courses::{CourseCatalog, Learner, User};
use crate::error::{LmsError, Result};
use crate::progression::XpLedger;

/// Current profile version for compatibility
pub const PROFILE_VERSION: u32 = 1;

/// What is stored for a learner. Courses are referenced by id and resolved
/// against the catalog on load; the level is not stored at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub version: u32,
    pub user: User,
    pub enrolled_ids: Vec<String>,
    pub ledger: XpLedger,
}

impl LearnerProfile {
    pub fn from_learner(learner: &Learner) -> Self {
        Self {
            version: PROFILE_VERSION,
            user: learner.user.clone(),
            enrolled_ids: learner.enrolled.iter().map(|c| c.id.clone()).collect(),
            ledger: learner.ledger.clone(),
        }
    }

    /// Rebuild the learner, dropping enrollments the catalog no longer has
    pub fn into_learner(self, catalog: &CourseCatalog) -> Learner {
        let enrolled = self
            .enrolled_ids
            .iter()
            .filter_map(|id| {
                let course = catalog.find(id).cloned();
                if course.is_none() {
                    log::warn!("Enrolled course {} missing from catalog, dropping", id);
                }
                course
            })
            .collect();
        Learner {
            user: self.user,
            enrolled,
            ledger: self.ledger,
        }
    }
}

/// Load a profile. `Ok(None)` when no profile has been saved yet.
pub fn load_profile(path: &Path) -> Result<Option<LearnerProfile>> {
    let Some(profile) = read_json::<LearnerProfile>(path)? else {
        return Ok(None);
    };
    if profile.version != PROFILE_VERSION {
        return Err(LmsError::VersionMismatch {
            expected: PROFILE_VERSION,
            found: profile.version,
        });
    }
    log::info!("Profile loaded from {:?}", path);
    Ok(Some(profile))
}

pub fn save_profile(path: &Path, profile: &LearnerProfile) -> Result<()> {
    write_json(path, profile)?;
    log::info!("Profile saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courses::Role;
    use crate::data::default_catalog;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tourlms-profile-{}-{}", name, std::process::id()))
            .join("profile.json")
    }

    #[test]
    fn test_save_and_load() {
        let catalog = default_catalog();
        let mut learner = Learner::new(User::new("u1", "Akin", "akin@example.com", Role::Student));
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();
        learner.enroll(&catalog, &[], "c2", now).unwrap();

        let path = temp_path("roundtrip");
        save_profile(&path, &LearnerProfile::from_learner(&learner)).unwrap();
        let restored = load_profile(&path).unwrap().unwrap().into_learner(&catalog);
        assert_eq!(restored, learner);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_profile() {
        assert!(load_profile(&temp_path("absent")).unwrap().is_none());
    }

    #[test]
    fn test_version_mismatch() {
        let learner = Learner::new(User::new("u1", "Akin", "akin@example.com", Role::Student));
        let mut profile = LearnerProfile::from_learner(&learner);
        profile.version = 99;
        let path = temp_path("version");
        save_profile(&path, &profile).unwrap();
        assert!(matches!(
            load_profile(&path),
            Err(LmsError::VersionMismatch { expected: 1, found: 99 })
        ));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_unknown_courses_dropped() {
        let learner = Learner::new(User::new("u1", "Akin", "akin@example.com", Role::Student));
        let mut profile = LearnerProfile::from_learner(&learner);
        profile.enrolled_ids = vec!["c1".into(), "gone".into()];
        let restored = profile.into_learner(&default_catalog());
        assert_eq!(restored.enrolled.len(), 1);
        assert_eq!(restored.enrolled[0].id, "c1");
    }
}
