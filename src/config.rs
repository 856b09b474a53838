//! Runtime paths
//!
//! The data directory comes from, in order of precedence: an explicit
//! override (the `--data-dir` flag), the `TOURLMS_DATA_DIR` environment
//! variable, the platform data directory, and finally `./tourlms-data`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

pub const DATA_DIR_ENV: &str = "TOURLMS_DATA_DIR";
pub const PROFILE_FILE: &str = "profile.json";
pub const FORUM_FILE: &str = "forum.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding seed data and saved state
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn resolve(override_dir: Option<&Path>) -> Self {
        let data_dir = override_dir
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(default_data_dir);
        Self { data_dir }
    }

    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(PROFILE_FILE)
    }

    pub fn forum_path(&self) -> PathBuf {
        self.data_dir.join(FORUM_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "tourlms", "TourLMS") {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from("./tourlms-data")
    }
}
