//! Courses and the course catalog

use serde::{Deserialize, Serialize};

/// A course as shown in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub facilitator_name: String,
    pub thumbnail: String,
    pub category: String,
    /// Completion percentage (0-100)
    #[serde(default)]
    pub progress: u8,
    pub next_module: String,
}

/// All courses known to the application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCatalog {
    /// Courses listed in the course hub
    pub hub: Vec<Course>,
    /// Suggestions shown on the dashboard
    #[serde(default)]
    pub recommended: Vec<Course>,
    /// Courses run by facilitators
    #[serde(default)]
    pub facilitated: Vec<Course>,
}

impl CourseCatalog {
    /// Find an enrollable course (hub or recommended) by ID
    pub fn find(&self, id: &str) -> Option<&Course> {
        self.hub
            .iter()
            .chain(self.recommended.iter())
            .find(|c| c.id == id)
    }

    /// Get hub courses in a category
    pub fn by_category(&self, category: &str) -> Vec<&Course> {
        self.hub.iter().filter(|c| c.category == category).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed::default_catalog;

    #[test]
    fn test_find_searches_hub_and_recommended() {
        let catalog = default_catalog();
        assert!(catalog.find("c1").is_some());
        assert!(catalog.find("c5").is_some());
        // Facilitated courses are not enrollable
        assert!(catalog.find("c4").is_none());
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_by_category() {
        let catalog = default_catalog();
        let ai = catalog.by_category("AI");
        assert_eq!(ai.len(), 1);
        assert_eq!(ai[0].id, "c1");
    }
}
