//! Users and their preferences

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LmsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Facilitator,
    Admin,
    Learner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Facilitator => "facilitator",
            Role::Admin => "admin",
            Role::Learner => "learner",
        }
    }
}

impl FromStr for Role {
    type Err = LmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "facilitator" => Ok(Role::Facilitator),
            "admin" => Ok(Role::Admin),
            "learner" => Ok(Role::Learner),
            other => Err(LmsError::invalid(format!("unknown role '{}'", other))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub notifications: bool,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
        }
    }
}

/// A partial preferences change; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    pub notifications: Option<bool>,
    pub dark_mode: Option<bool>,
}

impl Preferences {
    pub fn apply(&mut self, update: PreferencesUpdate) {
        if let Some(notifications) = update.notifications {
            self.notifications = notifications;
        }
        if let Some(dark_mode) = update.dark_mode {
            self.dark_mode = dark_mode;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            avatar: None,
            preferences: Preferences::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("Student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("facilitator".parse::<Role>().unwrap(), Role::Facilitator);
        assert!("janitor".parse::<Role>().is_err());
    }

    #[test]
    fn test_preferences_merge() {
        let mut prefs = Preferences::default();
        prefs.apply(PreferencesUpdate {
            notifications: None,
            dark_mode: Some(true),
        });
        assert!(prefs.notifications);
        assert!(prefs.dark_mode);
        prefs.apply(PreferencesUpdate {
            notifications: Some(false),
            dark_mode: None,
        });
        assert!(!prefs.notifications);
        assert!(prefs.dark_mode);
    }
}
