//! Daily activity streaks

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive-day activity tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
    pub last_active: Option<NaiveDate>,
}

impl Streak {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark activity on `day`. Returns true if the streak grew.
    ///
    /// Activity dated before `last_active` is ignored.
    pub fn record_activity(&mut self, day: NaiveDate) -> bool {
        let grew = match self.last_active {
            Some(last) if day <= last => false,
            Some(last) if last.succ_opt() == Some(day) => {
                self.current += 1;
                true
            }
            _ => {
                self.current = 1;
                true
            }
        };
        if grew {
            self.last_active = Some(day);
            self.longest = self.longest.max(self.current);
        }
        grew
    }

    /// The streak as seen on `today`: zero once a full day has been missed
    pub fn current_on(&self, today: NaiveDate) -> u32 {
        match self.last_active {
            Some(last) if last == today || last.succ_opt() == Some(today) => self.current,
            _ => 0,
        }
    }
}
