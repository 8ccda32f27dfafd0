use crate::date_key::DateKey;
use crate::models::DayStatus;
use serde::{Deserialize, Serialize};

/// Success and missed days. A day is in at most one of the two lists.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayRecords {
    #[serde(default)]
    pub success_days: Vec<DateKey>,
    #[serde(default)]
    pub missed_days: Vec<DateKey>,
}

impl DayRecords {
    pub fn is_success(&self, day: DateKey) -> bool {
        self.success_days.iter().any(|d| DateKey::same_day(d, &day))
    }

    pub fn is_missed(&self, day: DateKey) -> bool {
        self.missed_days.iter().any(|d| DateKey::same_day(d, &day))
    }

    pub fn status(&self, day: DateKey) -> DayStatus {
        if self.is_success(day) {
            DayStatus::Success
        } else if self.is_missed(day) {
            DayStatus::Missed
        } else {
            DayStatus::Unmarked
        }
    }

    pub fn add_success(&mut self, day: DateKey) {
        if !self.is_success(day) {
            self.success_days.push(day);
        }
    }

    pub fn remove_success(&mut self, day: DateKey) {
        self.success_days.retain(|d| *d != day);
    }

    pub fn add_missed(&mut self, day: DateKey) {
        if !self.is_missed(day) {
            self.missed_days.push(day);
        }
    }

    pub fn remove_missed(&mut self, day: DateKey) {
        self.missed_days.retain(|d| *d != day);
    }

    pub fn sort_success_days(&mut self) {
        self.success_days.sort_unstable();
    }

    /// Drops duplicate entries and any day listed as both success and missed
    /// (success wins). Used on freshly loaded data.
    pub fn dedup(&mut self) {
        self.success_days.sort_unstable();
        self.success_days.dedup();
        self.missed_days.sort_unstable();
        self.missed_days.dedup();
        let success = &self.success_days;
        self.missed_days.retain(|d| success.binary_search(d).is_err());
    }

    pub fn is_disjoint(&self) -> bool {
        !self.missed_days.iter().any(|d| self.is_success(*d))
    }
}
