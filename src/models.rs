use crate::date_key::DateKey;
use crate::records::DayRecords;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The persisted aggregate. Field names match the on-disk JSON blob.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub best_streak: u32,
    #[serde(flatten)]
    pub records: DayRecords,
    #[serde(default)]
    pub last_updated: Option<DateKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Unmarked,
    Success,
    Missed,
}

/// Which day-status state machine the controller runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingMode {
    /// unmarked <-> success
    #[default]
    Binary,
    /// unmarked -> success -> missed -> unmarked
    TriState,
}

impl fmt::Display for TrackingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => f.write_str("binary"),
            Self::TriState => f.write_str("tristate"),
        }
    }
}

impl FromStr for TrackingMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(Self::Binary),
            "tristate" | "tri-state" => Ok(Self::TriState),
            other => Err(format!("unknown tracking mode '{other}'")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub date: String,
    pub mode: TrackingMode,
    pub current_streak: u32,
    pub best_streak: u32,
    pub last_updated: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub date: String,
    pub status: DayStatus,
    pub warning: Option<String>,
    pub progress: ProgressResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckDayResponse {
    pub recalculated: bool,
    pub progress: ProgressResponse,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: String,
    pub day: u32,
    pub selectable: bool,
    pub is_today: bool,
    pub status: DayStatus,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub weekdays: Vec<&'static str>,
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}
