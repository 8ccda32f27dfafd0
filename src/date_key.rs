use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const FORMAT: &str = "%Y-%m-%d";

/// A calendar day in local wall-clock time, with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Truncates a timestamp to its local calendar day, whatever zone it
    /// was expressed in.
    pub fn normalize<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Self {
        Self(timestamp.with_timezone(&Local).date_naive())
    }

    pub fn today() -> Self {
        Self::normalize(&Local::now())
    }

    pub fn same_day(a: &Self, b: &Self) -> bool {
        a == b
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn format(&self) -> String {
        self.0.format(FORMAT).to_string()
    }

    pub fn pred(&self) -> Self {
        Self(self.0 - Duration::days(1))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid date '{0}', expected YYYY-MM-DD")]
pub struct ParseDateKeyError(String);

impl FromStr for DateKey {
    type Err = ParseDateKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if let Ok(date) = NaiveDate::parse_from_str(value, FORMAT) {
            return Ok(Self(date));
        }
        // Older data files stored full instants rather than day strings.
        DateTime::parse_from_rfc3339(value)
            .map(|instant| Self::normalize(&instant))
            .map_err(|_| ParseDateKeyError(value.to_string()))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn format_is_zero_padded() {
        let key = DateKey::from_ymd(2024, 3, 7).unwrap();
        assert_eq!(key.format(), "2024-03-07");
        assert_eq!(key.to_string(), "2024-03-07");
    }

    #[test]
    fn normalize_drops_time_of_day() {
        let morning = Local.with_ymd_and_hms(2024, 1, 3, 9, 0, 0).unwrap();
        let night = Local.with_ymd_and_hms(2024, 1, 3, 21, 0, 0).unwrap();
        let a = DateKey::normalize(&morning);
        let b = DateKey::normalize(&night);
        assert!(DateKey::same_day(&a, &b));
        assert_eq!(a, DateKey::from_ymd(2024, 1, 3).unwrap());
    }

    #[test]
    fn normalize_uses_local_day_for_foreign_zones() {
        let late_utc = Utc.with_ymd_and_hms(2024, 1, 2, 20, 0, 0).unwrap();
        let expected = late_utc.with_timezone(&Local).date_naive();
        assert_eq!(DateKey::normalize(&late_utc).date(), expected);

        let zone = FixedOffset::west_opt(11 * 3600).unwrap();
        let evening = zone.with_ymd_and_hms(2024, 1, 2, 23, 30, 0).unwrap();
        let expected = evening.with_timezone(&Local).date_naive();
        assert_eq!(DateKey::normalize(&evening).date(), expected);
    }

    #[test]
    fn stepping_crosses_month_and_year() {
        let key = DateKey::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(key.pred(), DateKey::from_ymd(2023, 12, 31).unwrap());
        let leap = DateKey::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(leap.pred(), DateKey::from_ymd(2024, 2, 29).unwrap());
    }

    #[test]
    fn parses_plain_days_and_rejects_garbage() {
        let key: DateKey = "2024-01-02".parse().unwrap();
        assert_eq!(key, DateKey::from_ymd(2024, 1, 2).unwrap());
        assert!("2024-13-02".parse::<DateKey>().is_err());
        assert!("yesterday".parse::<DateKey>().is_err());
    }

    #[test]
    fn parses_legacy_instants_into_local_day() {
        let raw = "2024-01-02T12:00:00.000Z";
        let key: DateKey = raw.parse().unwrap();
        let expected = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .date_naive();
        assert_eq!(key.date(), expected);
    }

    #[test]
    fn serde_uses_day_strings() {
        let key = DateKey::from_ymd(2024, 1, 3).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-01-03\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
