// File: crates/chart-core/src/bucket.rs
// Summary: Time-bucket modes and their x-axis label formatting.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Aggregation granularity of a series. Only label formatting depends on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketMode {
    Hourly,
    #[default]
    Daily,
    Monthly,
}

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse a bucket timestamp as a naive (local) date-time. Date-only labels
/// resolve to midnight; fractional seconds are accepted. An RFC 3339 `Z` or
/// `±HH:MM` suffix is dropped, keeping the wall-clock time as written.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    // "2024-03-05T14:00:00.123" and friends
    if let Some((head, _frac)) = s.split_once('.') {
        if let Some(dt) = DATETIME_FORMATS.iter().find_map(|f| NaiveDateTime::parse_from_str(head, f).ok()) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}

impl BucketMode {
    pub const ALL: [BucketMode; 3] = [BucketMode::Hourly, BucketMode::Daily, BucketMode::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            BucketMode::Hourly => "hourly",
            BucketMode::Daily => "daily",
            BucketMode::Monthly => "monthly",
        }
    }

    /// X-axis label for a point's timestamp. Labels that do not parse as a
    /// timestamp are shown as given.
    pub fn format_label(&self, raw: &str) -> String {
        match self {
            BucketMode::Monthly => raw.to_string(),
            BucketMode::Hourly => match parse_timestamp(raw) {
                Some(dt) => format!("{}:00", dt.hour()),
                None => raw.to_string(),
            },
            BucketMode::Daily => match parse_timestamp(raw) {
                Some(dt) => format!("{}/{}", dt.month(), dt.day()),
                None => raw.to_string(),
            },
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            BucketMode::Hourly => "Hourly balance trend",
            BucketMode::Daily => "Daily balance trend",
            BucketMode::Monthly => "Monthly balance trend",
        }
    }

    /// Surface id the dashboard uses for this mode's chart.
    pub fn default_target(&self) -> &'static str {
        match self {
            BucketMode::Hourly => "hourlyChart",
            BucketMode::Daily => "dailyChart",
            BucketMode::Monthly => "monthlyChart",
        }
    }
}

impl fmt::Display for BucketMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketMode {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BucketMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownBucketMode(s.to_string()))
    }
}
