//! Job records: the scheduled and completed cleaning engagements.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::cleaner::CleanerId;

crate::define_id_type!(JobId);

/// Wire format for job times (`HH:MM`, as produced by a time input).
pub const TIME_FORMAT: &str = "%H:%M";

const TIME_WITH_SECONDS_FORMAT: &str = "%H:%M:%S";

/// Lifecycle state of a job.
///
/// `Cancelled` only appears in client/cleaner history, but it is part of the
/// same closed set so every match stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "Scheduled")]
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Scheduled,
        JobStatus::InProgress,
        JobStatus::Completed,
        JobStatus::Cancelled,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Scheduled => "Scheduled",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    /// Exact label match; `"completed"` is not `"Completed"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .iter()
            .copied()
            .find(|status| status.label() == s)
            .ok_or_else(|| format!("Unknown job status: {}", s))
    }
}

/// Star rating left on a job, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, String> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(format!(
                "Rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            ))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> Self {
        r.0
    }
}

/// The cleaner a job is assigned to, as shown on a job card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanerRef {
    pub id: CleanerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A single scheduled or completed cleaning engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_time", deserialize_with = "deserialize_time")]
    pub time: NaiveTime,
    pub address: String,
    pub cleaner: CleanerRef,
    pub status: JobStatus,
    pub client: String,
    /// Short label used in history lists ("Weekly House Cleaning").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl JobRecord {
    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

/// `HH:MM`, widened to `HH:MM:SS` when the time carries seconds so that
/// anything [`parse_time`] accepts survives a round trip.
fn serialize_time<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    let format = if time.second() == 0 {
        TIME_FORMAT
    } else {
        TIME_WITH_SECONDS_FORMAT
    };
    serializer.serialize_str(&time.format(format).to_string())
}

fn deserialize_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_time(&raw).map_err(serde::de::Error::custom)
}

/// Parse a time-of-day as entered in a form (`HH:MM`, seconds tolerated).
pub fn parse_time(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, TIME_WITH_SECONDS_FORMAT))
}
