//! Cleaner roster entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::job::CleanerRef;

crate::define_id_type!(CleanerId);

/// Highest running rating a cleaner can hold.
pub const MAX_CLEANER_RATING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Busy")]
    Busy,
    #[serde(rename = "Off Duty")]
    OffDuty,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Busy => "Busy",
            Availability::OffDuty => "Off Duty",
        }
    }

    /// Counts toward the active worker total on the dashboard.
    pub fn is_active(&self) -> bool {
        match self {
            Availability::Available | Availability::Busy => true,
            Availability::OffDuty => false,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A service worker's profile and performance stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanerProfile {
    pub id: CleanerId,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Running rating in [0, 5].
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_jobs: u32,
    pub availability: Availability,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub join_date: NaiveDate,
}

impl CleanerProfile {
    /// The compact reference embedded in job records.
    pub fn to_ref(&self) -> CleanerRef {
        CleanerRef {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }

    pub fn has_valid_rating(&self) -> bool {
        (0.0..=MAX_CLEANER_RATING).contains(&self.rating)
    }
}
