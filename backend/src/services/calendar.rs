//! Calendar grouping for the scheduler's day and week views.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::JobRecord;

pub const DAYS_PER_WEEK: i64 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    #[default]
    Week,
}

impl ViewMode {
    /// Days moved by one prev/next step.
    pub fn step_days(&self) -> i64 {
        match self {
            ViewMode::Day => 1,
            ViewMode::Week => DAYS_PER_WEEK,
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            _ => Err(format!("Unknown view mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

/// The dates of the Monday-start week containing `date`.
///
/// Always seven days, except at the ends of the representable calendar where
/// only the days that exist are returned.
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    let offset = i64::from(date.weekday().num_days_from_monday());
    (0..DAYS_PER_WEEK)
        .filter_map(|i| date.checked_add_signed(Duration::days(i - offset)))
        .collect()
}

/// Jobs falling on `date`, in input order.
pub fn jobs_for_date<'a, I>(jobs: I, date: NaiveDate) -> Vec<&'a JobRecord>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    jobs.into_iter().filter(|job| job.is_on(date)).collect()
}

/// Move the focused date one step in the given direction.
///
/// A step past the representable calendar leaves the date unchanged.
pub fn navigate(date: NaiveDate, mode: ViewMode, direction: Direction) -> NaiveDate {
    let step = Duration::days(mode.step_days());
    let moved = match direction {
        Direction::Prev => date.checked_sub_signed(step),
        Direction::Next => date.checked_add_signed(step),
    };
    moved.unwrap_or(date)
}
