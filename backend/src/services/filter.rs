//! Job filtering for the scheduler and history views.
//!
//! Every criterion is optional. A record is kept when it satisfies all the
//! criteria that are set; unset criteria match everything. The output keeps
//! the input order and the functions here never touch their inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CleanerId, JobRecord, JobStatus};

/// Select value meaning "no constraint" ("All cleaners", "All statuses").
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown status filter: {0}")]
    UnknownStatus(String),
}

/// Filter criteria for a job sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilter {
    #[serde(default)]
    pub cleaner_id: Option<CleanerId>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    /// Inclusive lower bound.
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound.
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
}

impl JobFilter {
    /// Build criteria from raw select values.
    ///
    /// Blank values and [`ALL_SENTINEL`] leave the criterion unset. Status
    /// labels must match a [`JobStatus`] label exactly.
    pub fn from_selections(
        cleaner: &str,
        status: &str,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            cleaner_id: selection(cleaner).map(CleanerId::from),
            status: parse_status_selection(status)?,
            date_from,
            date_to,
        })
    }

    pub fn with_cleaner(mut self, cleaner_id: impl Into<CleanerId>) -> Self {
        self.cleaner_id = Some(cleaner_id.into());
        self
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// True when no criterion is set, i.e. the filter is the identity.
    pub fn is_unset(&self) -> bool {
        self.cleaner_id.is_none()
            && self.status.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a single record satisfies every set criterion.
    pub fn matches(&self, job: &JobRecord) -> bool {
        if let Some(cleaner_id) = &self.cleaner_id {
            if &job.cleaner.id != cleaner_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if job.status != status {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if job.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if job.date > to {
                return false;
            }
        }
        true
    }
}

/// Raw select value to an optional criterion.
fn selection(raw: &str) -> Option<&str> {
    if raw.is_empty() || raw == ALL_SENTINEL {
        None
    } else {
        Some(raw)
    }
}

/// Status select value to an optional status criterion.
pub fn parse_status_selection(raw: &str) -> Result<Option<JobStatus>, FilterError> {
    match selection(raw) {
        None => Ok(None),
        Some(label) => label
            .parse::<JobStatus>()
            .map(Some)
            .map_err(|_| FilterError::UnknownStatus(label.to_string())),
    }
}

/// Ordered subsequence of `jobs` matching `filter`.
pub fn filter_jobs<'a>(jobs: &'a [JobRecord], filter: &JobFilter) -> Vec<&'a JobRecord> {
    jobs.iter().filter(|job| filter.matches(job)).collect()
}

/// Filter result together with what the view needs to render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOutcome {
    pub jobs: Vec<JobRecord>,
    /// Number of records before filtering.
    pub total: usize,
    pub filter_active: bool,
}

impl FilterOutcome {
    /// An empty outcome renders as the explicit "no records" state.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Owned variant of [`filter_jobs`] for building screen payloads.
pub fn apply_filter(jobs: &[JobRecord], filter: &JobFilter) -> FilterOutcome {
    FilterOutcome {
        jobs: filter_jobs(jobs, filter).into_iter().cloned().collect(),
        total: jobs.len(),
        filter_active: !filter.is_unset(),
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
