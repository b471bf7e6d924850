use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CleanerProfile, JobRecord};

/// Summary values derived from a job sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMetrics {
    pub total_jobs: usize,
    pub completed_count: usize,
    /// Percentage in [0, 100].
    pub completion_rate: f64,
    pub rated_count: usize,
    pub average_rating: f64,
    pub total_spend: f64,
}

/// Cleaners currently counted as working, out of the whole roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveWorkers {
    pub active: usize,
    pub total: usize,
}

/// Mean of the ratings that are present. Unrated jobs are skipped rather
/// than counted as zero; with no ratings at all the mean is 0.
pub fn average_rating(jobs: &[JobRecord]) -> f64 {
    let ratings: Vec<f64> = jobs
        .iter()
        .filter_map(|j| j.rating)
        .map(|r| f64::from(r.value()))
        .collect();

    if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    }
}

/// Sum of cost over completed jobs. Other statuses and missing costs add 0.
pub fn total_spend(jobs: &[JobRecord]) -> f64 {
    jobs.iter()
        .filter(|j| j.is_completed())
        .map(|j| j.cost.unwrap_or(0.0))
        .sum()
}

/// Percentage of `jobs` that are completed; 0 for an empty sequence.
pub fn completion_rate(jobs: &[JobRecord]) -> f64 {
    if jobs.is_empty() {
        return 0.0;
    }
    let completed = jobs.iter().filter(|j| j.is_completed()).count();
    completed as f64 / jobs.len() as f64 * 100.0
}

pub fn active_workers(cleaners: &[CleanerProfile]) -> ActiveWorkers {
    ActiveWorkers {
        active: cleaners
            .iter()
            .filter(|c| c.availability.is_active())
            .count(),
        total: cleaners.len(),
    }
}

/// All job metrics in one pass over the caller's sequence.
pub fn compute_job_metrics(jobs: &[JobRecord]) -> JobMetrics {
    JobMetrics {
        total_jobs: jobs.len(),
        completed_count: jobs.iter().filter(|j| j.is_completed()).count(),
        completion_rate: completion_rate(jobs),
        rated_count: jobs.iter().filter(|j| j.rating.is_some()).count(),
        average_rating: average_rating(jobs),
        total_spend: total_spend(jobs),
    }
}

/// Jobs scheduled on `today`, in input order.
pub fn todays_jobs(jobs: &[JobRecord], today: NaiveDate) -> Vec<JobRecord> {
    jobs.iter().filter(|j| j.is_on(today)).cloned().collect()
}

/// Jobs that carry client feedback, in input order.
pub fn feedback_entries(jobs: &[JobRecord]) -> Vec<&JobRecord> {
    jobs.iter()
        .filter(|j| j.feedback.as_deref().is_some_and(|f| !f.trim().is_empty()))
        .collect()
}

/// Round a percentage or average to two decimals for display.
pub fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;
