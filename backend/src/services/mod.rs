//! Service layer: the logic the screens call into.
//!
//! Everything here is a pure function over record slices (plus the one-way
//! notification read flag). Nothing is cached between calls; screens call
//! these fresh on every interaction.

pub mod calendar;
pub mod filter;
pub mod intake;
pub mod metrics;
pub mod notifications;

#[cfg(test)]
pub(crate) mod fixtures;

pub use calendar::{jobs_for_date, navigate, week_days, Direction, ViewMode};
pub use filter::{apply_filter, filter_jobs, FilterError, FilterOutcome, JobFilter};
pub use intake::{
    assign_job, create_cleaner, create_client, create_job, AssignmentDraft, CleanerDraft,
    CleanerResolution, ClientDraft, IntakeError, JobDraft, NewJob,
};
pub use metrics::{
    active_workers, average_rating, completion_rate, compute_job_metrics, feedback_entries,
    todays_jobs, total_spend, ActiveWorkers, JobMetrics,
};
pub use notifications::{mark_as_read, unread_count};
