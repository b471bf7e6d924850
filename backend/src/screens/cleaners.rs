//! Cleaner detail screen: profile, job history and job assignment.

use serde::{Deserialize, Serialize};

use crate::models::{CleanerProfile, JobRecord};
use crate::services::intake::{self, AssignmentDraft, IntakeError};
use crate::services::metrics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanerDetail {
    pub profile: CleanerProfile,
    pub history: Vec<JobRecord>,
    /// Mean rating over rated history entries; 0 when none are rated.
    pub history_average_rating: f64,
    pub completed_in_history: usize,
}

impl CleanerDetail {
    /// Renders as "No job history available." when true.
    pub fn has_no_history(&self) -> bool {
        self.history.is_empty()
    }
}

pub fn cleaner_detail(cleaner: &CleanerProfile, history: &[JobRecord]) -> CleanerDetail {
    CleanerDetail {
        profile: cleaner.clone(),
        history: history.to_vec(),
        history_average_rating: metrics::average_rating(history),
        completed_in_history: history.iter().filter(|j| j.is_completed()).count(),
    }
}

/// View state of the cleaner detail screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerScreen {
    pub assign_dialog_open: bool,
    pub assignment: AssignmentDraft,
}

impl CleanerScreen {
    pub fn open_assign_dialog(&mut self) {
        self.assign_dialog_open = true;
    }

    pub fn close_assign_dialog(&mut self) {
        self.assign_dialog_open = false;
    }

    /// Submit the assignment dialog for `cleaner`.
    ///
    /// Success closes the dialog and clears every field; the job is returned
    /// for the caller to store.
    pub fn submit_assignment(&mut self, cleaner: &CleanerProfile) -> Result<JobRecord, IntakeError> {
        let job = intake::assign_job(&self.assignment, cleaner)?;
        log::debug!("Assigned job id={} to cleaner id={}", job.id, cleaner.id);
        self.assignment = AssignmentDraft::default();
        self.assign_dialog_open = false;
        Ok(job)
    }
}
