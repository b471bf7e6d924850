//! Home screen: job metrics panel, quick actions and notification centre.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Availability, CleanerId, CleanerProfile, JobRecord, Notification, NotificationId};
use crate::services::metrics::{self, ActiveWorkers};
use crate::services::notifications;

/// Roster line in the "Active Cleaners" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: CleanerId,
    pub name: String,
    pub availability: Availability,
}

/// Everything the metrics panel and notification badge display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub todays_jobs: usize,
    pub completed_jobs: usize,
    /// Completed share of today's jobs, in percent.
    pub completion_rate: f64,
    pub active_workers: ActiveWorkers,
    pub roster: Vec<RosterEntry>,
    pub unread_notifications: usize,
}

/// Compute the home screen summary for `today`.
pub fn dashboard_summary(
    jobs: &[JobRecord],
    cleaners: &[CleanerProfile],
    notifications: &[Notification],
    today: NaiveDate,
) -> DashboardSummary {
    let todays = metrics::todays_jobs(jobs, today);
    DashboardSummary {
        date: today,
        todays_jobs: todays.len(),
        completed_jobs: todays.iter().filter(|j| j.is_completed()).count(),
        completion_rate: metrics::completion_rate(&todays),
        active_workers: metrics::active_workers(cleaners),
        roster: cleaners
            .iter()
            .map(|c| RosterEntry {
                id: c.id.clone(),
                name: c.name.clone(),
                availability: c.availability,
            })
            .collect(),
        unread_notifications: notifications::unread_count(notifications),
    }
}

/// View state of the home screen.
///
/// Notifications are owned here because mark-as-read is the one mutation
/// the screen performs on its records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardScreen {
    pub create_job_open: bool,
    pub assign_cleaner_open: bool,
    pub notifications: Vec<Notification>,
}

impl DashboardScreen {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            ..Self::default()
        }
    }

    pub fn open_create_job(&mut self) {
        self.create_job_open = true;
    }

    pub fn open_assign_cleaner(&mut self) {
        self.assign_cleaner_open = true;
    }

    /// Quick-action dialogs only close; their submit is a placeholder.
    pub fn close_dialogs(&mut self) {
        self.create_job_open = false;
        self.assign_cleaner_open = false;
    }

    pub fn unread_count(&self) -> usize {
        notifications::unread_count(&self.notifications)
    }

    pub fn mark_as_read(&mut self, id: &NotificationId) -> bool {
        notifications::mark_as_read(&mut self.notifications, id)
    }

    pub fn summary(
        &self,
        jobs: &[JobRecord],
        cleaners: &[CleanerProfile],
        today: NaiveDate,
    ) -> DashboardSummary {
        dashboard_summary(jobs, cleaners, &self.notifications, today)
    }
}
