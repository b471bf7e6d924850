//! Job scheduler screen: calendar views, filter dialog and job creation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CleanerProfile, JobRecord, JobStatus};
use crate::services::calendar::{self, Direction, ViewMode};
use crate::services::filter::{self, FilterError, JobFilter};
use crate::services::intake::{self, IntakeError, JobDraft, NewJob};

// =========================================================
// Scheduler types
// =========================================================

/// One calendar day with the (filtered) jobs falling on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub is_today: bool,
    pub jobs: Vec<JobRecord>,
}

impl DayColumn {
    /// Renders as "No jobs" when true.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Monday-to-Sunday grid shown in week view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekView {
    pub days: Vec<DayColumn>,
    pub filter_active: bool,
}

/// Complete scheduler payload for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerData {
    pub view_mode: ViewMode,
    pub current_date: NaiveDate,
    pub filters: JobFilter,
    pub days: Vec<DayColumn>,
    /// Jobs visible across all `days`.
    pub visible_count: usize,
}

/// View state of the scheduler screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerScreen {
    pub current_date: NaiveDate,
    pub view_mode: ViewMode,
    pub filters: JobFilter,
    pub create_job_open: bool,
    pub filters_open: bool,
    pub draft: JobDraft,
}

impl SchedulerScreen {
    /// Fresh screen focused on `today`, which is also the draft's default date.
    pub fn new(today: NaiveDate, view_mode: ViewMode) -> Self {
        Self {
            current_date: today,
            view_mode,
            filters: JobFilter::default(),
            create_job_open: false,
            filters_open: false,
            draft: JobDraft {
                date: Some(today),
                ..JobDraft::default()
            },
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.current_date = calendar::navigate(self.current_date, self.view_mode, direction);
    }

    pub fn open_create_job(&mut self) {
        self.create_job_open = true;
    }

    /// Cancel: close the dialog and keep what was typed.
    pub fn close_create_job(&mut self) {
        self.create_job_open = false;
    }

    pub fn open_filters(&mut self) {
        self.filters_open = true;
    }

    pub fn close_filters(&mut self) {
        self.filters_open = false;
    }

    /// Cleaner select; `""` or `"all"` clears the criterion.
    pub fn set_cleaner_filter(&mut self, cleaner: &str) {
        self.filters.cleaner_id = match cleaner {
            "" | filter::ALL_SENTINEL => None,
            id => Some(id.into()),
        };
    }

    /// Status select; labels must be exact.
    pub fn set_status_filter(&mut self, status: &str) -> Result<(), FilterError> {
        self.filters.status = filter::parse_status_selection(status)?;
        Ok(())
    }

    pub fn set_status(&mut self, status: Option<JobStatus>) {
        self.filters.status = status;
    }

    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.filters.date_from = from;
        self.filters.date_to = to;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// All jobs passing the active filter, in input order.
    pub fn visible_jobs<'a>(&self, jobs: &'a [JobRecord]) -> Vec<&'a JobRecord> {
        filter::filter_jobs(jobs, &self.filters)
    }

    /// The focused day with its filtered jobs.
    pub fn day_view(&self, jobs: &[JobRecord], today: NaiveDate) -> DayColumn {
        self.column(&self.visible_jobs(jobs), self.current_date, today)
    }

    /// The focused week with filtered jobs grouped per day.
    pub fn week_view(&self, jobs: &[JobRecord], today: NaiveDate) -> WeekView {
        let visible = self.visible_jobs(jobs);
        WeekView {
            days: calendar::week_days(self.current_date)
                .into_iter()
                .map(|day| self.column(&visible, day, today))
                .collect(),
            filter_active: !self.filters.is_unset(),
        }
    }

    /// Payload for whichever view mode is active.
    pub fn data(&self, jobs: &[JobRecord], today: NaiveDate) -> SchedulerData {
        let days = match self.view_mode {
            ViewMode::Day => vec![self.day_view(jobs, today)],
            ViewMode::Week => self.week_view(jobs, today).days,
        };
        SchedulerData {
            view_mode: self.view_mode,
            current_date: self.current_date,
            filters: self.filters.clone(),
            visible_count: days.iter().map(|d| d.jobs.len()).sum(),
            days,
        }
    }

    /// Submit the create-job dialog.
    ///
    /// On success the dialog closes, the draft resets (date back to `today`)
    /// and the new job is handed back; storing it is up to the caller. On
    /// failure the dialog stays open with the draft intact.
    pub fn submit_job(
        &mut self,
        roster: &[CleanerProfile],
        today: NaiveDate,
    ) -> Result<NewJob, IntakeError> {
        let new_job = intake::create_job(&self.draft, roster)?;
        self.draft = JobDraft {
            date: Some(today),
            ..JobDraft::default()
        };
        self.create_job_open = false;
        Ok(new_job)
    }

    fn column(&self, visible: &[&JobRecord], date: NaiveDate, today: NaiveDate) -> DayColumn {
        DayColumn {
            date,
            is_today: date == today,
            jobs: calendar::jobs_for_date(visible.iter().copied(), date)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
