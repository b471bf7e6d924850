//! Form intake: raw dialog values to validated records.
//!
//! Drafts hold exactly what the dialogs collect. Validation is limited to
//! presence and parseability; nothing here checks new jobs against existing
//! ones, so overlapping bookings for a cleaner are accepted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    parse_time, Availability, CleanerId, CleanerProfile, ClientId, ClientPreferences,
    ClientProfile, JobId, JobRecord, JobStatus,
};

/// Wire format for dates typed into a date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("A date is required")]
    MissingDate,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("A time is required")]
    MissingTime,

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("No cleaners available to assign")]
    EmptyRoster,
}

/// Values collected by the "Create New Job" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    pub date: Option<NaiveDate>,
    pub time: String,
    pub client: String,
    pub address: String,
    /// Selected cleaner id, if any.
    pub cleaner_id: Option<String>,
    pub notes: String,
}

/// How the cleaner on a new job was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CleanerResolution {
    /// The selected id was found in the roster.
    Selected,
    /// The selection was missing or unknown; the first roster entry was used.
    Fallback { requested: Option<String> },
}

/// A job built from a draft, plus how its cleaner was resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub job: JobRecord,
    pub resolution: CleanerResolution,
}

/// Validate a job draft and assemble a `Scheduled` job.
///
/// An unknown or missing cleaner selection does not reject the draft: the
/// first cleaner of `roster` is assigned instead and the outcome says so.
pub fn create_job(draft: &JobDraft, roster: &[CleanerProfile]) -> Result<NewJob, IntakeError> {
    let date = draft.date.ok_or(IntakeError::MissingDate)?;
    let time = require_time(&draft.time)?;
    let client = require_text("client", &draft.client)?;
    let address = require_text("address", &draft.address)?;
    let (cleaner, resolution) = resolve_cleaner(draft.cleaner_id.as_deref(), roster)?;

    let job = JobRecord {
        id: JobId::generate(),
        date,
        time,
        address,
        cleaner: cleaner.to_ref(),
        status: JobStatus::Scheduled,
        client,
        title: None,
        notes: optional_text(&draft.notes),
        rating: None,
        feedback: None,
        cost: None,
    };

    log::debug!(
        "Created job id={} for cleaner={} on {}",
        job.id,
        job.cleaner.id,
        job.date
    );
    Ok(NewJob { job, resolution })
}

/// Find `requested` in `roster`, falling back to the first entry.
pub fn resolve_cleaner<'a>(
    requested: Option<&str>,
    roster: &'a [CleanerProfile],
) -> Result<(&'a CleanerProfile, CleanerResolution), IntakeError> {
    if let Some(found) = requested.and_then(|id| roster.iter().find(|c| c.id.as_str() == id)) {
        return Ok((found, CleanerResolution::Selected));
    }

    let first = roster.first().ok_or(IntakeError::EmptyRoster)?;
    log::warn!(
        "Cleaner selection {:?} not found, assigning first cleaner id={}",
        requested,
        first.id
    );
    Ok((
        first,
        CleanerResolution::Fallback {
            requested: requested.map(str::to_string),
        },
    ))
}

/// Values collected by the "Assign New Job" dialog on a cleaner's page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub address: String,
    pub client: String,
}

/// Build a `Scheduled` job for a specific cleaner from an assignment draft.
pub fn assign_job(
    draft: &AssignmentDraft,
    cleaner: &CleanerProfile,
) -> Result<JobRecord, IntakeError> {
    let title = require_text("title", &draft.title)?;
    let date = require_date(&draft.date)?;
    let time = require_time(&draft.time)?;
    let address = require_text("address", &draft.address)?;
    let client = require_text("client", &draft.client)?;

    Ok(JobRecord {
        id: JobId::generate(),
        date,
        time,
        address,
        cleaner: cleaner.to_ref(),
        status: JobStatus::Scheduled,
        client,
        title: Some(title),
        notes: None,
        rating: None,
        feedback: None,
        cost: None,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub avatar: Option<String>,
    pub availability: Availability,
    pub specialties: Vec<String>,
}

impl Default for CleanerDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            avatar: None,
            availability: Availability::Available,
            specialties: Vec::new(),
        }
    }
}

/// New roster entry with no rating and no completed jobs yet.
pub fn create_cleaner(
    draft: &CleanerDraft,
    join_date: NaiveDate,
) -> Result<CleanerProfile, IntakeError> {
    let name = require_text("name", &draft.name)?;
    Ok(CleanerProfile {
        id: CleanerId::generate(),
        name,
        phone: draft.phone.trim().to_string(),
        email: draft.email.trim().to_string(),
        avatar: draft.avatar.as_deref().and_then(optional_text),
        rating: 0.0,
        total_jobs: 0,
        availability: draft.availability,
        specialties: draft
            .specialties
            .iter()
            .filter_map(|s| optional_text(s))
            .collect(),
        join_date,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub avatar: Option<String>,
    pub preferences: ClientPreferences,
}

pub fn create_client(
    draft: &ClientDraft,
    join_date: NaiveDate,
) -> Result<ClientProfile, IntakeError> {
    let name = require_text("name", &draft.name)?;
    Ok(ClientProfile {
        id: ClientId::generate(),
        name,
        email: draft.email.trim().to_string(),
        phone: draft.phone.trim().to_string(),
        address: draft.address.trim().to_string(),
        avatar: draft.avatar.as_deref().and_then(optional_text),
        join_date,
        total_jobs: 0,
        preferences: draft.preferences.clone(),
    })
}

fn require_text(field: &'static str, raw: &str) -> Result<String, IntakeError> {
    optional_text(raw).ok_or(IntakeError::EmptyField(field))
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn require_date(raw: &str) -> Result<NaiveDate, IntakeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(IntakeError::MissingDate);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| IntakeError::InvalidDate(raw.to_string()))
}

fn require_time(raw: &str) -> Result<chrono::NaiveTime, IntakeError> {
    if raw.trim().is_empty() {
        return Err(IntakeError::MissingTime);
    }
    parse_time(raw).map_err(|_| IntakeError::InvalidTime(raw.trim().to_string()))
}

#[cfg(test)]
#[path = "intake_tests.rs"]
mod intake_tests;
