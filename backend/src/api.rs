//! Public API surface for the dashboard backend.
//!
//! This file consolidates the types a renderer consumes.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    Availability, CleanerId, CleanerProfile, CleanerRef, ClientId, ClientPreferences,
    ClientProfile, JobId, JobRecord, JobStatus, Notification, NotificationId, NotificationKind,
    Rating, SeedData,
};
pub use crate::screens::cleaners::CleanerDetail;
pub use crate::screens::clients::ClientDetail;
pub use crate::screens::clients::ClientTab;
pub use crate::screens::clients::FeedbackEntry;
pub use crate::screens::dashboard::DashboardSummary;
pub use crate::screens::dashboard::RosterEntry;
pub use crate::screens::scheduler::DayColumn;
pub use crate::screens::scheduler::SchedulerData;
pub use crate::screens::scheduler::WeekView;
pub use crate::services::calendar::{Direction, ViewMode};
pub use crate::services::filter::{FilterOutcome, JobFilter};
pub use crate::services::intake::{
    AssignmentDraft, CleanerDraft, CleanerResolution, ClientDraft, JobDraft, NewJob,
};
pub use crate::services::metrics::{ActiveWorkers, JobMetrics};

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
