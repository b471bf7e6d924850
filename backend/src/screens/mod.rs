//! Per-screen view state and the serialisable payloads each screen renders.
//!
//! Each screen keeps its dialog flags, filter criteria and form drafts in
//! one struct. Record sequences are passed in on every call, so a screen
//! never holds stale copies of store data.

pub mod cleaners;
pub mod clients;
pub mod dashboard;
pub mod scheduler;

pub use cleaners::{cleaner_detail, CleanerDetail, CleanerScreen};
pub use clients::{client_detail, ClientDetail, ClientScreen, ClientTab, FeedbackEntry};
pub use dashboard::{dashboard_summary, DashboardScreen, DashboardSummary, RosterEntry};
pub use scheduler::{DayColumn, SchedulerData, SchedulerScreen, WeekView};
