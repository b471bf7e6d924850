//! Field notifications raised by cleaners (check-ins, delays, photos).

use serde::{Deserialize, Serialize};

crate::define_id_type!(NotificationId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    CheckIn,
    CheckOut,
    Delay,
    Photo,
}

impl NotificationKind {
    /// Badge text shown next to the notification.
    pub fn badge(&self) -> &'static str {
        match self {
            NotificationKind::CheckIn => "Check In",
            NotificationKind::CheckOut => "Check Out",
            NotificationKind::Delay => "Delay",
            NotificationKind::Photo => "Photos",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    /// Relative, already formatted ("10 mins ago").
    pub timestamp: String,
    pub cleaner_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_address: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

impl Notification {
    /// Read state only moves forward; there is no way to mark unread.
    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}
