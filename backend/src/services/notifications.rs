use crate::models::{Notification, NotificationId};

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// Mark one notification as read. Returns false when the id is unknown.
pub fn mark_as_read(notifications: &mut [Notification], id: &NotificationId) -> bool {
    match notifications.iter_mut().find(|n| &n.id == id) {
        Some(notification) => {
            notification.mark_read();
            true
        }
        None => {
            log::debug!("mark_as_read: no notification with id={}", id);
            false
        }
    }
}
