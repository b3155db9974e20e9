use std::time::Duration;

use log::debug;

/// How long a notification stays on screen.
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(2);

pub const MSG_COPIED: &str = "Password copied!";
pub const MSG_COPY_FAILED: &str = "Copy failed";
pub const MSG_CHOOSE_CLASS: &str = "Select at least one character type!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Handed to whoever owns the timer: hide notification `id` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTicket {
    pub id: u64,
    pub delay: Duration,
}

/// Holds at most one visible notification.
///
/// Every [`show`](Self::show) replaces the current message and bumps the id,
/// so only the newest ticket can hide it.
#[derive(Debug)]
pub struct NotificationPresenter {
    current: Option<Notification>,
    next_id: u64,
    duration: Duration,
}

impl Default for NotificationPresenter {
    fn default() -> Self {
        Self::new(NOTIFICATION_DURATION)
    }
}

impl NotificationPresenter {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            next_id: 0,
            duration,
        }
    }

    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationTicket {
        self.next_id += 1;
        let notification = Notification {
            id: self.next_id,
            kind,
            message: message.into(),
        };
        debug!("Showing notification {}: {}", notification.id, notification.message);
        self.current = Some(notification);

        NotificationTicket {
            id: self.next_id,
            delay: self.duration,
        }
    }

    /// Hides the notification if `id` still names it. Returns whether it did.
    pub fn expire(&mut self, id: u64) -> bool {
        match &self.current {
            Some(notification) if notification.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
