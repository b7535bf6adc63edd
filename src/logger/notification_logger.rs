use std::sync::atomic::{AtomicUsize, Ordering};
use crate::enums::notification_kind::NotificationKind;
use crate::structs::notification::Notification;
use crate::traits::notifier::Notifier;

/// Prints notifications to stderr and mirrors them into the log.
#[derive(Default)]
pub struct NotificationLogger {
    errors: AtomicUsize,
}

impl NotificationLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error notifications shown so far. Commands use it for their exit status.
    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }
}

impl Notifier for NotificationLogger {
    fn notify(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Error => {
                self.errors.fetch_add(1, Ordering::Relaxed);
                log::error!("{}", notification.message);
            }
            NotificationKind::Success | NotificationKind::Info => log::info!("{}", notification.message),
        }
        eprintln!("{} {}", notification.kind.emoji(), notification.message);
    }
}
