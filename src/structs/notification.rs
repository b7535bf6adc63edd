use std::time::Duration;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::config::constants::{millis, DEFAULT_NOTIFICATION_DISMISS_MS};
use crate::enums::notification_kind::NotificationKind;

/// Transient on-screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub dismiss_after: Duration,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            created_at: Utc::now(),
            dismiss_after: millis(DEFAULT_NOTIFICATION_DISMISS_MS),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        chrono::Duration::from_std(self.dismiss_after)
            .map(|ttl| now >= self.created_at + ttl)
            .unwrap_or(true)
    }
}
