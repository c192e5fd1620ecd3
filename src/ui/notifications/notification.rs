// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Duration {
        match self {
            Severity::Success => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
        }
    }
}

/// A toast notification to be displayed to the user.
///
/// Carries an i18n message key rather than display text, so the toast
/// renders in whatever language is active.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    created_at: Instant,
}

impl Notification {
    /// Creates a success notification for the given message key.
    #[must_use]
    pub fn success(message_key: &str) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates a warning notification for the given message key.
    #[must_use]
    pub fn warning(message_key: &str) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    fn new(severity: Severity, message_key: &str) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.to_string(),
            created_at: Instant::now(),
        }
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Whether this notification has outlived its display duration.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.severity.auto_dismiss_duration()
    }
}
