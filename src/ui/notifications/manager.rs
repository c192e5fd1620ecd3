// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of visible toasts and promotes
//! queued ones as space frees up.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (oldest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's
    /// displayed immediately. Otherwise it's queued and shown when
    /// space becomes available.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_back(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
        }
    }

    /// Removes expired notifications and promotes queued ones.
    pub fn tick(&mut self, now: Instant) {
        self.visible.retain(|notification| !notification.is_expired(now));
        self.promote();
    }

    /// Iterates over the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Whether any toast is currently on screen.
    ///
    /// Drives the tick subscription: no toasts, no timer.
    #[must_use]
    pub fn has_visible(&self) -> bool {
        !self.visible.is_empty()
    }

    fn dismiss(&mut self, id: NotificationId) {
        self.visible.retain(|notification| notification.id() != id);
        self.promote();
    }

    fn promote(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn push_displays_up_to_max_visible() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(Notification::success("notification-copied"));
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
    }

    #[test]
    fn dismiss_promotes_queued_notification() {
        let mut manager = Manager::new();
        for _ in 0..4 {
            manager.push(Notification::success("notification-copied"));
        }
        let first = manager.visible().next().expect("has visible").id();
        manager.update(Message::Dismiss(first));
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.visible().all(|n| n.id() != first));
    }

    #[test]
    fn tick_removes_expired_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-copied"));
        assert!(manager.has_visible());

        manager.tick(Instant::now() + Duration::from_secs(10));
        assert!(!manager.has_visible());
    }

    #[test]
    fn tick_keeps_fresh_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("notification-config-error"));
        manager.tick(Instant::now());
        assert!(manager.has_visible());
    }
}
