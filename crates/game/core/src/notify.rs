//! Notification boundary.
//!
//! The rules format human-readable outcomes and hand them to a [`Notifier`].
//! Delivery is fire-and-forget: a notifier cannot fail the rule that
//! published to it.

use std::sync::{Arc, Mutex};

/// Audience of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    /// Combat outcome produced by the rules engine.
    Engine,
    /// Admin announcement posted to the whole arena channel.
    Channel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn engine(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Engine,
            text: text.into(),
        }
    }

    pub fn channel(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Channel,
            text: text.into(),
        }
    }
}

pub trait Notifier {
    fn publish(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn publish(&self, notification: Notification) {
        (**self).publish(notification);
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn publish(&self, notification: Notification) {
        (**self).publish(notification);
    }
}

/// Notifier that keeps everything it receives. Useful for tests and replays.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    published: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far, oldest first.
    pub fn published(&self) -> Vec<Notification> {
        self.published
            .lock()
            .map(|published| published.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn publish(&self, notification: Notification) {
        if let Ok(mut published) = self.published.lock() {
            published.push(notification);
        }
    }
}
