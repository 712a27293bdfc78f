//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use arena_core::{Notification, NotificationKind, Notifier};

use crate::api::{Result, RuntimeError};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    /// Combat outcomes produced by the rules engine
    Engine,
    /// Announcements posted to the arena channel
    Channel,
}

impl From<NotificationKind> for Topic {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Engine => Topic::Engine,
            NotificationKind::Channel => Topic::Channel,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// notifications they care about. Channels are created once at construction,
/// so publishing never takes a lock.
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Notification>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut channels = HashMap::new();

        // Pre-create channels for each topic
        channels.insert(Topic::Engine, broadcast::channel(capacity).0);
        channels.insert(Topic::Channel, broadcast::channel(capacity).0);

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish a notification to its corresponding topic
    pub fn publish(&self, notification: Notification) {
        let topic = Topic::from(notification.kind);

        if let Some(tx) = self.channels.get(&topic)
            && tx.send(notification).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive notifications for that topic.
    pub fn subscribe(&self, topic: Topic) -> Result<broadcast::Receiver<Notification>> {
        self.channels
            .get(&topic)
            .map(broadcast::Sender::subscribe)
            .ok_or(RuntimeError::TopicNotInitialized(topic))
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> Result<HashMap<Topic, broadcast::Receiver<Notification>>> {
        topics
            .iter()
            .map(|&topic| self.subscribe(topic).map(|rx| (topic, rx)))
            .collect()
    }
}

impl Notifier for EventBus {
    fn publish(&self, notification: Notification) {
        EventBus::publish(self, notification);
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
