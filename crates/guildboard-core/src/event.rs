//! Event bus for guildboard using tokio::broadcast
//!
//! Publish-subscribe notification for dashboard state changes. The watch
//! cell on the session answers "is the current view ready"; the bus fans
//! out discrete transitions to any number of observers.

use crate::error::FailureKind;
use tokio::sync::broadcast;

/// Events emitted by the dashboard session
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// A new activation started (scope or focus changed)
    ActivationStarted(u64),
    /// The activation's view model was published
    ViewPublished(u64),
    /// The activation ended fatally; no view model was published
    ActivationFailed { generation: u64, kind: FailureKind },
    /// The focused trend user changed
    FocusChanged(Option<String>),
}

/// Event bus for broadcasting dashboard events
pub struct EventBus {
    sender: broadcast::Sender<DashboardEvent>,
}

impl EventBus {
    /// Create a new event bus with specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create with default capacity (64 events)
    pub fn default_capacity() -> Self {
        Self::new(64)
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: DashboardEvent) {
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(event);
    }

    /// Subscribe to receive events
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.sender.subscribe()
    }

    /// Get current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::default_capacity()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
