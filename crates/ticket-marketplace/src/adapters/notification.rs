//! # Notification Sinks
//!
//! - [`RecordingSink`]: keeps every notification in a shared log
//! - [`TracingSink`]: writes one structured log line per notification
//! - [`BroadcastSink`]: fans notifications out over a `tokio` broadcast channel

use crate::events::MarketplaceNotification;
use crate::ports::outbound::NotificationSink;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Default broadcast buffer size.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

// =============================================================================
// RECORDING SINK
// =============================================================================

/// Appends notifications to a log shared between clones.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    log: Arc<Mutex<Vec<MarketplaceNotification>>>,
}

impl RecordingSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<MarketplaceNotification> {
        self.log.lock().clone()
    }

    /// Most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<MarketplaceNotification> {
        self.log.lock().last().cloned()
    }

    /// Number of notifications recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<MarketplaceNotification> {
        std::mem::take(&mut *self.log.lock())
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: MarketplaceNotification) {
        self.log.lock().push(notification);
    }
}

// =============================================================================
// TRACING SINK
// =============================================================================

/// Logs every notification at `info` level under its topic.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: MarketplaceNotification) {
        info!(
            topic = notification.topic(),
            event_id = ?notification.event_id(),
            payload = ?notification,
            "Marketplace notification"
        );
    }
}

// =============================================================================
// BROADCAST SINK
// =============================================================================

/// Publishes notifications to every live subscriber.
///
/// Sending with no subscribers drops the notification; slow subscribers see
/// `RecvError::Lagged` once the buffer wraps.
#[derive(Clone, Debug)]
pub struct BroadcastSink {
    sender: broadcast::Sender<MarketplaceNotification>,
}

impl BroadcastSink {
    /// Create a sink with [`DEFAULT_CHANNEL_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a sink buffering up to `capacity` notifications per subscriber.
    ///
    /// # Panics
    ///
    /// If `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Receive every notification published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<MarketplaceNotification> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for BroadcastSink {
    fn notify(&mut self, notification: MarketplaceNotification) {
        let topic = notification.topic();
        match self.sender.send(notification) {
            Ok(receivers) => debug!(topic, receivers, "Notification broadcast"),
            Err(_) => debug!(topic, "Notification dropped, no subscribers"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
