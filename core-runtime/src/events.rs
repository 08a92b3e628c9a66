//! # Event Bus System
//!
//! Provides an event-driven architecture for the platform core using
//! `tokio::sync::broadcast`. Core modules publish typed events; any number of
//! subscribers (UI layers, loggers, tests) can listen independently.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::events::{CoreEvent, EventBus, PlaybackEvent};
//!
//! let event_bus = EventBus::new(100);
//! let mut stream = event_bus.subscribe();
//!
//! event_bus
//!     .emit(CoreEvent::Playback(PlaybackEvent::Stopped))
//!     .ok();
//! ```
//!
//! Event payloads identify operations (cache keys, playback targets) by their
//! string form only; no content text travels through the bus.

use tokio::sync::broadcast::{self, error::SendError};

/// Default number of events buffered per subscriber.
const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

/// Content cache lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    /// A content unit was fetched from the remote source and cached.
    UnitFetched { key: String },
    /// A content unit was evicted to make room for a newer insertion.
    UnitEvicted { key: String },
}

/// Playback session lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The device audio output completed initialization.
    DeviceReady,
    /// Playback started for the described target.
    Started { target: String },
    /// Playback was paused for the described target.
    Paused { target: String },
    /// Playback was stopped.
    Stopped,
    /// The active target finished playing naturally.
    Completed { target: String },
}

/// Top-level event type published on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    Content(ContentEvent),
    Playback(PlaybackEvent),
}

/// Central broadcast channel for core events.
///
/// Cloning the bus is cheap; all clones share the same underlying channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<CoreEvent>,
}

impl EventBus {
    /// Creates a new event bus with the specified buffer size.
    ///
    /// When a subscriber falls behind by more than `capacity` events it
    /// receives a `RecvError::Lagged` on its next `recv`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    ///
    /// Returns the number of subscribers that received the event, or an error
    /// when there are no active subscribers. Emitters that do not care whether
    /// anyone is listening should call `.ok()` on the result.
    pub fn emit(&self, event: CoreEvent) -> Result<usize, SendError<CoreEvent>> {
        self.sender.send(event)
    }

    /// Creates a new subscription to the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<CoreEvent> {
        self.sender.subscribe()
    }

    /// Number of currently active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_and_receive() {
        let bus = EventBus::new(8);
        let mut stream = bus.subscribe();

        let event = CoreEvent::Content(ContentEvent::UnitFetched {
            key: "surah:1:quran-uthmani".to_string(),
        });
        bus.emit(event.clone()).expect("subscriber is active");

        let received = stream.recv().await.expect("event delivered");
        assert_eq!(received, event);
    }

    #[test]
    fn test_emit_without_subscribers_errors() {
        let bus = EventBus::new(8);
        let result = bus.emit(CoreEvent::Playback(PlaybackEvent::Stopped));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let bus = EventBus::default();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        bus.emit(CoreEvent::Playback(PlaybackEvent::DeviceReady))
            .expect("subscribers active");

        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }
}
