//! Single-flight device setup guard.
//!
//! Device audio initialization must happen exactly once per process, no
//! matter how many callers race to trigger it. The guard memoizes the
//! in-flight initialization as a shared future: every caller that arrives
//! before the first completion awaits the same attempt, and all of them
//! resolve (or fail) together. On failure the slot is cleared, so the next
//! call starts a fresh attempt.

use crate::error::{PlaybackError, Result};
use bridge_traits::audio::{AudioTransport, TransportOptions};
use bridge_traits::error::BridgeError;
use core_runtime::events::{CoreEvent, EventBus, PlaybackEvent};
use futures::future::{BoxFuture, FutureExt, Shared};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, instrument};

type SetupFuture = Shared<BoxFuture<'static, Result<()>>>;

/// Idempotent, single-flight initialization of the device audio output.
pub struct SetupGuard {
    transport: Arc<dyn AudioTransport>,
    options: TransportOptions,
    ready: AtomicBool,
    inflight: AsyncMutex<Option<SetupFuture>>,
    event_bus: Option<Arc<EventBus>>,
}

impl SetupGuard {
    /// Create a guard around the given transport. `options` are passed to the
    /// device on the one real initialization call.
    pub fn new(transport: Arc<dyn AudioTransport>, options: TransportOptions) -> Self {
        Self {
            transport,
            options,
            ready: AtomicBool::new(false),
            inflight: AsyncMutex::new(None),
            event_bus: None,
        }
    }

    /// Attach an event bus; `DeviceReady` is published once, when the real
    /// initialization completes.
    pub fn with_event_bus(mut self, event_bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    /// Whether device setup has completed successfully.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Ensure the device audio output is initialized.
    ///
    /// Cheap after the first success. Callers racing before the first
    /// completion all await one underlying `initialize` call. A
    /// device-reported "already initialized" condition is success, not
    /// failure. A true device error propagates to every waiter and leaves
    /// the guard unready; the next call retries.
    #[instrument(skip(self))]
    pub async fn ensure_ready(&self) -> Result<()> {
        if self.is_ready() {
            return Ok(());
        }

        let setup = {
            let mut slot = self.inflight.lock().await;

            // Re-check under the lock: a racer may have just completed.
            if self.is_ready() {
                return Ok(());
            }

            match &*slot {
                Some(pending) => pending.clone(),
                None => {
                    let attempt = self.start_initialize();
                    *slot = Some(attempt.clone());
                    attempt
                }
            }
        };

        let result = setup.clone().await;

        let mut slot = self.inflight.lock().await;
        if result.is_ok() {
            self.ready.store(true, Ordering::Release);
        }
        // Only the attempt we awaited may be cleared; a retry started by a
        // later caller must not be disturbed.
        if slot.as_ref().is_some_and(|pending| pending.ptr_eq(&setup)) {
            *slot = None;
        }

        result
    }

    fn start_initialize(&self) -> SetupFuture {
        let transport = Arc::clone(&self.transport);
        let options = self.options.clone();
        let event_bus = self.event_bus.clone();

        async move {
            match transport.initialize(options).await {
                Ok(()) => {}
                Err(BridgeError::AlreadyInitialized) => {
                    debug!("audio device reported already initialized, treating as success");
                }
                Err(e) => return Err(PlaybackError::SetupFailed(e.to_string())),
            }

            if let Some(bus) = &event_bus {
                bus.emit(CoreEvent::Playback(PlaybackEvent::DeviceReady)).ok();
            }
            debug!("audio device setup complete");
            Ok(())
        }
        .boxed()
        .shared()
    }
}
