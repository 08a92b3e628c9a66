//! Exclusive playback session state machine.
//!
//! The session owns the single logical "now playing" slot. The whole
//! operation set (`play_surah`, `play_ayah`, `pause`, `stop`) is serialized
//! behind one async mutex, so a `play` arriving while another is in flight
//! waits for it and then observes the acknowledged stop of the previous
//! producer before its own start is issued.

use crate::error::{PlaybackError, Result};
use crate::setup::SetupGuard;
use crate::traits::RecitationResolver;
use bridge_traits::audio::{AudioTransport, TrackRef, TransportOptions, TransportState};
use core_corpus::SurahId;
use core_runtime::events::{CoreEvent, EventBus, PlaybackEvent};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, instrument, warn};

/// The currently active playback target. At most one is ever non-`None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTarget {
    /// Nothing is playing.
    None,
    /// A whole surah is playing.
    Surah(SurahId),
    /// One ayah is playing, addressed by its position within the surah.
    Ayah(SurahId, u16),
}

impl ActiveTarget {
    pub fn is_none(&self) -> bool {
        matches!(self, ActiveTarget::None)
    }
}

impl fmt::Display for ActiveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveTarget::None => write!(f, "none"),
            ActiveTarget::Surah(surah) => write!(f, "surah:{}", surah),
            ActiveTarget::Ayah(surah, ayah) => write!(f, "surah:{}:ayah:{}", surah, ayah),
        }
    }
}

/// Exclusive manager of the device audio output.
///
/// Construct once per process and share via `Arc`. The session is the sole
/// owner of the transport; no other component may issue device commands.
///
/// # Example
///
/// ```ignore
/// use core_playback::PlaybackSession;
/// use core_corpus::SurahId;
///
/// # async fn example(session: &PlaybackSession) -> core_playback::Result<()> {
/// session.play_surah(SurahId::new(36)?).await?;
/// session.pause().await?;
/// // Mandatory when the consuming screen goes away:
/// session.stop().await;
/// # Ok(())
/// # }
/// ```
pub struct PlaybackSession {
    transport: Arc<dyn AudioTransport>,
    resolver: Arc<dyn RecitationResolver>,
    setup: SetupGuard,
    active: AsyncMutex<ActiveTarget>,
    event_bus: Option<Arc<EventBus>>,
}

impl PlaybackSession {
    /// Create a new session around the device transport and a track resolver.
    pub fn new(
        transport: Arc<dyn AudioTransport>,
        resolver: Arc<dyn RecitationResolver>,
        options: TransportOptions,
    ) -> Self {
        let setup = SetupGuard::new(Arc::clone(&transport), options);
        Self {
            transport,
            resolver,
            setup,
            active: AsyncMutex::new(ActiveTarget::None),
            event_bus: None,
        }
    }

    /// Attach an event bus for playback lifecycle events.
    pub fn with_event_bus(mut self, event_bus: Arc<EventBus>) -> Self {
        self.setup = self.setup.with_event_bus(Arc::clone(&event_bus));
        self.event_bus = Some(event_bus);
        self
    }

    /// Ensure the device audio output is initialized; see
    /// [`SetupGuard::ensure_ready`].
    pub async fn ensure_ready(&self) -> Result<()> {
        self.setup.ensure_ready().await
    }

    /// Whether device setup has completed successfully.
    pub fn is_device_ready(&self) -> bool {
        self.setup.is_ready()
    }

    /// The currently active playback target.
    pub async fn active_target(&self) -> ActiveTarget {
        *self.active.lock().await
    }

    /// Start playing a whole surah.
    ///
    /// Any previous producer is stopped and the device output reset before
    /// the new track starts. Re-playing the currently active surah restarts
    /// it from the beginning.
    #[instrument(skip(self))]
    pub async fn play_surah(&self, surah: SurahId) -> Result<()> {
        let mut active = self.active.lock().await;
        self.setup.ensure_ready().await?;
        self.halt_producer(&mut active).await?;

        let track = self.resolver.resolve_surah(surah).await?;
        self.start(track, ActiveTarget::Surah(surah), &mut active)
            .await
    }

    /// Start playing one ayah, addressed by its position within the surah.
    ///
    /// Calling this again for the ayah that is already active toggles it off
    /// (pauses) instead of restarting it.
    #[instrument(skip(self))]
    pub async fn play_ayah(&self, surah: SurahId, ayah: u16) -> Result<()> {
        let mut active = self.active.lock().await;

        if *active == ActiveTarget::Ayah(surah, ayah) {
            return self.pause_active(&mut active).await;
        }

        self.setup.ensure_ready().await?;
        self.halt_producer(&mut active).await?;

        let track = self.resolver.resolve_ayah(surah, ayah).await?;
        self.start(track, ActiveTarget::Ayah(surah, ayah), &mut active)
            .await
    }

    /// Pause the active playback. A no-op when nothing is active.
    pub async fn pause(&self) -> Result<()> {
        let mut active = self.active.lock().await;
        self.pause_active(&mut active).await
    }

    /// Stop playback unconditionally.
    ///
    /// Always safe to call, from any state, including while a play is still
    /// in flight. Device-level errors are logged and swallowed. Mandatory on
    /// consumer teardown to avoid orphaned playback.
    pub async fn stop(&self) {
        let mut active = self.active.lock().await;
        let target = *active;
        *active = ActiveTarget::None;

        if let Err(e) = self.transport.stop().await {
            warn!(error = %e, "audio transport stop failed; continuing teardown");
        }

        if !target.is_none() {
            info!(unit = %target, "playback stopped");
            self.emit(PlaybackEvent::Stopped);
        }
    }

    /// Signal that the active target finished playing naturally.
    ///
    /// The host forwards this from its transport completion callback; the
    /// device has already gone quiet, so no transport command is issued.
    pub async fn notify_completed(&self) {
        let mut active = self.active.lock().await;
        let target = *active;
        if target.is_none() {
            debug!("completion signal with no active playback");
            return;
        }

        *active = ActiveTarget::None;
        info!(unit = %target, "playback completed");
        self.emit(PlaybackEvent::Completed {
            target: target.to_string(),
        });
    }

    /// Whether audio is audibly playing right now.
    ///
    /// Cross-checks the logical target against the device state, so the
    /// session never reports playing while nothing is producing audio.
    pub async fn is_playing(&self) -> Result<bool> {
        let active = self.active.lock().await;
        if active.is_none() {
            return Ok(false);
        }

        let state = self
            .transport
            .query_state()
            .await
            .map_err(|e| PlaybackError::Transport {
                operation: "query_state".to_string(),
                message: e.to_string(),
            })?;
        Ok(state == TransportState::Playing)
    }

    /// Force the previous producer to silence before a new one may start.
    /// The stop is awaited (acknowledged) before the caller issues any start
    /// command; two producers never overlap, even transiently.
    async fn halt_producer(&self, active: &mut ActiveTarget) -> Result<()> {
        let previous = *active;
        *active = ActiveTarget::None;

        self.transport
            .stop()
            .await
            .map_err(|e| PlaybackError::Transport {
                operation: "stop".to_string(),
                message: e.to_string(),
            })?;
        self.transport
            .reset()
            .await
            .map_err(|e| PlaybackError::Transport {
                operation: "reset".to_string(),
                message: e.to_string(),
            })?;

        if !previous.is_none() {
            debug!(previous = %previous, "halted previous producer");
        }
        Ok(())
    }

    async fn start(
        &self,
        track: TrackRef,
        target: ActiveTarget,
        active: &mut ActiveTarget,
    ) -> Result<()> {
        match self.transport.enqueue_and_play(track).await {
            Ok(()) => {
                *active = target;
                info!(unit = %target, "playback started");
                self.emit(PlaybackEvent::Started {
                    target: target.to_string(),
                });
                Ok(())
            }
            // The halt already cleared the target, so a failed start leaves
            // the session idle rather than claiming playback with no audio.
            Err(e) => Err(PlaybackError::Transport {
                operation: "enqueue_and_play".to_string(),
                message: e.to_string(),
            }),
        }
    }

    async fn pause_active(&self, active: &mut ActiveTarget) -> Result<()> {
        let target = *active;
        if target.is_none() {
            debug!("pause requested with no active playback");
            return Ok(());
        }

        *active = ActiveTarget::None;
        self.transport
            .pause()
            .await
            .map_err(|e| PlaybackError::Transport {
                operation: "pause".to_string(),
                message: e.to_string(),
            })?;

        info!(unit = %target, "playback paused");
        self.emit(PlaybackEvent::Paused {
            target: target.to_string(),
        });
        Ok(())
    }

    fn emit(&self, event: PlaybackEvent) {
        if let Some(bus) = &self.event_bus {
            bus.emit(CoreEvent::Playback(event)).ok();
        }
    }
}
