//! # Narration
//!
//! Playback lifecycle for the synthesized analysis narration. The lifecycle
//! is an explicit state machine with a single transition function, so a
//! click that arrives while a request is in flight is structurally a no-op
//! rather than something a disabled button merely discourages.

use crate::api::ClusterBackend;
use crate::error::ApiError;
use crate::state::ResultState;
use crate::surface::DashboardSurface;

/// Narration control label while nothing is in flight.
pub const LABEL_PLAY: &str = "Play Analysis";
/// Narration control label from click until playback ends.
pub const LABEL_GENERATING: &str = "Generating Audio...";
/// Notification shown when the narration transport or playback fails.
pub const STREAMING_FAILURE_NOTICE: &str = "An error occurred while streaming audio.";

/// Lifecycle of one narration cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NarrationState {
    /// Nothing in flight; a click may start a cycle.
    #[default]
    Idle,
    /// Audio request issued, payload not yet received.
    Requesting,
    /// Payload bound to the player and playing.
    Playing,
}

/// Events the lifecycle reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationEvent {
    PlayRequested,
    AudioReady,
    RequestFailed,
    PlaybackEnded,
    PlaybackFailed,
}

impl NarrationState {
    /// The single transition function. Events that make no sense in the
    /// current state leave it unchanged.
    pub fn apply(self, event: NarrationEvent) -> NarrationState {
        use NarrationEvent::*;
        use NarrationState::*;
        match (self, event) {
            (Idle, PlayRequested) => Requesting,
            (Requesting, AudioReady) => Playing,
            (Requesting, RequestFailed) => Idle,
            (Playing, PlaybackEnded) | (Playing, PlaybackFailed) => Idle,
            (state, _) => state,
        }
    }

    /// Whether a request or playback session currently occupies the control.
    pub fn in_flight(self) -> bool {
        self != NarrationState::Idle
    }
}

/// Enabled/label pair for the narration control. Derived, never stored: it
/// is a pure function of the result state and the narration lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub enabled: bool,
    pub label: &'static str,
}

/// The control is enabled iff there is analysis text to read and no cycle is
/// in flight; the label reflects the in-flight span.
pub fn control_state(has_analysis: bool, narration: NarrationState) -> ControlState {
    ControlState {
        enabled: has_analysis && !narration.in_flight(),
        label: if narration.in_flight() {
            LABEL_GENERATING
        } else {
            LABEL_PLAY
        },
    }
}

/// Drives narration cycles against the backend, keeping the control state on
/// the surface in lockstep with every transition.
#[derive(Debug, Default)]
pub struct NarrationController {
    state: NarrationState,
}

impl NarrationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NarrationState {
        self.state
    }

    /// Current control presentation for the given result state.
    pub fn control(&self, results: &ResultState) -> ControlState {
        control_state(results.has_analysis(), self.state)
    }

    fn step(
        &mut self,
        event: NarrationEvent,
        results: &ResultState,
        surface: &mut dyn DashboardSurface,
    ) {
        self.state = self.state.apply(event);
        surface.set_narration_control(self.control(results));
    }

    /// One full cycle: request audio, hand it to the sink, return to idle
    /// when playback ends or on any failure. A call while a cycle is in
    /// flight, or with nothing to narrate, does nothing.
    #[tracing::instrument(skip_all)]
    pub async fn play(
        &mut self,
        backend: &dyn ClusterBackend,
        results: &ResultState,
        surface: &mut dyn DashboardSurface,
    ) {
        if self.state != NarrationState::Idle || !results.has_analysis() {
            return;
        }
        self.step(NarrationEvent::PlayRequested, results, surface);

        match backend.narration(results.analysis_text()).await {
            Ok(audio) => {
                self.step(NarrationEvent::AudioReady, results, surface);
                match surface.play_audio(audio).await {
                    Ok(()) => self.step(NarrationEvent::PlaybackEnded, results, surface),
                    Err(err) => {
                        tracing::warn!("narration playback failed: {err}");
                        surface.notify(STREAMING_FAILURE_NOTICE);
                        self.step(NarrationEvent::PlaybackFailed, results, surface);
                    }
                }
            }
            Err(ApiError::Logical(body)) => {
                tracing::warn!("narration rejected: {body}");
                surface.notify(&format!("Failed to play audio: {body}"));
                self.step(NarrationEvent::RequestFailed, results, surface);
            }
            Err(err) => {
                tracing::warn!("narration transport failure: {err}");
                surface.notify(STREAMING_FAILURE_NOTICE);
                self.step(NarrationEvent::RequestFailed, results, surface);
            }
        }
    }
}
