//! Test doubles for the controller tests: a scripted backend and a surface
//! that records every call into one shared, ordered event log, so tests can
//! assert the relative ordering of status writes, control toggles, backend
//! calls, and mounts.

use crate::api::ClusterBackend;
use crate::error::ApiError;
use crate::models::ClusterOutcome;
use crate::narration::ControlState;
use crate::render::{CentroidTable, ScatterChart};
use crate::state::ResultState;
use crate::surface::DashboardSurface;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SurfaceEvent {
    Status(String),
    Control { enabled: bool, label: &'static str },
    Notified(String),
    MountedChart { series_points: Vec<usize> },
    MountedTable { headers: usize, rows: usize },
    PlayedAudio(usize),
    BackendCluster(u32),
    BackendNarration(String),
}

type EventLog = Arc<Mutex<Vec<SurfaceEvent>>>;

fn push(log: &EventLog, event: SurfaceEvent) {
    log.lock().unwrap().push(event);
}

/// Builds an `ApiError::Transport` without touching the network; the invalid
/// URL fails at request-build time.
pub(crate) fn transport_error() -> ApiError {
    ApiError::Transport(
        reqwest::Client::new()
            .get("http://[invalid")
            .build()
            .unwrap_err(),
    )
}

enum Reply<T> {
    Payload(T),
    Logical(String),
    Transport,
}

impl<T: Clone> Reply<T> {
    fn produce(&self) -> Result<T, ApiError> {
        match self {
            Reply::Payload(value) => Ok(value.clone()),
            Reply::Logical(message) => Err(ApiError::Logical(message.clone())),
            Reply::Transport => Err(transport_error()),
        }
    }
}

/// Scripted [`ClusterBackend`]: replies are set per test, calls are logged.
pub(crate) struct StubBackend {
    log: EventLog,
    cluster_reply: Mutex<Reply<ClusterOutcome>>,
    narration_reply: Mutex<Reply<Bytes>>,
}

impl StubBackend {
    fn new(log: EventLog) -> Self {
        Self {
            log,
            cluster_reply: Mutex::new(Reply::Logical("no cluster reply scripted".to_string())),
            narration_reply: Mutex::new(Reply::Payload(Bytes::from_static(b"mp3"))),
        }
    }

    pub(crate) fn respond_cluster(&self, outcome: ClusterOutcome) {
        *self.cluster_reply.lock().unwrap() = Reply::Payload(outcome);
    }

    pub(crate) fn fail_cluster(&self, error: &str) {
        *self.cluster_reply.lock().unwrap() = Reply::Logical(error.to_string());
    }

    pub(crate) fn fail_cluster_transport(&self) {
        *self.cluster_reply.lock().unwrap() = Reply::Transport;
    }

    pub(crate) fn fail_narration(&self, body: &str) {
        *self.narration_reply.lock().unwrap() = Reply::Logical(body.to_string());
    }

    pub(crate) fn fail_narration_transport(&self) {
        *self.narration_reply.lock().unwrap() = Reply::Transport;
    }
}

#[async_trait]
impl ClusterBackend for StubBackend {
    async fn cluster(&self, k: u32) -> Result<ClusterOutcome, ApiError> {
        push(&self.log, SurfaceEvent::BackendCluster(k));
        self.cluster_reply.lock().unwrap().produce()
    }

    async fn narration(&self, text: &str) -> Result<Bytes, ApiError> {
        push(&self.log, SurfaceEvent::BackendNarration(text.to_string()));
        self.narration_reply.lock().unwrap().produce()
    }
}

/// Surface that records calls; playback resolves immediately (standing in
/// for the player's ended event) unless scripted to fail.
pub(crate) struct RecordingSurface {
    log: EventLog,
    fail_playback: bool,
}

impl RecordingSurface {
    fn new(log: EventLog) -> Self {
        Self {
            log,
            fail_playback: false,
        }
    }

    pub(crate) fn fail_playback(&mut self) {
        self.fail_playback = true;
    }
}

#[async_trait]
impl DashboardSurface for RecordingSurface {
    fn set_status(&mut self, text: &str) {
        push(&self.log, SurfaceEvent::Status(text.to_string()));
    }

    fn set_narration_control(&mut self, control: ControlState) {
        push(
            &self.log,
            SurfaceEvent::Control {
                enabled: control.enabled,
                label: control.label,
            },
        );
    }

    fn notify(&mut self, message: &str) {
        push(&self.log, SurfaceEvent::Notified(message.to_string()));
    }

    fn mount_chart(&mut self, chart: ScatterChart) {
        push(
            &self.log,
            SurfaceEvent::MountedChart {
                series_points: chart.series.iter().map(|s| s.points.len()).collect(),
            },
        );
    }

    fn mount_table(&mut self, table: CentroidTable) {
        push(
            &self.log,
            SurfaceEvent::MountedTable {
                headers: table.headers.len(),
                rows: table.rows.len(),
            },
        );
    }

    async fn play_audio(&mut self, audio: Bytes) -> anyhow::Result<()> {
        if self.fail_playback {
            anyhow::bail!("audio sink refused the payload");
        }
        push(&self.log, SurfaceEvent::PlayedAudio(audio.len()));
        Ok(())
    }
}

/// One backend + surface + result state sharing a single event log.
pub(crate) struct Harness {
    pub(crate) backend: StubBackend,
    pub(crate) surface: RecordingSurface,
    pub(crate) results: ResultState,
    log: EventLog,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let log: EventLog = Arc::default();
        Self {
            backend: StubBackend::new(log.clone()),
            surface: RecordingSurface::new(log.clone()),
            results: ResultState::default(),
            log,
        }
    }

    /// Harness whose result state already holds analysis text, as after a
    /// successful clustering run.
    pub(crate) fn with_analysis(text: &str) -> Self {
        let mut harness = Self::new();
        harness.results.record(text.to_string(), 3);
        harness
    }

    pub(crate) fn events(&self) -> Vec<SurfaceEvent> {
        self.log.lock().unwrap().clone()
    }
}
