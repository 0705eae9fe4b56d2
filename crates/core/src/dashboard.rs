//! # Dashboard
//!
//! Sequencing for one clustering run (placeholder status, request, fan-out
//! to the chart and table), plus the [`Dashboard`] facade that owns the
//! result state and wires user actions to the controllers.

use crate::api::ClusterBackend;
use crate::error::ApiError;
use crate::narration::{control_state, NarrationController};
use crate::render::{build_chart, build_table, AxisPair, CentroidTable};
use crate::state::ResultState;
use crate::surface::DashboardSurface;

/// Status placeholder shown while a run is in flight.
pub const STATUS_RUNNING: &str = "Running K-Means and generating analysis...";
/// Fixed status text after any failed run, logical or transport.
pub const STATUS_FAILED: &str = "Error: Clustering failed.";
/// Notification shown when the service cannot be reached.
pub const CONNECT_FAILURE_NOTICE: &str = "An error occurred while connecting to the backend.";

/// Issues clustering runs and fans successful results out to the renderers.
pub struct ClusterController {
    /// Configured axis override; when absent, axes come from the response's
    /// feature list.
    axes: Option<AxisPair>,
}

impl ClusterController {
    pub fn new(axes: Option<AxisPair>) -> Self {
        Self { axes }
    }

    fn effective_axes(&self, features: &[String]) -> AxisPair {
        self.axes
            .clone()
            .or_else(|| AxisPair::from_features(features))
            .unwrap_or_else(AxisPair::weather_default)
    }

    /// One clustering run.
    ///
    /// The status placeholder and the control disable land on the surface
    /// before the request is sent, so stale narration cannot start while the
    /// run is in flight. On any failure the previous result state survives
    /// untouched and the control is recomputed from it.
    #[tracing::instrument(skip(self, backend, results, narration, surface))]
    pub async fn run_clustering(
        &self,
        k: u32,
        backend: &dyn ClusterBackend,
        results: &mut ResultState,
        narration: &NarrationController,
        surface: &mut dyn DashboardSurface,
    ) {
        surface.set_status(STATUS_RUNNING);
        surface.set_narration_control(control_state(false, narration.state()));

        match backend.cluster(k).await {
            Ok(outcome) => {
                let axes = self.effective_axes(&outcome.features);
                results.record(outcome.analysis_text, k);
                surface.set_status(results.analysis_text());
                surface.mount_chart(build_chart(&outcome.plot_data, k, &axes));
                match build_table(&outcome.centroids) {
                    Ok(table) => surface.mount_table(table),
                    Err(err) => {
                        tracing::warn!("centroid table rejected: {err}");
                        surface.notify(&format!("Centroid table unavailable: {err}"));
                        surface.mount_table(CentroidTable::default());
                    }
                }
                surface.set_narration_control(narration.control(results));
            }
            Err(ApiError::Logical(error)) => {
                tracing::warn!("clustering rejected: {error}");
                surface.notify(&format!("Clustering failed: {error}"));
                surface.set_status(STATUS_FAILED);
                surface.set_narration_control(narration.control(results));
            }
            Err(err) => {
                tracing::warn!("clustering transport failure: {err}");
                surface.notify(CONNECT_FAILURE_NOTICE);
                surface.set_status(STATUS_FAILED);
                surface.set_narration_control(narration.control(results));
            }
        }
    }
}

/// Owns the mutable dashboard pieces and exposes the two user actions. The
/// driver loop (or a bootstrap trigger) calls these; each call runs to
/// completion before the next user action is read, so runs never overlap.
pub struct Dashboard<B: ClusterBackend, S: DashboardSurface> {
    backend: B,
    surface: S,
    results: ResultState,
    clusters: ClusterController,
    narration: NarrationController,
}

impl<B: ClusterBackend, S: DashboardSurface> Dashboard<B, S> {
    pub fn new(backend: B, surface: S, axes: Option<AxisPair>) -> Self {
        Self {
            backend,
            surface,
            results: ResultState::default(),
            clusters: ClusterController::new(axes),
            narration: NarrationController::new(),
        }
    }

    /// Latest result state, read-only.
    pub fn results(&self) -> &ResultState {
        &self.results
    }

    /// Run clustering with `k` clusters and refresh the whole surface.
    pub async fn run_clustering(&mut self, k: u32) {
        self.clusters
            .run_clustering(
                k,
                &self.backend,
                &mut self.results,
                &self.narration,
                &mut self.surface,
            )
            .await;
    }

    /// Narrate the current analysis text, if any.
    pub async fn play_narration(&mut self) {
        self.narration
            .play(&self.backend, &self.results, &mut self.surface)
            .await;
    }
}
