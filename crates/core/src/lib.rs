//! # Clusterdash Core
//!
//! The orchestration layer of the clustering dashboard: sequencing requests
//! against the clustering service, projecting responses into chart/table
//! view models, and driving narration playback, with the UI toolkit kept
//! entirely behind the [`surface::DashboardSurface`] seam.
//!
//! ## Architecture
//!
//! - `api` - Typed client for the service's two endpoints
//! - `models` - Wire records (points, centroids, clustering outcome)
//! - `state` - The single source of truth for the latest result
//! - `render/` - Pure projections into scatter and table view models
//! - `narration` - Playback lifecycle state machine and controller
//! - `dashboard` - Clustering run sequencing and the top-level facade
//!
//! ## Usage
//!
//! ```rust,ignore
//! use clusterdash_core::api::ApiClient;
//! use clusterdash_core::dashboard::Dashboard;
//!
//! let mut dashboard = Dashboard::new(ApiClient::new("http://127.0.0.1:5000"), surface, None);
//! dashboard.run_clustering(4).await;
//! dashboard.play_narration().await;
//! ```

pub mod api;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod narration;
pub mod render;
pub mod state;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;
