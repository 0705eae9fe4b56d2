//! # API Client
//!
//! Typed access to the clustering service's two endpoints. Controllers talk
//! to the [`ClusterBackend`] trait; [`ApiClient`] is the HTTP implementation
//! and tests substitute a stub.

use crate::error::ApiError;
use crate::models::{Centroid, ClusterOutcome, ClusterPoint};
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The request layer the controllers drive.
#[async_trait]
pub trait ClusterBackend: Send + Sync {
    /// Run one clustering pass with `k` clusters.
    async fn cluster(&self, k: u32) -> Result<ClusterOutcome, ApiError>;

    /// Synthesize narration audio for `text`; the payload is a complete
    /// encoded audio stream.
    async fn narration(&self, text: &str) -> Result<Bytes, ApiError>;
}

#[derive(Serialize)]
struct ClusterRequest {
    k: u32,
}

#[derive(Serialize)]
struct NarrationRequest<'a> {
    analysis_text: &'a str,
}

/// Wire envelope for `POST /api/cluster`. The service reports logical
/// failures as JSON with any HTTP status (500 included), so the body is
/// parsed before the status is consulted.
#[derive(Debug, Deserialize)]
struct ClusterEnvelope {
    success: bool,
    #[serde(default)]
    analysis_text: Option<String>,
    #[serde(default)]
    plot_data: Option<Vec<ClusterPoint>>,
    #[serde(default)]
    centroids: Option<Vec<Centroid>>,
    #[serde(default)]
    features: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
}

impl ClusterEnvelope {
    fn into_outcome(self) -> Result<ClusterOutcome, ApiError> {
        if !self.success {
            return Err(ApiError::Logical(
                self.error
                    .unwrap_or_else(|| "unspecified clustering error".to_string()),
            ));
        }
        let analysis_text = self.analysis_text.ok_or_else(|| {
            ApiError::Logical("success envelope missing analysis_text".to_string())
        })?;
        Ok(ClusterOutcome {
            analysis_text,
            plot_data: self.plot_data.unwrap_or_default(),
            centroids: self.centroids.unwrap_or_default(),
            features: self.features.unwrap_or_default(),
        })
    }
}

/// HTTP client for the clustering service.
///
/// No request timeout is configured: a request either resolves or the
/// transport reports an error, and re-submission is always a fresh user
/// action.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ClusterBackend for ApiClient {
    async fn cluster(&self, k: u32) -> Result<ClusterOutcome, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/cluster"))
            .json(&ClusterRequest { k })
            .send()
            .await?;
        let envelope: ClusterEnvelope = response.json().await?;
        envelope.into_outcome()
    }

    async fn narration(&self, text: &str) -> Result<Bytes, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/analyze"))
            .json(&NarrationRequest {
                analysis_text: text,
            })
            .send()
            .await?;
        if response.status().is_success() {
            Ok(response.bytes().await?)
        } else {
            // Non-2xx narration bodies are plain text describing the failure.
            // A body that cannot be read is a transport failure, not an
            // empty logical one.
            Err(ApiError::Logical(response.text().await?))
        }
    }
}
