//! # Errors
//!
//! Failure taxonomy for dashboard operations. Every variant is recovered
//! locally: the user is notified and the UI returns to an interactive state.

use thiserror::Error;

/// A dashboard request that did not produce a usable payload.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered and reported the failure itself: clustering
    /// returned `success: false`, or narration returned a non-2xx status
    /// whose body describes the problem.
    #[error("{0}")]
    Logical(String),

    /// The service could not be reached, or its body could not be read or
    /// parsed as the expected shape.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Centroid records that disagree on their feature key set. Rendering them
/// anyway would pair values with the wrong columns, so the table is rejected
/// as a whole.
#[derive(Debug, Error)]
#[error("centroid for cluster {cluster} has columns {found:?}, expected {expected:?}")]
pub struct SchemaError {
    pub cluster: i64,
    pub expected: Vec<String>,
    pub found: Vec<String>,
}
