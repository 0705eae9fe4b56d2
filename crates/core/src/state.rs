//! # Result State
//!
//! The single source of truth for the latest clustering result. Owned by the
//! dashboard; renderers and the narration controller get shared references
//! and can never mutate it.

/// Latest successful clustering result.
///
/// Overwritten wholesale when a run succeeds; any failure leaves the prior
/// value untouched, so the narration keeps reading the last good analysis.
#[derive(Debug, Clone, Default)]
pub struct ResultState {
    analysis_text: String,
    last_k: Option<u32>,
}

impl ResultState {
    /// The analysis text of the last successful run, empty before the first.
    pub fn analysis_text(&self) -> &str {
        &self.analysis_text
    }

    /// Cluster count of the last successful run.
    pub fn last_k(&self) -> Option<u32> {
        self.last_k
    }

    /// Whether there is anything to narrate.
    pub fn has_analysis(&self) -> bool {
        !self.analysis_text.is_empty()
    }

    pub(crate) fn record(&mut self, analysis_text: String, k: u32) {
        self.analysis_text = analysis_text;
        self.last_k = Some(k);
    }
}
