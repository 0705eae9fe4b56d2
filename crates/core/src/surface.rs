//! # Surface
//!
//! The UI capabilities the orchestration layer drives. A page, a terminal,
//! or a test stub implements this trait; controllers never touch a rendering
//! toolkit directly.

use crate::narration::ControlState;
use crate::render::{CentroidTable, ScatterChart};
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait DashboardSurface: Send {
    /// Write the status/analysis text region.
    fn set_status(&mut self, text: &str);

    /// Apply the narration control's enabled flag and label.
    fn set_narration_control(&mut self, control: ControlState);

    /// Blocking user notification (the page's alert dialog).
    fn notify(&mut self, message: &str);

    /// Replace the mounted chart. The previous chart instance must be fully
    /// disposed before the new one is shown; implementations never patch.
    fn mount_chart(&mut self, chart: ScatterChart);

    /// Replace the centroid table contents.
    fn mount_table(&mut self, table: CentroidTable);

    /// Bind the audio payload to the player and play it; resolves when
    /// playback ends. An `Err` is a playback failure, reported to the user
    /// by the caller.
    async fn play_audio(&mut self, audio: Bytes) -> anyhow::Result<()>;
}
