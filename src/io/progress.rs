//! Frame rendering progress shared across worker threads

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Frames: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Counts finished frames while rendering runs in parallel
///
/// `ProgressBar` is internally synchronized, so workers only need a shared
/// reference to report completion.
pub struct FrameProgress {
    bar: ProgressBar,
}

impl FrameProgress {
    /// Create a visible progress bar for `frame_count` frames
    pub fn new(frame_count: usize) -> Self {
        let bar = ProgressBar::new(frame_count as u64);
        bar.set_style(FRAME_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(frame_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(frame_count as u64);
        Self { bar }
    }

    /// Record one finished frame
    pub fn frame_done(&self) {
        self.bar.inc(1);
    }

    /// Number of frames reported so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar once every frame is rendered
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
