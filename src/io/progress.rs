//! Render progress reporting

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static RENDER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {pos}/{len} points")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a single chaos-game render
///
/// Driven by the resumable computation: the renderer folds points into
/// the accumulator in chunks and advances the bar between chunks.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar spanning the total number of plotted points
    pub fn new(name: &str, total_points: usize) -> Self {
        let bar = ProgressBar::new(total_points as u64);
        bar.set_style(RENDER_STYLE.clone());
        bar.set_message(name.to_string());

        Self { bar }
    }

    /// Advance the bar by a chunk of plotted points
    pub fn advance(&self, points: usize) {
        self.bar.inc(points as u64);
    }

    /// Complete and clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
