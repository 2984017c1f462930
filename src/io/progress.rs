//! Terminal progress display for simulated play and batch slicing

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static LEVEL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>16} [{bar:30.cyan/blue}] {pos}/{len} pieces {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress bars for the command-line runner
///
/// Holds at most one bar at a time: either the pieces of the level being
/// played or the images of a slicing batch.
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Start a bar for a level with `total` pieces
    pub fn start_level(&mut self, name: &str, total: usize) {
        self.finish();
        let bar = ProgressBar::new(total as u64);
        bar.set_style(LEVEL_STYLE.clone());
        bar.set_prefix(name.to_string());
        self.bar = Some(bar);
    }

    /// Report seated pieces and drop attempts so far
    pub fn update_level(&self, placed: usize, attempts: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_position(placed as u64);
            bar.set_message(format!("({attempts} drops)"));
        }
    }

    /// Start a bar for a batch of `count` images
    pub fn start_batch(&mut self, count: usize) {
        self.finish();
        let bar = ProgressBar::new(count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Mark one image of the batch as sliced
    pub fn image_done(&self, name: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
            bar.inc(1);
        }
    }

    /// Position of the active bar, if any
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }

    /// Close the active bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
