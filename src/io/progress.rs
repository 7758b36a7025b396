//! Staged progress notifications for external renderers

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::spatial::grid::Grid;

/// Receives the grid each time another slice of cells has collapsed
///
/// Lets a renderer sample `collapsed_count` and per-cell entropy at intervals
/// without the generator depending on any drawing code.
pub trait StageObserver {
    /// Called with the grid and the whole percentage of cells collapsed
    fn observe(&mut self, grid: &Grid, percent: usize);
}

impl<F> StageObserver for F
where
    F: FnMut(&Grid, usize),
{
    fn observe(&mut self, grid: &Grid, percent: usize) {
        self(grid, percent);
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}%"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Terminal progress bar tracking the percentage of collapsed cells
pub struct ProgressBarObserver {
    bar: ProgressBar,
}

impl Default for ProgressBarObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBarObserver {
    /// Create a progress bar drawn to stderr
    pub fn new() -> Self {
        Self::from_bar(ProgressBar::new(100))
    }

    /// Create a progress bar that tracks state without drawing
    pub fn hidden() -> Self {
        Self::from_bar(ProgressBar::hidden())
    }

    fn from_bar(bar: ProgressBar) -> Self {
        bar.set_length(100);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Last reported percentage
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Collapsed cell count shown beside the bar
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Whether generation reported completion
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl StageObserver for ProgressBarObserver {
    fn observe(&mut self, grid: &Grid, percent: usize) {
        self.bar.set_position(percent as u64);
        self.bar.set_message(format!(
            "{}/{}",
            grid.collapsed_count(),
            grid.total_cells()
        ));
        if grid.is_complete() {
            self.bar.finish();
        }
    }
}
