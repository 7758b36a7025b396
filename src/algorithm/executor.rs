use log::{debug, info};
use ndarray::Array2;

use crate::algorithm::random::{RandomSource, SeededRandom};
use crate::io::configuration::{GenerationConfig, PROGRESS_STEP_PERCENT};
use crate::io::error::{ErrorContext, Result, WithContext};
use crate::io::progress::StageObserver;
use crate::spatial::grid::Grid;

/// Drives a grid to completion with an injected random source
///
/// Each iteration collapses exactly one cell, so a run of an N×N grid takes N²
/// iterations unless it stalls.
pub struct Generator<R: RandomSource> {
    grid: Grid,
    random: R,
    iteration: usize,
}

impl Generator<SeededRandom> {
    /// Create a seeded generator from configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn from_config(config: &GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            Grid::new(config.size)?,
            SeededRandom::new(config.seed),
        ))
    }
}

impl<R: RandomSource> Generator<R> {
    /// Wrap an existing grid, which may already have cells collapsed
    pub const fn new(grid: Grid, random: R) -> Self {
        Self {
            grid,
            random,
            iteration: 0,
        }
    }

    /// Current grid state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Release the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Iterations executed so far
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Whole percentage of cells collapsed
    pub const fn percent_collapsed(&self) -> usize {
        self.grid.collapsed_count() * 100 / self.grid.total_cells()
    }

    /// Collapse one cell
    ///
    /// Returns whether more iterations are needed.
    ///
    /// # Errors
    ///
    /// Returns `Stalled`, stamped with this iteration, if no cell can collapse
    pub fn execute_iteration(&mut self) -> Result<bool> {
        if self.grid.is_complete() {
            return Ok(false);
        }

        self.grid
            .step(&mut self.random)
            .with_context(ErrorContext {
                iteration: Some(self.iteration),
            })?;
        self.iteration += 1;

        Ok(!self.grid.is_complete())
    }

    /// Run to completion and return the assembled raster
    ///
    /// # Errors
    ///
    /// Returns `Stalled` if a domain empties before its cell is selected
    pub fn generate(&mut self) -> Result<Array2<u8>> {
        self.generate_staged(None)
    }

    /// Run to completion, notifying `observer` every `PROGRESS_STEP_PERCENT`
    ///
    /// # Errors
    ///
    /// Returns `Stalled` if a domain empties before its cell is selected
    pub fn generate_with(&mut self, observer: &mut dyn StageObserver) -> Result<Array2<u8>> {
        self.generate_staged(Some(observer))
    }

    fn generate_staged(
        &mut self,
        mut observer: Option<&mut dyn StageObserver>,
    ) -> Result<Array2<u8>> {
        let mut threshold = PROGRESS_STEP_PERCENT;

        while self.execute_iteration()? {
            let percent = self.percent_collapsed();
            if percent >= threshold {
                debug!("The map is generated by {percent}%");
                if let Some(observer) = observer.as_mut() {
                    observer.observe(&self.grid, percent);
                }
                // Small grids can skip several thresholds in one iteration
                while threshold <= percent {
                    threshold += PROGRESS_STEP_PERCENT;
                }
            }
        }

        debug!("The map is generated by 100%");
        if let Some(observer) = observer.as_mut() {
            observer.observe(&self.grid, 100);
        }
        info!(
            "Generated {size}x{size} map in {} iterations",
            self.iteration,
            size = self.grid.size()
        );

        Ok(self.grid.assemble().clone())
    }
}
