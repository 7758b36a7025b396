//! Generation constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

/// Side length of every tile pattern in raster pixels
pub const TILE_SIZE: usize = 3;

/// Number of tiles that can appear in a cell domain
pub const RESOLVED_TILE_COUNT: usize = 7;

// One above the largest possible entropy so any candidate beats it
/// Starting comparison value for the lowest entropy scan
pub const ENTROPY_BASELINE: usize = RESOLVED_TILE_COUNT + 1;

/// Grid side length used when none is given
pub const DEFAULT_GRID_SIZE: usize = 9;

// Cells are stored densely and every step rescans them, so a run costs
// on the order of size^4 cell visits
/// Maximum allowed grid side length
pub const MAX_GRID_SIZE: usize = 128;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Percentage of collapsed cells between progress notifications
pub const PROGRESS_STEP_PERCENT: usize = 10;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Parameters for a single map generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Grid side length in cells
    pub size: usize,
    /// Seed for the random source
    pub seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl GenerationConfig {
    /// Check the parameters before any allocation happens
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the size is zero or exceeds `MAX_GRID_SIZE`
    pub fn validate(&self) -> Result<()> {
        validate_size(self.size)
    }
}

/// Reject grid sizes the generator cannot allocate or iterate
///
/// # Errors
///
/// Returns `InvalidParameter` if the size is zero or exceeds `MAX_GRID_SIZE`
pub fn validate_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(invalid_parameter(
            "size",
            &size,
            &"grid must have at least one cell",
        ));
    }
    if size > MAX_GRID_SIZE {
        return Err(invalid_parameter(
            "size",
            &size,
            &format!("grid side length is limited to {MAX_GRID_SIZE}"),
        ));
    }
    Ok(())
}
