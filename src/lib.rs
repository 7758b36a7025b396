//! Wave function collapse generation of tile-based maze maps
//!
//! Every cell of an N×N lattice starts with all seven maze tiles as candidates.
//! The generator repeatedly collapses the most constrained cell at random,
//! narrows its four neighbors to compatible tiles, and finally assembles the
//! 3x3 tile patterns into a single binary raster.

#![forbid(unsafe_code)]

/// Collapse engine: domains, random sources, selection, propagation and the generation loop
pub mod algorithm;
/// Error handling, configuration and progress reporting
pub mod io;
/// Tile catalog, cells and the lattice they live in
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
