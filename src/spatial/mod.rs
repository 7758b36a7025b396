//! Spatial data structures for the collapse lattice
//!
//! This module contains spatial-related functionality including:
//! - The tile catalog with patterns and adjacency rules
//! - Per-position cell state
//! - The grid owning every cell and the output raster

/// Per-position collapse state
pub mod cell;
/// Grid state management and raster assembly
pub mod grid;
/// Tile identifiers, patterns and adjacency rules
pub mod tiles;

pub use grid::Grid;
