//! Square lattice of cells and the collapse loop over it
//!
//! Cells live in a flat row-major vector indexed by `row * size + column`;
//! neighbor lookups are index arithmetic with bounds checks. The raster is
//! allocated at construction and filled by `assemble`.

use log::{debug, warn};
use ndarray::Array2;
use std::sync::Arc;

use crate::algorithm::propagation;
use crate::algorithm::random::RandomSource;
use crate::algorithm::selection::lowest_entropy_position;
use crate::io::configuration::{TILE_SIZE, validate_size};
use crate::io::error::{AlgorithmError, ErrorContext, Result, WithContext, invalid_parameter};
use crate::spatial::cell::{Cell, Choice, Position};
use crate::spatial::tiles::{Direction, Tile, TileCatalog};

/// Grid state for a single map generation
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    catalog: Arc<TileCatalog>,
    cells: Vec<Cell>,
    collapsed_count: usize,
    raster: Array2<u8>,
}

impl Grid {
    /// Create a grid with its own copy of the standard catalog
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the size is zero or too large
    pub fn new(size: usize) -> Result<Self> {
        Self::with_catalog(size, Arc::new(TileCatalog::new()))
    }

    /// Create a grid sharing an existing catalog
    ///
    /// Every cell starts uncollapsed with all resolved tiles as candidates.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the size is zero or too large
    pub fn with_catalog(size: usize, catalog: Arc<TileCatalog>) -> Result<Self> {
        validate_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for column in 0..size {
                cells.push(Cell::new(Position::new(row, column)));
            }
        }

        Ok(Self {
            size,
            catalog,
            cells,
            collapsed_count: 0,
            raster: Array2::zeros((size * TILE_SIZE, size * TILE_SIZE)),
        })
    }

    /// Side length in cells
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells in the grid
    pub const fn total_cells(&self) -> usize {
        self.size * self.size
    }

    /// Number of cells collapsed so far
    pub const fn collapsed_count(&self) -> usize {
        self.collapsed_count
    }

    /// Whether every cell has collapsed
    pub const fn is_complete(&self) -> bool {
        self.collapsed_count == self.total_cells()
    }

    /// Catalog used for validation, propagation and assembly
    pub fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Shared handle to the catalog
    pub fn shared_catalog(&self) -> Arc<TileCatalog> {
        Arc::clone(&self.catalog)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        (position.row < self.size && position.column < self.size)
            .then(|| position.row * self.size + position.column)
    }

    /// The cell at a position, if it lies inside the grid
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index_of(position)
            .and_then(|index| self.cells.get(index))
    }

    pub(crate) fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index_of(position)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// The adjacent position in a direction, `None` at the grid edge
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let (row_step, column_step) = direction.offset();
        let row = position.row.checked_add_signed(row_step)?;
        let column = position.column.checked_add_signed(column_step)?;
        let neighbor = Position::new(row, column);
        self.index_of(neighbor).map(|_| neighbor)
    }

    /// Positions of cells whose domain emptied before they could collapse
    pub fn stalled_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_stalled())
            .map(Cell::position)
            .collect()
    }

    /// Current entropy of every cell, for progress inspection
    pub fn entropy_map(&self) -> Array2<usize> {
        Array2::from_shape_fn((self.size, self.size), |(row, column)| {
            self.cell(Position::new(row, column))
                .map_or(0, Cell::entropy)
        })
    }

    /// Uncollapsed cell with the fewest candidates, earliest in row-major order
    pub fn select_lowest_entropy(&self) -> Option<Position> {
        lowest_entropy_position(&self.cells)
    }

    /// Apply a collapsed cell's adjacency rules to its neighbors
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the grid or the cell there
    /// has not collapsed
    pub fn propagate(&mut self, position: Position) -> Result<Vec<Position>> {
        propagation::propagate(self, position)
    }

    /// Collapse one cell, propagate the result and count it
    ///
    /// A cell that already collapsed is returned as is without propagating
    /// again. On error the grid is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the grid or the cell
    /// rejects the choice
    pub fn collapse_cell(&mut self, position: Position, choice: Choice<'_>) -> Result<Tile> {
        let cell = self
            .index_of(position)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or_else(|| invalid_parameter("position", &position, &"outside the grid"))?;

        if cell.is_collapsed() {
            return cell.collapse(choice, &self.catalog);
        }

        let tile = cell.collapse(choice, &self.catalog)?;
        self.collapsed_count += 1;
        debug!("Collapsed {position} to {tile}");

        self.propagate(position)?;
        Ok(tile)
    }

    /// Collapse the lowest entropy cell with a random draw
    ///
    /// Returns the collapsed position, or `None` if the grid was already complete.
    ///
    /// # Errors
    ///
    /// Returns `Stalled` when cells remain uncollapsed but none has candidates
    pub fn step(&mut self, random: &mut dyn RandomSource) -> Result<Option<Position>> {
        if self.is_complete() {
            return Ok(None);
        }

        let Some(position) = self.select_lowest_entropy() else {
            warn!(
                "No collapsible cell left with {}/{} collapsed; stalled at {:?}",
                self.collapsed_count,
                self.total_cells(),
                self.stalled_positions()
            );
            return Err(AlgorithmError::Stalled {
                iteration: 0,
                collapsed: self.collapsed_count,
                total: self.total_cells(),
            });
        };

        self.collapse_cell(position, Choice::Random(random))?;
        Ok(Some(position))
    }

    /// Step until every cell has collapsed
    ///
    /// # Errors
    ///
    /// Returns `Stalled`, stamped with the number of steps taken, if a cell's
    /// domain empties before it is selected
    pub fn run(&mut self, random: &mut dyn RandomSource) -> Result<()> {
        let mut iteration = 0;
        while !self.is_complete() {
            self.step(random).with_context(ErrorContext {
                iteration: Some(iteration),
            })?;
            iteration += 1;
        }
        Ok(())
    }

    /// Write every cell's pattern into the raster and return it
    ///
    /// Cells that have not collapsed contribute the sentinel pattern.
    pub fn assemble(&mut self) -> &Array2<u8> {
        for cell in &self.cells {
            let pattern = self.catalog.pattern(cell.display_tile());
            let origin = cell.position();

            for (row_offset, line) in pattern.iter().enumerate() {
                for (column_offset, &value) in line.iter().enumerate() {
                    if let Some(pixel) = self.raster.get_mut([
                        origin.row * TILE_SIZE + row_offset,
                        origin.column * TILE_SIZE + column_offset,
                    ]) {
                        *pixel = value;
                    }
                }
            }
        }

        &self.raster
    }

    /// The raster as last assembled
    pub const fn raster(&self) -> &Array2<u8> {
        &self.raster
    }
}
