//! Per-position collapse state
//!
//! A cell is either still choosing between candidate tiles or has collapsed to
//! exactly one. Collapse is a one-shot transition, and restriction only ever
//! removes candidates.

use log::debug;
use std::fmt;

use crate::algorithm::domain::Domain;
use crate::algorithm::random::RandomSource;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::tiles::{Tile, TileCatalog};

/// Row and column of a cell, 0-indexed from the top left
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
}

impl Position {
    /// Create a position
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Collapse state of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Still undetermined; an empty domain here means the cell is stalled
    Uncollapsed(Domain),
    /// Fixed to a single resolved tile
    Collapsed(Tile),
}

/// How a cell picks its tile when collapsing
pub enum Choice<'a> {
    /// Uniform draw from the current domain
    Random(&'a mut dyn RandomSource),
    /// A specific resolved tile
    Tile(Tile),
    /// A position in the catalog's resolved tile list
    Index(usize),
}

/// A single lattice position and its collapse state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    state: CellState,
}

impl Cell {
    /// Create an uncollapsed cell with every resolved tile as a candidate
    pub fn new(position: Position) -> Self {
        Self::with_domain(position, Domain::full())
    }

    /// Create an uncollapsed cell with the given candidates
    pub const fn with_domain(position: Position, domain: Domain) -> Self {
        Self {
            position,
            state: CellState::Uncollapsed(domain),
        }
    }

    /// Fixed lattice position
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Current state
    pub const fn state(&self) -> &CellState {
        &self.state
    }

    /// Whether a tile has been chosen
    pub const fn is_collapsed(&self) -> bool {
        matches!(self.state, CellState::Collapsed(_))
    }

    /// Whether propagation removed every candidate before the cell collapsed
    pub fn is_stalled(&self) -> bool {
        matches!(&self.state, CellState::Uncollapsed(domain) if domain.is_empty())
    }

    /// The chosen tile, if any
    pub const fn resolved(&self) -> Option<Tile> {
        match self.state {
            CellState::Collapsed(tile) => Some(tile),
            CellState::Uncollapsed(_) => None,
        }
    }

    /// The chosen tile, or the sentinel while undetermined
    pub const fn display_tile(&self) -> Tile {
        match self.state {
            CellState::Collapsed(tile) => tile,
            CellState::Uncollapsed(_) => Tile::Unresolved,
        }
    }

    /// Remaining candidates; empty once collapsed
    pub fn domain(&self) -> Domain {
        match &self.state {
            CellState::Uncollapsed(domain) => *domain,
            CellState::Collapsed(_) => Domain::empty(),
        }
    }

    /// Number of remaining candidates, 0 once collapsed
    pub fn entropy(&self) -> usize {
        match &self.state {
            CellState::Uncollapsed(domain) => domain.len(),
            CellState::Collapsed(_) => 0,
        }
    }

    /// Fix the cell to a single tile
    ///
    /// Returns the existing tile without change if the cell already collapsed.
    /// On failure the cell stays uncollapsed with its domain intact.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A random draw is requested from an empty domain (`EmptyDomain`)
    /// - The random source or explicit index is out of range (`OutOfRange`)
    /// - An explicit tile is the sentinel (`UnknownTile`)
    pub fn collapse(&mut self, choice: Choice<'_>, catalog: &TileCatalog) -> Result<Tile> {
        let domain = match &self.state {
            CellState::Collapsed(tile) => {
                debug!("Cell {} is already collapsed to {tile}", self.position);
                return Ok(*tile);
            }
            CellState::Uncollapsed(domain) => domain,
        };

        let tile = match choice {
            Choice::Random(random) => {
                if domain.is_empty() {
                    return Err(AlgorithmError::EmptyDomain {
                        row: self.position.row,
                        column: self.position.column,
                    });
                }
                let len = domain.len();
                let index = random.choose(len);
                let tile = domain.nth(index).ok_or(AlgorithmError::OutOfRange {
                    index,
                    max: len - 1,
                })?;
                debug!("Random selection {tile} from {domain}");
                tile
            }
            Choice::Tile(tile) => catalog.validate(tile)?,
            Choice::Index(index) => catalog.resolve_index(index)?,
        };

        self.state = CellState::Collapsed(tile);
        Ok(tile)
    }

    /// Remove every candidate not in `allowed` and return what remains
    ///
    /// Collapsed cells are left untouched and report an empty domain.
    pub fn restrict(&mut self, allowed: &Domain) -> Domain {
        match &mut self.state {
            CellState::Collapsed(tile) => {
                debug!(
                    "Cell {} is already collapsed to {tile}, skipping",
                    self.position
                );
                Domain::empty()
            }
            CellState::Uncollapsed(domain) => {
                domain.intersect_with(allowed);
                debug!("Cell {} narrowed to {domain}", self.position);
                *domain
            }
        }
    }
}
