//! Tile identifiers, raster patterns and the adjacency compatibility table
//!
//! Every resolved tile has a wall or path edge on each side. Two tiles may sit
//! next to each other when the touching sides are of the same kind, so the
//! whole rule table is derived once from the edge table at construction.

use std::fmt;
use std::str::FromStr;

use crate::algorithm::domain::Domain;
use crate::io::configuration::{RESOLVED_TILE_COUNT, TILE_SIZE};
use crate::io::error::{AlgorithmError, Result, unknown_tile};

/// A 3x3 binary raster block (1 = path pixel, 0 = wall pixel)
pub type Pattern = [[u8; TILE_SIZE]; TILE_SIZE];

/// Tile identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    /// No connections
    Blank,
    /// Paths up, down and right
    TeeRight,
    /// Paths left, right and down
    TeeDown,
    /// Paths up, down and left
    TeeLeft,
    /// Paths up, left and right
    TeeUp,
    /// Path from left to right
    Horizontal,
    /// Path from top to bottom
    Vertical,
    /// Placeholder shown for cells that have not collapsed; never a candidate
    Unresolved,
}

impl Tile {
    /// Resolved tiles in catalog order
    pub const RESOLVED: [Self; RESOLVED_TILE_COUNT] = [
        Self::Blank,
        Self::TeeRight,
        Self::TeeDown,
        Self::TeeLeft,
        Self::TeeUp,
        Self::Horizontal,
        Self::Vertical,
    ];

    /// Position in the resolved tile list, `None` for the sentinel
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Blank => Some(0),
            Self::TeeRight => Some(1),
            Self::TeeDown => Some(2),
            Self::TeeLeft => Some(3),
            Self::TeeUp => Some(4),
            Self::Horizontal => Some(5),
            Self::Vertical => Some(6),
            Self::Unresolved => None,
        }
    }

    /// Resolved tile at a catalog position
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < RESOLVED_TILE_COUNT {
            Some(Self::RESOLVED[index])
        } else {
            None
        }
    }

    /// Check whether this tile may appear in a domain
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    /// Stable lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::TeeRight => "tee-right",
            Self::TeeDown => "tee-down",
            Self::TeeLeft => "tee-left",
            Self::TeeUp => "tee-up",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Unresolved => "unresolved",
        }
    }

    const fn pattern(self) -> Pattern {
        match self {
            Self::Blank => [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
            Self::TeeRight => [[0, 1, 0], [0, 1, 1], [0, 1, 0]],
            Self::TeeDown => [[0, 0, 0], [1, 1, 1], [0, 1, 0]],
            Self::TeeLeft => [[0, 1, 0], [1, 1, 0], [0, 1, 0]],
            Self::TeeUp => [[0, 1, 0], [1, 1, 1], [0, 0, 0]],
            Self::Horizontal => [[0, 0, 0], [1, 1, 1], [0, 0, 0]],
            Self::Vertical => [[0, 1, 0], [0, 1, 0], [0, 1, 0]],
            Self::Unresolved => [[1, 1, 1], [1, 1, 1], [1, 1, 1]],
        }
    }

    // Side order follows Direction::ALL: up, down, left, right
    const fn edges(self) -> Option<[Edge; 4]> {
        use Edge::{Path, Wall};
        match self {
            Self::Blank => Some([Wall, Wall, Wall, Wall]),
            Self::TeeRight => Some([Path, Path, Wall, Path]),
            Self::TeeDown => Some([Wall, Path, Path, Path]),
            Self::TeeLeft => Some([Path, Path, Path, Wall]),
            Self::TeeUp => Some([Path, Wall, Path, Path]),
            Self::Horizontal => Some([Wall, Wall, Path, Path]),
            Self::Vertical => Some([Path, Path, Wall, Wall]),
            Self::Unresolved => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tile {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::RESOLVED
            .into_iter()
            .chain([Self::Unresolved])
            .find(|tile| tile.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| unknown_tile(&s))
    }
}

/// Side category shared by touching tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Side closed off by wall pixels
    Wall,
    /// Side crossed by a path
    Path,
}

/// Cardinal direction from a cell to one of its neighbors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Previous row
    Up,
    /// Next row
    Down,
    /// Previous column
    Left,
    /// Next column
    Right,
}

impl Direction {
    /// All directions in propagation order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Position in `ALL`
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// The direction pointing back
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Row and column step for this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Uppercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AlgorithmError::UnknownDirection {
                name: s.to_string(),
            })
    }
}

/// Immutable registry of tile patterns and adjacency rules
///
/// Rules are stored flat, indexed by `tile * 4 + direction`, so each lookup is
/// a single slice access. Safe to share read-only between grids.
#[derive(Clone, Debug)]
pub struct TileCatalog {
    rules: Vec<Domain>,
}

impl Default for TileCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TileCatalog {
    /// Build the catalog and derive the adjacency table from the edge table
    pub fn new() -> Self {
        let mut rules = Vec::with_capacity(RESOLVED_TILE_COUNT * Direction::ALL.len());

        for tile in Tile::RESOLVED {
            for direction in Direction::ALL {
                let side = Self::edge(tile, direction);
                let allowed = Domain::from_tiles(Tile::RESOLVED.into_iter().filter(|&other| {
                    side.is_some() && Self::edge(other, direction.opposite()) == side
                }));
                rules.push(allowed);
            }
        }

        Self { rules }
    }

    fn edge(tile: Tile, direction: Direction) -> Option<Edge> {
        tile.edges()
            .and_then(|edges| edges.get(direction.index()).copied())
    }

    /// Resolved tiles in catalog order
    pub const fn resolved_tiles(&self) -> &'static [Tile] {
        &Tile::RESOLVED
    }

    /// Raster pattern for a tile, including the sentinel
    pub const fn pattern(&self, tile: Tile) -> Pattern {
        tile.pattern()
    }

    /// Edge kinds of a resolved tile in `Direction::ALL` order
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` for the sentinel
    pub fn edges(&self, tile: Tile) -> Result<[Edge; 4]> {
        tile.edges().ok_or_else(|| unknown_tile(&tile))
    }

    /// Tiles that may legally occupy the neighbor of `tile` in `direction`
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` for the sentinel, which has no rules
    pub fn allowed_neighbors(&self, tile: Tile, direction: Direction) -> Result<&Domain> {
        tile.index()
            .and_then(|index| self.rules.get(index * Direction::ALL.len() + direction.index()))
            .ok_or_else(|| unknown_tile(&tile))
    }

    /// Map an explicit index onto the resolved tile list
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the index is past the last resolved tile
    pub fn resolve_index(&self, index: usize) -> Result<Tile> {
        Tile::from_index(index).ok_or(AlgorithmError::OutOfRange {
            index,
            max: RESOLVED_TILE_COUNT - 1,
        })
    }

    /// Accept a tile only if it is one of the resolved tiles
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` for the sentinel
    pub fn validate(&self, tile: Tile) -> Result<Tile> {
        if self.resolved_tiles().contains(&tile) {
            Ok(tile)
        } else {
            Err(unknown_tile(&tile))
        }
    }
}
