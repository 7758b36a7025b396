use bitvec::prelude::*;
use std::fmt;

use crate::io::configuration::RESOLVED_TILE_COUNT;
use crate::spatial::tiles::Tile;

// Bits past RESOLVED_TILE_COUNT stay zero so counts need no masking
const FULL_MASK: u8 = (1 << RESOLVED_TILE_COUNT) - 1;

/// Candidate tiles still eligible for a cell
///
/// Fixed-width bitset indexed by `Tile::index`, stored inline so cells carry
/// no heap allocation. Iteration always yields tiles in ascending index order,
/// so draws from a domain are reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain {
    bits: BitArray<[u8; 1], Lsb0>,
}

impl Default for Domain {
    fn default() -> Self {
        Self::empty()
    }
}

impl Domain {
    /// Create a domain with no candidates
    pub fn empty() -> Self {
        Self {
            bits: BitArray::new([0]),
        }
    }

    /// Create a domain containing every resolved tile
    pub fn full() -> Self {
        Self {
            bits: BitArray::new([FULL_MASK]),
        }
    }

    /// Build a domain from any collection of tiles
    ///
    /// The sentinel tile is never a candidate and is ignored.
    pub fn from_tiles<I: IntoIterator<Item = Tile>>(tiles: I) -> Self {
        let mut domain = Self::empty();
        for tile in tiles {
            domain.insert(tile);
        }
        domain
    }

    /// Add a tile to the domain
    pub fn insert(&mut self, tile: Tile) {
        if let Some(index) = tile.index() {
            self.bits.set(index, true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: Tile) -> bool {
        tile.index()
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Keep only tiles also present in `other`
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= other.bits.as_bitslice();
    }

    /// Create a new domain containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = *self;
        result.intersect_with(other);
        result
    }

    /// Test if no candidates remain
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count remaining candidates
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// The `n`th remaining candidate in ascending order
    pub fn nth(&self, n: usize) -> Option<Tile> {
        self.bits.iter_ones().nth(n).and_then(Tile::from_index)
    }

    /// Iterate remaining candidates in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.bits.iter_ones().filter_map(Tile::from_index)
    }

    /// Collect remaining candidates in ascending order
    pub fn to_vec(&self) -> Vec<Tile> {
        self.iter().collect()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Tile::name).collect();
        write!(f, "Domain({} tiles: {names:?})", self.len())
    }
}
