use log::warn;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::cell::Position;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::Direction;

/// Restrict the four orthogonal neighbors of a collapsed cell
///
/// Each in-bounds neighbor keeps only the tiles the collapsed tile allows in
/// that direction; the neighbor above uses the `Up` rule and so on. Collapsed
/// neighbors are left untouched. Returns the neighbors whose domains were
/// narrowed, in `Direction::ALL` order.
///
/// # Errors
///
/// Returns an error if:
/// - The position lies outside the grid (`InvalidParameter`)
/// - The cell has not collapsed, so has no rules to apply (`UnknownTile`)
pub fn propagate(grid: &mut Grid, position: Position) -> Result<Vec<Position>> {
    let tile = grid
        .cell(position)
        .ok_or_else(|| invalid_parameter("position", &position, &"outside the grid"))?
        .display_tile();
    let catalog = grid.shared_catalog();

    let mut restricted = Vec::with_capacity(Direction::ALL.len());
    for direction in Direction::ALL {
        let Some(neighbor) = grid.neighbor(position, direction) else {
            continue;
        };

        let allowed = catalog.allowed_neighbors(tile, direction)?;
        let Some(cell) = grid.cell_mut(neighbor) else {
            continue;
        };
        if cell.is_collapsed() {
            continue;
        }

        if cell.restrict(allowed).is_empty() {
            warn!("Cell {neighbor} has no candidates left after {tile} was placed at {position}");
        }
        restricted.push(neighbor);
    }

    Ok(restricted)
}
