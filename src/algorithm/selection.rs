use log::debug;

use crate::io::configuration::ENTROPY_BASELINE;
use crate::spatial::cell::{Cell, Position};

/// Find the uncollapsed cell with the fewest remaining candidates
///
/// Scans in slice order (row-major for a grid) and only replaces the current
/// candidate on a strictly lower entropy, so ties go to the earliest cell.
/// Stalled cells (entropy 0 while uncollapsed) are never selected. Returns
/// `None` when no cell can be collapsed.
pub fn lowest_entropy_position(cells: &[Cell]) -> Option<Position> {
    let mut lowest = ENTROPY_BASELINE;
    let mut candidate = None;

    for cell in cells {
        if cell.is_collapsed() {
            continue;
        }

        let entropy = cell.entropy();
        if entropy > 0 && entropy < lowest {
            candidate = Some(cell.position());
            lowest = entropy;

            // Nothing selectable can go lower
            if lowest == 1 {
                break;
            }
        }
    }

    if let Some(position) = candidate {
        debug!("The cell with the lowest entropy: {position} ({lowest})");
    }

    candidate
}
