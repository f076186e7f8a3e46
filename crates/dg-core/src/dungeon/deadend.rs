//! Dead-end removal
//!
//! Fills in any open cell with a single exit, repeating until none remain,
//! so every corridor left in the maze leads somewhere.

use log::trace;

use super::grid::TileGrid;

/// Fill dead ends until a full pass changes nothing.
///
/// Returns the number of cells filled.
pub fn remove_dead_ends(grid: &mut TileGrid) -> usize {
    let mut filled = 0;
    let mut passes = 0;

    loop {
        passes += 1;
        let mut changed = 0;
        for pos in grid.interior() {
            if grid[pos].is_solid() {
                continue;
            }
            // If it only has one exit, it's a dead end
            if grid.open_neighbor_count(pos) == 1 {
                grid.fill(pos);
                changed += 1;
            }
        }
        filled += changed;
        if changed == 0 {
            break;
        }
    }

    trace!("filled {filled} dead-end cells in {passes} passes");
    filled
}
