//! Maze carving with the "growing tree" algorithm
//!
//! Every odd-aligned stone cell left after room placement seeds a maze run.
//! A run walks in steps of two cells, so a wall always separates parallel
//! corridors, and backtracks along its stack when it gets stuck.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::trace;

use super::cell::{RegionId, TileContent};
use super::grid::{Direction, Pos, TileGrid};
use super::region::RegionAllocator;
use crate::rng::RandomSource;

/// Cells to carve when extending from `pos` toward `dir`, if allowed.
///
/// The cell three steps away must be in bounds, so the carved cell never
/// lands on the border, and the cell two steps away must still be stone.
/// Returns (adjacent cell, cell two steps away).
fn carve_targets(grid: &TileGrid, pos: Pos, dir: Direction) -> Option<(Pos, Pos)> {
    grid.offset(pos, dir, 3)?;
    let dest = grid.offset(pos, dir, 2)?;
    if grid.content(dest) != TileContent::Stone {
        return None;
    }
    let mid = grid.offset(pos, dir, 1)?;
    Some((mid, dest))
}

/// Fill every remaining stone pocket with mazes.
///
/// Returns the number of maze runs started.
pub fn carve_mazes<R: RandomSource + ?Sized>(
    grid: &mut TileGrid,
    regions: &mut RegionAllocator,
    winding_percent: u32,
    rng: &mut R,
) -> usize {
    let mut runs = 0;
    for y in (1..grid.height()).step_by(2) {
        for x in (1..grid.width()).step_by(2) {
            let pos = Pos::new(x, y);
            if grid.content(pos) != TileContent::Stone {
                continue;
            }
            let region = regions.start_region();
            let carved = grow_maze(grid, pos, region, winding_percent, rng);
            trace!("maze {region:?} from ({x},{y}): {carved} cells");
            runs += 1;
        }
    }
    runs
}

/// Grow one maze run from `start` under `region`.
///
/// Returns the number of cells carved.
pub fn grow_maze<R: RandomSource + ?Sized>(
    grid: &mut TileGrid,
    start: Pos,
    region: RegionId,
    winding_percent: u32,
    rng: &mut R,
) -> usize {
    let mut stack = vec![start];
    let mut last_dir: Option<Direction> = None;
    let mut carved = 1;

    grid.carve(start, TileContent::Open, region);

    while let Some(&cell) = stack.last() {
        let mut open_dirs = [(Direction::North, cell, cell); 4];
        let mut count = 0;
        for dir in Direction::CARDINAL {
            if let Some((mid, next)) = carve_targets(grid, cell, dir) {
                open_dirs[count] = (dir, mid, next);
                count += 1;
            }
        }

        if count == 0 {
            // Dead branch: back up
            stack.pop();
            last_dir = None;
            continue;
        }
        let open_dirs = &open_dirs[..count];

        // Prefer running straight unless the winding roll says turn
        let straight = last_dir.and_then(|last| open_dirs.iter().find(|(d, _, _)| *d == last));
        let (dir, mid, next) = match straight {
            Some(&step) if !rng.percent(winding_percent) => step,
            _ => open_dirs[rng.range(0, count as u32) as usize],
        };

        grid.carve(mid, TileContent::Passage, region);
        grid.carve(next, TileContent::Passage, region);
        carved += 2;

        stack.push(next);
        last_dir = Some(dir);
    }

    carved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DungeonRng;

    fn carved_grid(width: usize, height: usize, winding: u32, seed: u64) -> (TileGrid, usize) {
        let mut grid = TileGrid::new(width, height).unwrap();
        let mut regions = RegionAllocator::new();
        let mut rng = DungeonRng::new(seed);
        let runs = carve_mazes(&mut grid, &mut regions, winding, &mut rng);
        assert_eq!(runs, regions.count());
        (grid, runs)
    }

    #[test]
    fn test_empty_grid_is_one_maze() {
        let (grid, runs) = carved_grid(21, 15, 30, 42);
        assert_eq!(runs, 1);

        for (pos, cell) in grid.iter() {
            let lattice = pos.x % 2 == 1 && pos.y % 2 == 1;
            if lattice {
                assert!(!cell.is_solid(), "lattice cell {pos:?} left solid");
                assert_eq!(cell.region, Some(RegionId(0)));
            }
            if grid.is_border(pos) || (pos.x % 2 == 0 && pos.y % 2 == 0) {
                assert!(cell.is_solid(), "{pos:?} should stay solid");
            }
        }
    }

    #[test]
    fn test_seed_is_open_and_rest_passage() {
        let (grid, _) = carved_grid(11, 11, 0, 3);
        let open: Vec<_> = grid
            .iter()
            .filter(|(_, c)| c.content == TileContent::Open)
            .map(|(p, _)| p)
            .collect();
        assert_eq!(open, vec![Pos::new(1, 1)]);
    }

    #[test]
    fn test_perfect_maze_cell_count() {
        // A spanning tree over the lattice carves one connecting cell per
        // edge: lattice cells + (lattice cells - 1).
        let (grid, _) = carved_grid(15, 9, 50, 8);
        let lattice = 7 * 4;
        let carved = grid.iter().filter(|(_, c)| !c.is_solid()).count();
        assert_eq!(carved, lattice * 2 - 1);
    }

    #[test]
    fn test_passages_have_carved_neighbors() {
        let (grid, _) = carved_grid(31, 21, 70, 99);
        for (pos, cell) in grid.iter() {
            if cell.content == TileContent::Passage {
                assert!(grid.open_neighbor_count(pos) >= 1, "isolated passage at {pos:?}");
            }
        }
    }

    #[test]
    fn test_zero_winding_runs_straight() {
        // With no winding, the first run from (1,1) heads along a row or
        // column until it hits the far wall before turning.
        let (grid, _) = carved_grid(21, 21, 0, 5);
        let east_run = (1..20).all(|x| !grid[Pos::new(x, 1)].is_solid());
        let south_run = (1..20).all(|y| !grid[Pos::new(1, y)].is_solid());
        assert!(east_run || south_run);
    }

    #[test]
    fn test_maze_avoids_rooms() {
        let mut grid = TileGrid::new(15, 15).unwrap();
        let mut regions = RegionAllocator::new();
        let room_region = regions.start_region();
        for y in 5..10 {
            for x in 5..10 {
                grid.carve(Pos::new(x, y), TileContent::Open, room_region);
            }
        }
        let before: Vec<_> = (5..10)
            .flat_map(|y| (5..10).map(move |x| Pos::new(x, y)))
            .map(|p| grid[p])
            .collect();

        let mut rng = DungeonRng::new(11);
        carve_mazes(&mut grid, &mut regions, 20, &mut rng);

        let after: Vec<_> = (5..10)
            .flat_map(|y| (5..10).map(move |x| Pos::new(x, y)))
            .map(|p| grid[p])
            .collect();
        assert_eq!(before, after);

        // The ring of cells around the room stays solid
        for i in 4..11 {
            for pos in [Pos::new(i, 4), Pos::new(i, 10), Pos::new(4, i), Pos::new(10, i)] {
                assert!(grid[pos].is_solid(), "{pos:?} touches the room");
            }
        }
    }

    #[test]
    fn test_single_cell_grid() {
        let (grid, runs) = carved_grid(3, 3, 0, 0);
        assert_eq!(runs, 1);
        assert_eq!(grid.content(Pos::new(1, 1)), TileContent::Open);
        assert_eq!(grid.iter().filter(|(_, c)| !c.is_solid()).count(), 1);
    }
}
