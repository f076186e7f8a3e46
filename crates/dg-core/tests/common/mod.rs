//! Shared helpers for dg-core integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use dg_core::RandomSource;
use dg_core::dungeon::{Pos, TileGrid};

/// A random source that replays a fixed script of draws.
///
/// Once the script runs out every draw returns the low end of its range.
pub struct ScriptedRng {
    values: VecDeque<u32>,
    pub draws: usize,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            draws: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRng {
    fn range(&mut self, min: u32, max: u32) -> u32 {
        self.draws += 1;
        let Some(value) = self.values.pop_front() else {
            return min;
        };
        assert!(
            value >= min && (value < max || max <= min),
            "scripted draw {value} outside [{min}, {max})"
        );
        value
    }
}

/// Number of non-solid cells reachable from the first non-solid cell
pub fn reachable_open_cells(grid: &TileGrid) -> usize {
    let Some((start, _)) = grid.iter().find(|(_, cell)| !cell.is_solid()) else {
        return 0;
    };
    let mut seen = vec![false; grid.width() * grid.height()];
    let index = |p: Pos| p.y * grid.width() + p.x;
    let mut queue = VecDeque::from([start]);
    seen[index(start)] = true;
    let mut count = 0;

    while let Some(pos) = queue.pop_front() {
        count += 1;
        for next in grid.neighbors(pos) {
            if !grid[next].is_solid() && !seen[index(next)] {
                seen[index(next)] = true;
                queue.push_back(next);
            }
        }
    }
    count
}

pub fn open_cells(grid: &TileGrid) -> usize {
    grid.iter().filter(|(_, cell)| !cell.is_solid()).count()
}

/// Interior open cells with exactly one open neighbor
pub fn dead_ends(grid: &TileGrid) -> Vec<Pos> {
    grid.interior()
        .filter(|&pos| !grid[pos].is_solid() && grid.open_neighbor_count(pos) == 1)
        .collect()
}
