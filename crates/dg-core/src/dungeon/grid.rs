//! Tile grid storage and coordinate helpers

#[cfg(not(feature = "std"))]
use crate::compat::*;

use core::fmt;
use core::ops::{Index, IndexMut};

use super::cell::{Cell, RegionId, TileContent};
use crate::config::check_dimension;
use crate::error::{Axis, ConfigError};

/// A grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance
    pub fn distance_sq(self, other: Pos) -> usize {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx * dx + dy * dy
    }
}

/// Cardinal directions, in carving order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit offset (dx, dy); y grows downward
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// Fixed-size 2D array of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TileGrid {
    /// Allocate an all-stone grid.
    ///
    /// Both extents must be odd and at least [`crate::MIN_DIMENSION`].
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        check_dimension(Axis::Width, width)?;
        check_dimension(Axis::Height, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::stone(); width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Whether `pos` lies on the outermost ring of cells
    pub fn is_border(&self, pos: Pos) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x == self.width - 1 || pos.y == self.height - 1
    }

    /// Cell at `pos`, or `None` when out of bounds
    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        if self.in_bounds(pos) {
            Some(&self.cells[pos.y * self.width + pos.x])
        } else {
            None
        }
    }

    pub fn content(&self, pos: Pos) -> TileContent {
        self[pos].content
    }

    pub fn region(&self, pos: Pos) -> Option<RegionId> {
        self[pos].region
    }

    /// Set content and region together
    pub(crate) fn carve(&mut self, pos: Pos, content: TileContent, region: RegionId) {
        self[pos] = Cell::carved(content, region);
    }

    /// Change content, keeping the region tag
    pub(crate) fn set_content(&mut self, pos: Pos, content: TileContent) {
        self[pos].content = content;
    }

    /// Reset a cell to untagged stone
    pub(crate) fn fill(&mut self, pos: Pos) {
        self[pos] = Cell::stone();
    }

    /// Step `distance` cells from `pos`; `None` if that leaves the grid
    pub fn offset(&self, pos: Pos, dir: Direction, distance: usize) -> Option<Pos> {
        let (dx, dy) = dir.offset();
        let x = pos.x.checked_add_signed(dx * distance as isize)?;
        let y = pos.y.checked_add_signed(dy * distance as isize)?;
        let next = Pos::new(x, y);
        self.in_bounds(next).then_some(next)
    }

    /// In-bounds cardinal neighbors of `pos`
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Direction::CARDINAL
            .into_iter()
            .filter_map(move |dir| self.offset(pos, dir, 1))
    }

    /// Number of non-solid cardinal neighbors
    pub fn open_neighbor_count(&self, pos: Pos) -> usize {
        self.neighbors(pos).filter(|&n| !self[n].is_solid()).count()
    }

    /// All coordinates, row by row
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Pos::new(x, y)))
    }

    /// Coordinates not on the border, row by row
    pub fn interior(&self) -> impl Iterator<Item = Pos> + use<> {
        let width = self.width;
        (1..self.height - 1).flat_map(move |y| (1..width - 1).map(move |x| Pos::new(x, y)))
    }

    /// All cells with their coordinates, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    /// Mark every stone cell touching open space (including diagonally) as wall
    pub fn outline_walls(&mut self) -> usize {
        let targets: Vec<Pos> = self
            .positions()
            .filter(|&pos| self[pos].content == TileContent::Stone)
            .filter(|&pos| self.touches_open(pos))
            .collect();
        for &pos in &targets {
            self.set_content(pos, TileContent::Wall);
        }
        targets.len()
    }

    fn touches_open(&self, pos: Pos) -> bool {
        let mut y_range = pos.y.saturating_sub(1)..=(pos.y + 1).min(self.height - 1);
        y_range.any(|y| {
            let mut x_range = pos.x.saturating_sub(1)..=(pos.x + 1).min(self.width - 1);
            x_range.any(|x| !self[Pos::new(x, y)].is_solid())
        })
    }
}

impl Index<Pos> for TileGrid {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Cell {
        assert!(
            self.in_bounds(pos),
            "({}, {}) is outside the {}x{} grid",
            pos.x,
            pos.y,
            self.width,
            self.height
        );
        &self.cells[pos.y * self.width + pos.x]
    }
}

impl IndexMut<Pos> for TileGrid {
    fn index_mut(&mut self, pos: Pos) -> &mut Cell {
        assert!(
            self.in_bounds(pos),
            "({}, {}) is outside the {}x{} grid",
            pos.x,
            pos.y,
            self.width,
            self.height
        );
        &mut self.cells[pos.y * self.width + pos.x]
    }
}

/// One text line per row, using [`TileContent::symbol`]
impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "{}", cell.content.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
