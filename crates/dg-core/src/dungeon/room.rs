//! Room placement
//!
//! Rooms are odd-sized and placed on odd coordinates so their edges line up
//! with the maze lattice carved afterwards.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::trace;

use super::cell::{RegionId, TileContent};
use super::grid::{Pos, TileGrid};
use super::region::RegionAllocator;
use crate::config::GeneratorConfig;
use crate::rng::RandomSource;

/// An accepted room rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// X coordinate of the left column
    pub x: usize,
    /// Y coordinate of the top row
    pub y: usize,
    pub width: usize,
    pub height: usize,
    /// Region the room was carved under
    pub region: RegionId,
}

impl Room {
    pub fn new(x: usize, y: usize, width: usize, height: usize, region: RegionId) -> Self {
        Self {
            x,
            y,
            width,
            height,
            region,
        }
    }

    /// True unless at least `buffer` stone cells separate the two rooms on
    /// some axis
    pub fn overlaps(&self, other: &Room, buffer: usize) -> bool {
        let apart_x = other.x >= self.x + self.width + buffer
            || self.x >= other.x + other.width + buffer;
        let apart_y = other.y >= self.y + self.height + buffer
            || self.y >= other.y + other.height + buffer;
        !(apart_x || apart_y)
    }

    /// Every covered coordinate, row by row
    pub fn cells(&self) -> impl Iterator<Item = Pos> + use<> {
        let Room { x, y, width, height, .. } = *self;
        (y..y + height).flat_map(move |row| (x..x + width).map(move |col| Pos::new(col, row)))
    }
}

/// Pick an odd room size, stretched along one axis by an even amount.
///
/// `extra_size` must not exceed [`MAX_ROOM_EXTRA_SIZE`](crate::MAX_ROOM_EXTRA_SIZE).
///
/// Returns (width, height).
pub fn random_room_size<R: RandomSource + ?Sized>(rng: &mut R, extra_size: u32) -> (usize, usize) {
    let size = rng.range(1, 3 + extra_size) * 2 + 1;
    let rectangularity = rng.range(0, 1 + size / 2) * 2;
    let (mut width, mut height) = (size, size);
    if rng.one_in(2) {
        width += rectangularity;
    } else {
        height += rectangularity;
    }
    (width as usize, height as usize)
}

/// Scatter rooms over the grid, carving each accepted one as `Open`.
///
/// Makes `num_room_tries` attempts; an attempt that finds no free position in
/// `tries_per_room` tries is dropped without consuming a region id.
pub fn place_rooms<R: RandomSource + ?Sized>(
    grid: &mut TileGrid,
    regions: &mut RegionAllocator,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::new();

    for attempt in 0..config.num_room_tries {
        let (width, height) = random_room_size(rng, config.room_extra_size);

        // Keep the outer ring solid
        if width + 2 > grid.width() || height + 2 > grid.height() {
            trace!("room #{attempt}: {width}x{height} cannot fit");
            continue;
        }

        // Odd offsets in [1, extent - size - 1]
        let x_slots = ((grid.width() - width) / 2) as u32;
        let y_slots = ((grid.height() - height) / 2) as u32;

        for _ in 0..config.tries_per_room {
            let x = rng.range(0, x_slots) as usize * 2 + 1;
            let y = rng.range(0, y_slots) as usize * 2 + 1;

            // Region is assigned on acceptance
            let candidate = Room::new(x, y, width, height, RegionId(0));
            if rooms
                .iter()
                .any(|r| candidate.overlaps(r, config.room_separation))
            {
                trace!("room #{attempt}: ({x},{y}) {width}x{height} rejected, overlaps");
                continue;
            }

            let room = Room {
                region: regions.start_region(),
                ..candidate
            };
            carve_room(grid, &room);
            trace!("room #{attempt}: placed {room:?}");
            rooms.push(room);
            break;
        }
    }

    rooms
}

/// Carve every cell of `room` to `Open` under the room's region
pub fn carve_room(grid: &mut TileGrid, room: &Room) {
    for pos in room.cells() {
        grid.carve(pos, TileContent::Open, room.region);
    }
}
