//! Dungeon layout
//!
//! Contains the tile grid, region bookkeeping, and the generation stages.

mod cell;
mod connect;
mod deadend;
mod generation;
mod grid;
mod maze;
mod region;
mod room;

pub use cell::{Cell, RegionId, TileContent};
pub use connect::{ConnectStats, Connector, add_junction, connect_regions, find_connectors};
pub use deadend::remove_dead_ends;
pub use generation::{Dungeon, GenerationStats, generate, generate_with_rng};
pub use grid::{Direction, Pos, TileGrid};
pub use maze::{carve_mazes, grow_maze};
pub use region::{RegionAllocator, RegionSets};
pub use room::{Room, carve_room, place_rooms, random_room_size};
