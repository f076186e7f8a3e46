//! Dungeon generation pipeline
//!
//! Starting from solid stone:
//!
//! 1. Scatter randomly sized rooms, discarding any that overlap.
//! 2. Fill the remaining solid space with growing-tree mazes.
//! 3. Open connectors between regions until everything is joined, with a
//!    small chance of extra openings so the dungeon has loops.
//! 4. Fill in dead ends so every corridor leads somewhere.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::{debug, info};

use super::connect::connect_regions;
use super::deadend::remove_dead_ends;
use super::grid::TileGrid;
use super::maze::carve_mazes;
use super::region::RegionAllocator;
use super::room::{Room, place_rooms};
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::rng::{DungeonRng, RandomSource};

/// Counters collected while generating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub rooms_placed: usize,
    pub maze_runs: usize,
    /// Rooms plus maze runs
    pub regions: usize,
    pub junctions: usize,
    pub extra_junctions: usize,
    pub dead_ends_filled: usize,
    /// Doors standing in the finished layout
    pub doors: usize,
    /// Stone cells turned into `Wall` by the outline pass
    pub walls_outlined: usize,
}

/// A finished dungeon layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dungeon {
    grid: TileGrid,
    rooms: Vec<Room>,
    stats: GenerationStats,
}

impl Dungeon {
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Accepted rooms, in placement order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Take ownership of the grid
    pub fn into_grid(self) -> TileGrid {
        self.grid
    }
}

/// Generate a dungeon using a [`DungeonRng`] seeded from `config.seed`
pub fn generate(config: &GeneratorConfig) -> Result<Dungeon, GenerationError> {
    let mut rng = DungeonRng::new(config.seed);
    generate_with_rng(config, &mut rng)
}

/// Generate a dungeon drawing from `rng`; `config.seed` is ignored
pub fn generate_with_rng<R: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Dungeon, GenerationError> {
    config.validate()?;

    let mut grid = TileGrid::new(config.width, config.height)?;
    let mut regions = RegionAllocator::new();
    let mut stats = GenerationStats::default();

    let rooms = place_rooms(&mut grid, &mut regions, config, rng);
    stats.rooms_placed = rooms.len();
    debug!(
        "placed {} rooms in {} attempts",
        rooms.len(),
        config.num_room_tries
    );

    stats.maze_runs = carve_mazes(&mut grid, &mut regions, config.winding_percent, rng);
    stats.regions = regions.count();
    debug!("carved {} maze runs, {} regions", stats.maze_runs, stats.regions);

    let connected = connect_regions(
        &mut grid,
        regions.count(),
        config.extra_connector_chance,
        config.min_connector_spacing,
        rng,
    )?;
    stats.junctions = connected.junctions;
    stats.extra_junctions = connected.extra_junctions;
    debug!(
        "opened {} connectors ({} extra)",
        connected.junctions, connected.extra_junctions
    );

    stats.dead_ends_filled = remove_dead_ends(&mut grid);
    debug!("filled {} dead-end cells", stats.dead_ends_filled);

    stats.doors = grid.iter().filter(|(_, cell)| cell.content.is_door()).count();

    if config.outline_walls {
        stats.walls_outlined = grid.outline_walls();
    }

    info!(
        "generated {}x{} dungeon: {} rooms, {} regions, {} connectors, {} doors",
        config.width,
        config.height,
        stats.rooms_placed,
        stats.regions,
        stats.junctions + stats.extra_junctions,
        stats.doors
    );

    Ok(Dungeon { grid, rooms, stats })
}
