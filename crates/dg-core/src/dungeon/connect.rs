//! Region connection
//!
//! After carving, rooms and maze runs are disjoint regions separated by
//! single solid cells. Any solid cell touching two or more regions is a
//! connector; opening connectors at random merges regions until one is left.
//!
//! 1. Collect every connector with the set of regions it touches
//! 2. Open a random connector and merge the regions it spans
//! 3. Discard connectors whose regions are now all merged, occasionally
//!    opening one anyway for a loop unless it sits near the one just opened
//! 4. Repeat until a single region remains

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::trace;

use super::cell::{RegionId, TileContent};
use super::grid::{Pos, TileGrid};
use super::region::RegionSets;
use crate::error::GenerationError;
use crate::rng::RandomSource;

/// A solid cell touching two or more regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    pub pos: Pos,
    /// Distinct regions among the cardinal neighbors, ascending
    pub regions: Vec<RegionId>,
}

/// Counts of connectors opened while joining regions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectStats {
    /// Connectors needed to join all regions
    pub junctions: usize,
    /// Connectors opened between already-joined regions
    pub extra_junctions: usize,
}

/// Find every solid interior cell touching two or more distinct regions,
/// in row-major order
pub fn find_connectors(grid: &TileGrid) -> Vec<Connector> {
    grid.interior()
        .filter(|&pos| grid[pos].is_solid())
        .filter_map(|pos| {
            let mut regions: Vec<RegionId> =
                grid.neighbors(pos).filter_map(|n| grid.region(n)).collect();
            regions.sort_unstable();
            regions.dedup();
            (regions.len() >= 2).then_some(Connector { pos, regions })
        })
        .collect()
}

/// Open a connector as floor, an open door, or (most often) a closed door
pub fn add_junction<R: RandomSource + ?Sized>(grid: &mut TileGrid, pos: Pos, rng: &mut R) {
    let content = if rng.one_in(4) {
        if rng.one_in(3) {
            TileContent::OpenDoor
        } else {
            TileContent::Open
        }
    } else {
        TileContent::ClosedDoor
    };
    grid.set_content(pos, content);
}

/// Join all `region_count` regions into one connected area.
///
/// `extra_connector_chance` is the inverse chance that a redundant connector
/// is opened anyway; `min_spacing` keeps those extra openings away from the
/// connector just used. A connector that still joins separate regions is
/// never discarded for spacing.
pub fn connect_regions<R: RandomSource + ?Sized>(
    grid: &mut TileGrid,
    region_count: usize,
    extra_connector_chance: u32,
    min_spacing: u32,
    rng: &mut R,
) -> Result<ConnectStats, GenerationError> {
    let mut connectors = find_connectors(grid);
    let mut merged = RegionSets::new(region_count);
    let mut open_regions = region_count;
    let mut stats = ConnectStats::default();
    let spacing_sq = (min_spacing as usize).pow(2);

    trace!(
        "{} connector candidates for {region_count} regions",
        connectors.len()
    );

    while open_regions > 1 {
        if connectors.is_empty() {
            return Err(GenerationError::Disconnected { open_regions });
        }

        let pick = rng.range(0, connectors.len() as u32) as usize;
        let connector = connectors[pick].pos;
        add_junction(grid, connector, rng);
        stats.junctions += 1;

        // Merge everything the connector touches into its first region
        let spanned = merged.resolve(&connectors[pick].regions);
        if let Some((&dest, sources)) = spanned.split_first() {
            for &source in sources {
                if merged.union(dest, source) {
                    open_regions -= 1;
                }
            }
        }
        trace!("opened {connector:?}, {open_regions} regions left open");

        connectors.retain(|candidate| {
            if candidate.pos == connector {
                return false;
            }

            // Still spans separate regions, keep it however close it is
            if merged.resolve(&candidate.regions).len() > 1 {
                return true;
            }

            // Don't open extra connectors right next to each other
            if candidate.pos.distance_sq(connector) < spacing_sq {
                return false;
            }

            // Redundant, but occasionally open it so the dungeon has loops
            if rng.one_in(extra_connector_chance) {
                add_junction(grid, candidate.pos, rng);
                stats.extra_junctions += 1;
            }
            false
        });
    }

    Ok(stats)
}
