//! Map cell types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Identifier of a carved region (one room or one maze run)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RegionId(pub u32);

impl RegionId {
    /// Index into per-region tables
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// What occupies a cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileContent {
    #[default]
    Stone = 0,
    /// Room floor, maze seeds, and connectors opened without a door
    Open = 1,
    /// Carved maze corridor
    Passage = 2,
    /// Stone outlining open space
    Wall = 3,
    OpenDoor = 4,
    ClosedDoor = 5,
}

impl TileContent {
    /// Solid cells block movement and can be carved or opened
    pub const fn is_solid(&self) -> bool {
        matches!(self, TileContent::Stone | TileContent::Wall)
    }

    /// Open or closed door left by the connector pass
    pub const fn is_door(&self) -> bool {
        matches!(self, TileContent::OpenDoor | TileContent::ClosedDoor)
    }

    /// Get the display character for this content
    pub const fn symbol(&self) -> char {
        match self {
            TileContent::Stone => ' ',
            TileContent::Wall => '#',
            TileContent::Open => '.',
            TileContent::Passage => '.',
            TileContent::OpenDoor => '\'',
            TileContent::ClosedDoor => '+',
        }
    }
}

/// A single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub content: TileContent,
    /// Region the cell was carved under, if any
    pub region: Option<RegionId>,
}

impl Cell {
    /// Create a new stone cell
    pub const fn stone() -> Self {
        Self {
            content: TileContent::Stone,
            region: None,
        }
    }

    /// Create a cell carved under `region`
    pub const fn carved(content: TileContent, region: RegionId) -> Self {
        Self {
            content,
            region: Some(region),
        }
    }

    pub const fn is_solid(&self) -> bool {
        self.content.is_solid()
    }
}
