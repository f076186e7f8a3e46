//! Generator constants and configuration defaults

/// Smallest legal grid extent: one carvable cell surrounded by border.
pub const MIN_DIMENSION: usize = 3;

/// Default map dimensions (odd, so stride-2 carving keeps a solid border)
pub const DEFAULT_WIDTH: usize = 51;
pub const DEFAULT_HEIGHT: usize = 51;

/// Room placement defaults
pub const DEFAULT_ROOM_TRIES: usize = 50;
pub const DEFAULT_TRIES_PER_ROOM: usize = 3;

/// Inverse chance of opening a connector between already-joined regions
pub const DEFAULT_EXTRA_CONNECTOR_CHANCE: u32 = 20;

/// Connectors closer than this (euclidean) to an opened one are discarded
pub const DEFAULT_CONNECTOR_SPACING: u32 = 2;

/// Upper bound for `room_extra_size`
pub const MAX_ROOM_EXTRA_SIZE: u32 = 1024;

/// Upper bound for `winding_percent`
pub const MAX_WINDING_PERCENT: u32 = 100;
