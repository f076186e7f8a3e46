//! dg-core: room-and-maze dungeon layout generation
//!
//! Builds a 2D tile grid in four stages: rooms are scattered, the leftover
//! solid space is filled with growing-tree mazes, the disjoint regions are
//! joined through connector doors, and dead-end corridors are filled back in.
//!
//! Generation is deterministic for a given seed and configuration; all
//! randomness flows through [`RandomSource`].
//!
//! Supports `no_std` environments by disabling the default `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod dungeon;

mod config;
mod consts;
mod error;
mod rng;

pub use config::GeneratorConfig;
pub use consts::*;
pub use dungeon::{Dungeon, generate, generate_with_rng};
pub use error::{Axis, ConfigError, GenerationError};
pub use rng::{DungeonRng, RandomSource};
