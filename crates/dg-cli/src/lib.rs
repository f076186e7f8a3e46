//! dg-cli: command-line front end for dungeon generation
//!
//! Loads layered configuration and renders finished grids as text.

pub mod render;
pub mod settings;

pub use render::{View, render};
pub use settings::load_config;
