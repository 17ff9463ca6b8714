//! Grid engine
//!
//! This module contains the core game rules:
//! - Move directions and probe ordering
//! - The shared line slide/merge routine
//! - The tile grid with spawning and terminal-state queries

/// Move directions
pub mod direction;
/// Tile grid, rules, and queries
pub mod grid;
/// Single-line compaction and merging
pub mod line;

pub use direction::Direction;
pub use grid::{Grid, Position, Rules};
