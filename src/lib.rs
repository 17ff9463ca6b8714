//! Rules engine for 2048-style sliding tile merge puzzles
//!
//! A square grid of power-of-two tiles slides and merges toward one of four
//! edges, spawns new tiles, keeps score, and reports win and stuck states.
//! Around that core sit a session state machine, a greedy autoplay driver,
//! and batch statistics used by the command-line runner.

#![forbid(unsafe_code)]

/// Batch result aggregation
pub mod analysis;
/// Grid state, move/merge rules, and terminal-state queries
pub mod engine;
/// Game sessions and automated play
pub mod game;
/// Configuration, errors, logging, progress, and the command-line interface
pub mod io;

pub use engine::{Direction, Grid, Rules};
pub use game::{Session, Status};
pub use io::error::{GameError, Result};
