//! Game flow built on top of the grid engine

/// Greedy direction probe and autoplay driver
pub mod autoplay;
/// Playing/Won/Lost state machine
pub mod session;

pub use autoplay::{Autoplayer, GameRecord, GreedyProbe};
pub use session::{Session, Status, Turn};
