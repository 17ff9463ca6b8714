//! Game rule constants and runtime configuration defaults

// Smaller boards cannot hold an adjacent pair in both axes
/// Minimum accepted grid side length
pub const MIN_GRID_SIZE: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum accepted grid side length
pub const MAX_GRID_SIZE: usize = 1024;

/// Grid side length used when none is given
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Tile value that ends the game with a win
pub const DEFAULT_WINNING_TILE: u32 = 2048;

/// Smallest winning tile that a spawned 2 can still reach by merging
pub const MIN_WINNING_TILE: u32 = 4;

// A pair of 2^31 tiles would overflow u32 and never merges
/// Largest tile accepted from a restored matrix or as a winning value
pub const MAX_TILE_VALUE: u32 = 1 << 30;

// Spawn distribution
/// Value of the common spawned tile
pub const SPAWN_LOW_VALUE: u32 = 2;
/// Value of the rare spawned tile
pub const SPAWN_HIGH_VALUE: u32 = 4;
/// Probability that a spawned tile is the rare one
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

// Default values for configurable parameters
/// Fixed seed for reproducible batches
pub const DEFAULT_SEED: u64 = 42;

/// Default number of games per batch
pub const DEFAULT_GAMES: usize = 1;

// Caps runaway games on very large boards
/// Default maximum moves per game before it is recorded as unfinished
pub const DEFAULT_MAX_MOVES: usize = 100_000;

/// Number of ranked scores shown in the batch summary
pub const DEFAULT_TOP_SCORES: usize = 3;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Only redraw the move counter every this many moves
pub const PROGRESS_MOVE_STRIDE: usize = 64;
