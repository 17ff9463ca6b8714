//! Tile matrix, move/merge rules, spawning, and terminal-state queries
//!
//! The grid owns an `N x N` matrix of tile values where 0 is an empty cell,
//! the running score, the rules that decide spawning and winning, and the
//! random source used for spawns. Moves in all four directions run the same
//! line routine over an oriented view of the matrix: rows as-is for LEFT,
//! column-reversed for RIGHT, transposed for UP, and transposed then reversed
//! for DOWN. Every line therefore slides toward index 0 of its view.

use std::fmt;

use ndarray::{Array2, ArrayViewMut2, Axis};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::engine::direction::Direction;
use crate::engine::line::{merged_value, slide_line};
use crate::io::configuration::{
    DEFAULT_WINNING_TILE, MAX_GRID_SIZE, MAX_TILE_VALUE, MIN_GRID_SIZE, MIN_WINNING_TILE,
    SPAWN_FOUR_PROBABILITY, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE,
};
use crate::io::error::{GameError, Result, invalid_parameter};

/// Cell coordinates as `(row, col)`
pub type Position = (usize, usize);

/// Neighbour priority used by [`Grid::mergeable_direction`]
const MERGE_PROBE_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

/// Tunable game rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    /// Tile value that wins the game (power of two)
    pub winning_tile: u32,
    /// Probability that a spawned tile is a 4 instead of a 2
    pub four_probability: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            winning_tile: DEFAULT_WINNING_TILE,
            four_probability: SPAWN_FOUR_PROBABILITY,
        }
    }
}

impl Rules {
    /// Create validated rules
    ///
    /// # Errors
    ///
    /// Returns an error if the winning tile is not a power of two of at least
    /// 4, or the probability lies outside `[0, 1]`
    pub fn new(winning_tile: u32, four_probability: f64) -> Result<Self> {
        let rules = Self {
            winning_tile,
            four_probability,
        };
        rules.validate()?;
        Ok(rules)
    }

    /// Check that the rules describe a playable game
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field
    pub fn validate(&self) -> Result<()> {
        if !self.winning_tile.is_power_of_two() || self.winning_tile < MIN_WINNING_TILE {
            return Err(invalid_parameter(
                "winning_tile",
                &self.winning_tile,
                &format!("must be a power of two no smaller than {MIN_WINNING_TILE}"),
            ));
        }
        if self.winning_tile > MAX_TILE_VALUE {
            return Err(invalid_parameter(
                "winning_tile",
                &self.winning_tile,
                &format!("must not exceed {MAX_TILE_VALUE}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(invalid_parameter(
                "four_probability",
                &self.four_probability,
                &"must lie within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// The grid engine: tile matrix, score, rules, and spawn randomness
///
/// The random source is a type parameter so tests and replays can inject a
/// seeded or scripted generator without touching the move logic.
#[derive(Debug, Clone)]
pub struct Grid<R = StdRng> {
    cells: Array2<u32>,
    score: u64,
    rules: Rules,
    rng: R,
}

impl Grid<StdRng> {
    /// Create an empty grid with default rules and an OS-seeded generator
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] if `size` is out of range
    pub fn new(size: usize) -> Result<Self> {
        Self::with_rng(size, Rules::default(), StdRng::from_os_rng())
    }

    /// Create an empty grid with default rules and a reproducible generator
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] if `size` is out of range
    pub fn seeded(size: usize, seed: u64) -> Result<Self> {
        Self::with_rng(size, Rules::default(), StdRng::seed_from_u64(seed))
    }

    /// Restore a grid from an existing tile matrix with default rules
    ///
    /// # Errors
    ///
    /// See [`Grid::from_cells`]
    pub fn restore(cells: Array2<u32>, seed: u64) -> Result<Self> {
        Self::from_cells(cells, Rules::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Grid<R> {
    /// Create an empty grid with explicit rules and random source
    ///
    /// # Errors
    ///
    /// Returns an error if the size is out of range or the rules are invalid
    pub fn with_rng(size: usize, rules: Rules, rng: R) -> Result<Self> {
        validate_size(size)?;
        rules.validate()?;

        Ok(Self {
            cells: Array2::zeros((size, size)),
            score: 0,
            rules,
            rng,
        })
    }

    /// Create a grid holding the given tiles, with a score of 0
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square, its side is out of
    /// range, a tile is too large to merge, or the rules are invalid
    pub fn from_cells(cells: Array2<u32>, rules: Rules, rng: R) -> Result<Self> {
        if cells.nrows() != cells.ncols() {
            return Err(invalid_parameter(
                "cells",
                &format!("{}x{}", cells.nrows(), cells.ncols()),
                &"grid must be square",
            ));
        }
        validate_size(cells.nrows())?;
        rules.validate()?;

        if let Some(&value) = cells.iter().find(|&&v| v > MAX_TILE_VALUE) {
            return Err(invalid_parameter(
                "cells",
                &value,
                &format!("tiles must not exceed {MAX_TILE_VALUE}"),
            ));
        }

        Ok(Self {
            cells,
            score: 0,
            rules,
            rng,
        })
    }

    /// Place a 2 (or, rarely, a 4) on a uniformly chosen empty cell
    ///
    /// Returns the position written, or `None` without touching the grid when
    /// no cell is empty.
    pub fn spawn(&mut self) -> Option<Position> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let position = *empty.get(self.rng.random_range(0..empty.len()))?;
        let value = if self.rng.random_bool(self.rules.four_probability) {
            SPAWN_HIGH_VALUE
        } else {
            SPAWN_LOW_VALUE
        };

        *self.cells.get_mut(position)? = value;
        Some(position)
    }
}

impl<R> Grid<R> {
    /// Slide every line toward `direction`, merging equal neighbours once
    ///
    /// Returns whether any cell changed. A move that changes nothing is a
    /// silent no-op. Each merge adds the merged value to the score.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let mut moved = false;
        let mut gained = 0;

        let mut view = oriented_view(self.cells.view_mut(), direction);
        for mut line in view.rows_mut() {
            let current: Vec<u32> = line.iter().copied().collect();
            let slid = slide_line(&current);
            gained += slid.score;

            for (cell, &value) in line.iter_mut().zip(&slid.tiles) {
                if *cell != value {
                    *cell = value;
                    moved = true;
                }
            }
        }

        self.score += gained;
        moved
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// True when a move might still be possible
    ///
    /// An empty cell counts as enough, even if no slide or merge would result.
    /// Use it to detect a stuck board, never to decide a win.
    pub fn can_move(&self) -> bool {
        !self.is_full() || self.has_adjacent_pair()
    }

    /// Direction of the first mergeable pair in row-major order
    ///
    /// For each non-empty cell the right, down, left, and up neighbours are
    /// checked in that order; the first neighbour it can merge with decides.
    pub fn mergeable_direction(&self) -> Option<Direction> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value != 0)
            .find_map(|(position, _)| {
                MERGE_PROBE_ORDER
                    .into_iter()
                    .find(|&direction| self.merges_toward(position, direction))
            })
    }

    /// True when some tile has reached the winning value
    pub fn has_won(&self) -> bool {
        self.cells.iter().any(|&v| v == self.rules.winning_tile)
    }

    /// Accumulated merge score
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Copy of the tile matrix
    pub fn board(&self) -> Array2<u32> {
        self.cells.clone()
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Rules this grid was created with
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Tile value at a position, or `None` when out of bounds
    pub fn tile(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get((row, col)).copied()
    }

    /// Empty positions in row-major order
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value == 0)
            .map(|(position, _)| position)
            .collect()
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    fn has_adjacent_pair(&self) -> bool {
        self.cells.indexed_iter().any(|(position, _)| {
            self.merges_toward(position, Direction::Right)
                || self.merges_toward(position, Direction::Down)
        })
    }

    /// Whether the tile at `position` can merge with its neighbour
    fn merges_toward(&self, position: Position, direction: Direction) -> bool {
        let Some(&value) = self.cells.get(position) else {
            return false;
        };
        self.neighbour(position, direction)
            .and_then(|other| merged_value(value, other))
            .is_some()
    }

    fn neighbour(&self, (row, col): Position, direction: Direction) -> Option<u32> {
        let (row, col) = match direction {
            Direction::Right => (Some(row), col.checked_add(1)),
            Direction::Down => (row.checked_add(1), Some(col)),
            Direction::Left => (Some(row), col.checked_sub(1)),
            Direction::Up => (row.checked_sub(1), Some(col)),
        };
        self.cells.get((row?, col?)).copied()
    }
}

impl<R> fmt::Display for Grid<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for value in row {
                write!(f, "{value}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Present the matrix so that `direction` slides every row toward column 0
fn oriented_view(view: ArrayViewMut2<'_, u32>, direction: Direction) -> ArrayViewMut2<'_, u32> {
    let mut view = if direction.is_vertical() {
        view.reversed_axes()
    } else {
        view
    };
    if direction.is_reversed() {
        view.invert_axis(Axis(1));
    }
    view
}

fn validate_size(size: usize) -> Result<()> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GameError::InvalidSize {
            size,
            minimum: MIN_GRID_SIZE,
            maximum: MAX_GRID_SIZE,
        })
    }
}
