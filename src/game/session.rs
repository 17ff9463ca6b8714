//! Playing/Won/Lost state machine composed from grid queries

use std::fmt;

use rand::Rng;

use crate::engine::direction::Direction;
use crate::engine::grid::{Grid, Position};

/// Game status; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Moves are still accepted
    Playing,
    /// A tile reached the winning value
    Won,
    /// The board is full and no adjacent tiles match
    Lost,
}

impl Status {
    /// Whether the game has ended
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// What a single move-and-spawn cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Whether the move changed the board
    pub moved: bool,
    /// Where the follow-up tile landed, if one was spawned
    pub spawned: Option<Position>,
    /// Score gained by merges during the move
    pub gained: u64,
    /// Status after the cycle
    pub status: Status,
}

/// One game: a grid plus the caller-side state machine around it
#[derive(Debug, Clone)]
pub struct Session<R> {
    grid: Grid<R>,
    status: Status,
    moves: usize,
}

impl<R: Rng> Session<R> {
    /// Start a game on `grid`, placing the opening tile
    pub fn new(mut grid: Grid<R>) -> Self {
        grid.spawn();
        let status = evaluate(&grid);
        Self {
            grid,
            status,
            moves: 0,
        }
    }

    /// Run one cycle: move, spawn if the board changed, then re-evaluate
    ///
    /// A finished game ignores the request and reports its terminal status.
    pub fn play(&mut self, direction: Direction) -> Turn {
        if self.status.is_terminal() {
            return Turn {
                moved: false,
                spawned: None,
                gained: 0,
                status: self.status,
            };
        }

        let before = self.grid.score();
        let moved = self.grid.shift(direction);
        let spawned = if moved {
            self.moves += 1;
            self.grid.spawn()
        } else {
            None
        };
        self.status = evaluate(&self.grid);

        Turn {
            moved,
            spawned,
            gained: self.grid.score() - before,
            status: self.status,
        }
    }
}

impl<R> Session<R> {
    /// Current status
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Read access to the grid
    pub const fn grid(&self) -> &Grid<R> {
        &self.grid
    }

    /// Number of moves that changed the board
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Current score
    pub const fn score(&self) -> u64 {
        self.grid.score()
    }

    /// Consume the session and return its grid
    pub fn into_grid(self) -> Grid<R> {
        self.grid
    }
}

/// Win is checked before loss so a winning move that fills the board still wins
fn evaluate<R>(grid: &Grid<R>) -> Status {
    if grid.has_won() {
        Status::Won
    } else if grid.can_move() {
        Status::Playing
    } else {
        Status::Lost
    }
}
