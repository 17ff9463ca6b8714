//! Greedy direction probe and the driver that plays whole games with it

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::engine::direction::Direction;
use crate::engine::grid::{Grid, Rules};
use crate::game::session::{Session, Status, Turn};
use crate::io::error::Result;
use crate::io::logger::GameLogger;

/// Priority-ordered move picker
///
/// Takes the direction of the first mergeable pair when there is one,
/// otherwise tries [`Direction::ALL`] in order until a move changes the board.
/// It never looks ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyProbe;

impl GreedyProbe {
    /// Choose and play one move
    ///
    /// Returns the direction that changed the board, or `None` if nothing moved.
    pub fn step<R: Rng>(session: &mut Session<R>) -> Option<(Direction, Turn)> {
        if let Some(direction) = session.grid().mergeable_direction() {
            debug!(%direction, "can merge");
            let turn = session.play(direction);
            if turn.moved {
                return Some((direction, turn));
            }
        }

        for direction in Direction::ALL {
            debug!(%direction, "cannot merge, probing");
            let turn = session.play(direction);
            if turn.moved {
                return Some((direction, turn));
            }
        }

        None
    }
}

/// Summary of one finished (or move-capped) game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// Seed of the spawn generator
    pub seed: u64,
    /// Final score
    pub score: u64,
    /// Moves that changed the board
    pub moves: usize,
    /// Largest tile on the final board
    pub max_tile: u32,
    /// Final status; `Playing` when the move cap was hit
    pub status: Status,
}

impl GameRecord {
    /// Capture the current state of a session
    pub fn from_session<R>(seed: u64, session: &Session<R>) -> Self {
        Self {
            seed,
            score: session.score(),
            moves: session.moves(),
            max_tile: session.grid().max_tile(),
            status: session.status(),
        }
    }
}

/// Plays games with [`GreedyProbe`] and reports through an injected logger
#[derive(Debug)]
pub struct Autoplayer<'a> {
    logger: &'a GameLogger,
    size: usize,
    rules: Rules,
    max_moves: usize,
}

impl<'a> Autoplayer<'a> {
    /// Create a driver for `size x size` games capped at `max_moves`
    pub const fn new(logger: &'a GameLogger, size: usize, rules: Rules, max_moves: usize) -> Self {
        Self {
            logger,
            size,
            rules,
            max_moves,
        }
    }

    /// Play one game whose spawns come from `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if the configured size or rules are invalid
    pub fn run(&self, seed: u64) -> Result<GameRecord> {
        self.run_with_progress(seed, |_, _| {})
    }

    /// Play one game, calling `on_move(moves, score)` after every move
    ///
    /// # Errors
    ///
    /// Returns an error if the configured size or rules are invalid
    pub fn run_with_progress(
        &self,
        seed: u64,
        on_move: impl FnMut(usize, u64),
    ) -> Result<GameRecord> {
        let grid = Grid::with_rng(self.size, self.rules, StdRng::seed_from_u64(seed))?;
        let mut session = Session::new(grid);
        self.drive(&mut session, on_move);
        Ok(GameRecord::from_session(seed, &session))
    }

    /// Play `session` until it ends, stalls, or reaches the move cap
    pub fn drive<R: Rng>(&self, session: &mut Session<R>, mut on_move: impl FnMut(usize, u64)) {
        self.logger.in_scope(|| {
            debug!("opening board\n{}", session.grid());

            while session.status() == Status::Playing && session.moves() < self.max_moves {
                let Some((direction, turn)) = GreedyProbe::step(session) else {
                    break;
                };
                debug!(
                    %direction,
                    gained = turn.gained,
                    spawned = ?turn.spawned,
                    score = session.score(),
                    "moved\n{}",
                    session.grid()
                );
                on_move(session.moves(), session.score());
            }

            info!(
                status = %session.status(),
                score = session.score(),
                moves = session.moves(),
                max_tile = session.grid().max_tile(),
                "game finished"
            );
        });
    }
}
