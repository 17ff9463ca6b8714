//! Aggregate results over a batch of finished games
//!
//! Everything stays in memory; callers that want a durable high-score list
//! take [`RunStatistics::top_scores`] and store it in their own format.

use std::collections::BTreeMap;

use crate::game::autoplay::GameRecord;
use crate::game::session::Status;

/// Running totals for a batch of games
#[derive(Debug, Clone, Default)]
pub struct RunStatistics {
    records: Vec<GameRecord>,
    wins: usize,
    losses: usize,
    total_score: u64,
    total_moves: usize,
    max_tiles: BTreeMap<u32, usize>,
}

impl RunStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished game
    pub fn record(&mut self, record: GameRecord) {
        match record.status {
            Status::Won => self.wins += 1,
            Status::Lost => self.losses += 1,
            Status::Playing => {}
        }
        self.total_score += record.score;
        self.total_moves += record.moves;
        *self.max_tiles.entry(record.max_tile).or_insert(0) += 1;
        self.records.push(record);
    }

    /// Number of games recorded
    pub const fn games(&self) -> usize {
        self.records.len()
    }

    /// Games that reached the winning tile
    pub const fn wins(&self) -> usize {
        self.wins
    }

    /// Games that ended stuck
    pub const fn losses(&self) -> usize {
        self.losses
    }

    /// Games stopped by the move cap
    pub const fn unfinished(&self) -> usize {
        self.games() - self.wins - self.losses
    }

    /// Fraction of games won (0 for an empty batch)
    pub fn win_rate(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.wins as f64 / self.records.len() as f64
    }

    /// Highest score, if any game was recorded
    pub fn best_score(&self) -> Option<u64> {
        self.records.iter().map(|r| r.score).max()
    }

    /// Mean score (0 for an empty batch)
    pub fn mean_score(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.total_score as f64 / self.records.len() as f64
    }

    /// Moves summed over every game
    pub const fn total_moves(&self) -> usize {
        self.total_moves
    }

    /// How many games finished with each largest tile, by ascending tile
    pub const fn max_tile_histogram(&self) -> &BTreeMap<u32, usize> {
        &self.max_tiles
    }

    /// Up to `count` records ranked by descending score
    ///
    /// Equal scores keep the order in which the games were recorded.
    pub fn top_scores(&self, count: usize) -> Vec<GameRecord> {
        let mut ranked = self.records.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(count);
        ranked
    }

    /// All records in the order they were added
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }
}
