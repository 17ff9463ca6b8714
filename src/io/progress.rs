//! Batch progress display with a live move counter for the running game

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MOVE_STRIDE};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Games: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many games of a batch are done and how the current one is going
pub struct ProgressTracker {
    bar: ProgressBar,
    best_score: u64,
}

impl ProgressTracker {
    /// Create a visible tracker for `games` games
    pub fn new(games: usize) -> Self {
        let bar = ProgressBar::new(games as u64);
        bar.set_style(GAME_STYLE.clone());
        Self { bar, best_score: 0 }
    }

    /// Create a tracker that draws nothing
    pub fn hidden(games: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(games as u64);
        Self { bar, best_score: 0 }
    }

    /// Report the running game's move count and score
    ///
    /// Redraws are throttled to every few moves to keep long games cheap.
    pub fn update_game(&self, game: usize, moves: usize, score: u64) {
        if moves % PROGRESS_MOVE_STRIDE == 0 {
            self.bar
                .set_message(format!("game {} move {moves} score {score}", game + 1));
        }
    }

    /// Mark a game as finished
    pub fn complete_game(&mut self, score: u64) {
        self.best_score = self.best_score.max(score);
        self.bar.inc(1);
        self.bar.set_message(format!("best {}", self.best_score));
    }

    /// Number of games marked finished
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Best score seen so far
    pub const fn best_score(&self) -> u64 {
        self.best_score
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
