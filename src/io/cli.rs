//! Command-line interface for batch autoplay runs

use crate::analysis::statistics::RunStatistics;
use crate::engine::grid::Rules;
use crate::game::autoplay::Autoplayer;
use crate::io::configuration::{
    DEFAULT_GAMES, DEFAULT_GRID_SIZE, DEFAULT_MAX_MOVES, DEFAULT_SEED, DEFAULT_TOP_SCORES,
    DEFAULT_WINNING_TILE, SPAWN_FOUR_PROBABILITY,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::logger::GameLogger;
use crate::io::progress::ProgressTracker;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "tilemerge")]
#[command(
    author,
    version,
    about = "Play batches of sliding tile merge games with a greedy probe"
)]
/// Command-line arguments for the batch runner
pub struct Cli {
    /// Side length of the square grid
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Number of games to play
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    pub games: usize,

    /// Seed of the first game; game i uses seed + i
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Tile value that wins a game
    #[arg(short, long, default_value_t = DEFAULT_WINNING_TILE)]
    pub winning_tile: u32,

    /// Move cap per game; capped games count as unfinished
    #[arg(short, long, default_value_t = DEFAULT_MAX_MOVES)]
    pub max_moves: usize,

    /// Number of ranked scores in the summary
    #[arg(short, long, default_value_t = DEFAULT_TOP_SCORES)]
    pub top: usize,

    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(short, long, default_value_t = Level::WARN)]
    pub log_level: Level,

    /// Write logs to this file instead of standard error
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Rules described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the winning tile is not a valid power of two
    pub fn rules(&self) -> Result<Rules> {
        Rules::new(self.winning_tile, SPAWN_FOUR_PROBABILITY)
    }

    /// Build the logger requested by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created
    pub fn logger(&self) -> Result<GameLogger> {
        match &self.log_file {
            Some(path) => GameLogger::to_file(path, self.log_level),
            None => Ok(GameLogger::stderr(self.log_level)),
        }
    }
}

/// Plays every game of a batch and collects the results
pub struct BatchRunner {
    cli: Cli,
    rules: Rules,
    logger: GameLogger,
}

impl BatchRunner {
    /// Validate the arguments and prepare the logger
    ///
    /// # Errors
    ///
    /// Returns an error if the rules, game count, or log file are invalid
    pub fn new(cli: Cli) -> Result<Self> {
        let rules = cli.rules()?;
        if cli.games == 0 {
            return Err(invalid_parameter(
                "games",
                &cli.games,
                &"at least one game is required",
            ));
        }
        let logger = cli.logger()?;
        Ok(Self { cli, rules, logger })
    }

    /// Replace the logger, e.g. with [`GameLogger::disabled`]
    #[must_use]
    pub fn with_logger(mut self, logger: GameLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Play all games and return their statistics
    ///
    /// # Errors
    ///
    /// Returns an error if a game cannot be set up
    pub fn run(&self) -> Result<RunStatistics> {
        let mut progress = if self.cli.should_show_progress() {
            ProgressTracker::new(self.cli.games)
        } else {
            ProgressTracker::hidden(self.cli.games)
        };

        let player = Autoplayer::new(&self.logger, self.cli.size, self.rules, self.cli.max_moves);
        let mut statistics = RunStatistics::new();

        for game in 0..self.cli.games {
            let seed = self.cli.seed.wrapping_add(game as u64);
            let record = player.run_with_progress(seed, |moves, score| {
                progress.update_game(game, moves, score);
            })?;
            progress.complete_game(record.score);
            statistics.record(record);
        }

        progress.finish();
        Ok(statistics)
    }

    /// Write a plain-text summary of `statistics`
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails
    pub fn write_summary(&self, statistics: &RunStatistics, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "{size}x{size} grid, winning tile {}",
            self.rules.winning_tile,
            size = self.cli.size
        )?;
        writeln!(
            out,
            "games: {}  won: {}  lost: {}  unfinished: {}",
            statistics.games(),
            statistics.wins(),
            statistics.losses(),
            statistics.unfinished()
        )?;
        writeln!(
            out,
            "best score: {}  mean score: {:.1}  win rate: {:.1}%",
            statistics.best_score().unwrap_or(0),
            statistics.mean_score(),
            statistics.win_rate() * 100.0
        )?;
        writeln!(out, "total moves: {}", statistics.total_moves())?;

        writeln!(out, "top scores:")?;
        for (rank, record) in statistics.top_scores(self.cli.top).iter().enumerate() {
            writeln!(
                out,
                "{:<4}{:<10} seed {:<8} moves {:<7} max tile {} ({})",
                format!("{}.", rank + 1),
                record.score,
                record.seed,
                record.moves,
                record.max_tile,
                record.status
            )?;
        }

        writeln!(out, "max tiles:")?;
        for (tile, count) in statistics.max_tile_histogram() {
            writeln!(out, "{tile:>8}: {count}")?;
        }
        Ok(())
    }
}
