//! Tests for the greedy probe and whole-game driver

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};
    use std::fs;
    use tempfile::TempDir;
    use tilemerge::engine::direction::Direction;
    use tilemerge::engine::grid::{Grid, Rules};
    use tilemerge::game::autoplay::{Autoplayer, GameRecord, GreedyProbe};
    use tilemerge::game::session::{Session, Status};
    use tilemerge::io::logger::GameLogger;
    use tracing::Level;

    fn twos_only() -> Rules {
        Rules::new(2048, 0.0).unwrap()
    }

    // Tests the probe takes the direction of the first mergeable pair
    // Verified by skipping the merge check and probing directly
    #[test]
    fn test_step_prefers_mergeable_direction() {
        let grid = Grid::from_cells(
            array![[2, 2, 4], [8, 16, 32], [64, 128, 256]],
            twos_only(),
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        let mut session = Session::new(grid);

        let (direction, turn) = GreedyProbe::step(&mut session).unwrap();
        assert_eq!(direction, Direction::Right);
        assert_eq!(turn.gained, 4);
        assert_eq!(turn.spawned, Some((0, 0)));
        assert_eq!(session.grid().tile(0, 1), Some(4));
        assert_eq!(session.grid().tile(0, 2), Some(4));
    }

    // Tests the probe falls back to the first direction that moves
    // Verified by changing the probe order
    #[test]
    fn test_step_probes_when_nothing_merges() {
        let grid = Grid::from_cells(
            array![[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [4, 8, 16, 32]],
            twos_only(),
            StdRng::seed_from_u64(21),
        )
        .unwrap();
        let mut session = Session::new(grid);
        assert_eq!(session.grid().mergeable_direction(), None);

        let (direction, turn) = GreedyProbe::step(&mut session).unwrap();
        assert_eq!(direction, Direction::Up);
        assert!(turn.moved);
        assert_eq!(turn.gained, 0);
        assert_eq!(session.grid().tile(0, 0), Some(4));
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn test_step_on_finished_game_returns_none() {
        let grid = Grid::from_cells(
            array![[2, 4], [8, 0]],
            twos_only(),
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        let mut session = Session::new(grid);
        assert_eq!(session.status(), Status::Lost);
        assert!(GreedyProbe::step(&mut session).is_none());
    }

    // Tests a full game always reaches a terminal status below the move cap
    #[test]
    fn test_run_reaches_terminal_status() {
        let logger = GameLogger::disabled();
        let player = Autoplayer::new(&logger, 4, Rules::default(), 100_000);

        for seed in 0..3 {
            let record = player.run(seed).unwrap();
            assert!(record.status.is_terminal());
            assert_eq!(record.seed, seed);
            assert!(record.moves > 0);
            assert!(record.max_tile >= 4);
            if record.status == Status::Won {
                assert!(record.max_tile >= 2048);
            }
        }
    }

    // Tests identical seeds replay identical games
    // Verified by seeding from the operating system instead
    #[test]
    fn test_run_is_deterministic_per_seed() {
        let logger = GameLogger::disabled();
        let player = Autoplayer::new(&logger, 4, Rules::default(), 100_000);

        let first = player.run(77).unwrap();
        let second = player.run(77).unwrap();
        assert_eq!(first, second);
    }

    // Tests a small winning tile is reached quickly on a roomy board
    #[test]
    fn test_small_winning_tile_wins() {
        let logger = GameLogger::disabled();
        let rules = Rules::new(16, 0.1).unwrap();
        let player = Autoplayer::new(&logger, 6, rules, 100_000);

        let record = player.run(5).unwrap();
        assert_eq!(record.status, Status::Won);
        assert_eq!(record.max_tile, 16);
    }

    // Tests the move cap stops a game that is still in play
    #[test]
    fn test_move_cap_leaves_game_unfinished() {
        let logger = GameLogger::disabled();
        let player = Autoplayer::new(&logger, 4, Rules::default(), 3);

        let record = player.run(1).unwrap();
        assert_eq!(record.moves, 3);
        assert_eq!(record.status, Status::Playing);
    }

    #[test]
    fn test_progress_callback_sees_every_move() {
        let logger = GameLogger::disabled();
        let player = Autoplayer::new(&logger, 4, Rules::default(), 50);

        let mut seen = Vec::new();
        let record = player
            .run_with_progress(9, |moves, score| seen.push((moves, score)))
            .unwrap();

        assert_eq!(seen.len(), record.moves);
        assert_eq!(seen.last().map(|&(_, score)| score), Some(record.score));
        assert!(seen.windows(2).all(|pair| pair[0].0 + 1 == pair[1].0));
    }

    #[test]
    fn test_invalid_size_is_reported() {
        let logger = GameLogger::disabled();
        let player = Autoplayer::new(&logger, 1, Rules::default(), 10);
        assert!(player.run(0).is_err());
    }

    #[test]
    fn test_record_from_session() {
        let grid = Grid::restore(array![[1024, 1024], [2, 4]], 9).unwrap();
        let mut session = Session::new(grid);
        session.play(Direction::Left);

        let record = GameRecord::from_session(9, &session);
        assert_eq!(
            record,
            GameRecord {
                seed: 9,
                score: 2048,
                moves: 1,
                max_tile: 2048,
                status: Status::Won,
            }
        );
    }

    // Tests game summaries reach an injected file logger
    #[test]
    fn test_file_logger_receives_summary() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("games.log");
        let logger = GameLogger::to_file(&path, Level::INFO).unwrap();
        let player = Autoplayer::new(&logger, 4, Rules::default(), 20);

        player.run(3).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("game finished"));
        assert!(contents.contains("max_tile="));
        assert!(!contents.contains("cannot merge"));
    }
}
