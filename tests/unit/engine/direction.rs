//! Tests for move directions and probe order

#[cfg(test)]
mod tests {
    use tilemerge::engine::direction::Direction;

    // Tests probe order is up, down, left, right
    // Verified by reordering the constant
    #[test]
    fn test_probe_order() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }

    // Tests the axis flags that orient each move
    // Verified by treating LEFT as reversed
    #[test]
    fn test_reversed_directions() {
        assert!(Direction::Right.is_reversed());
        assert!(Direction::Down.is_reversed());
        assert!(!Direction::Left.is_reversed());
        assert!(!Direction::Up.is_reversed());
    }

    #[test]
    fn test_vertical_directions() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
        assert!(!Direction::Right.is_vertical());
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = Direction::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["UP", "DOWN", "LEFT", "RIGHT"]);
    }
}
