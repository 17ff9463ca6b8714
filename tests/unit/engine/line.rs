//! Tests for single-line compaction and merging

#[cfg(test)]
mod tests {
    use tilemerge::engine::line::{merged_value, slide_line};

    // Tests a pair merges once and scores its result
    // Verified by adding the source value instead of the merged value
    #[test]
    fn test_pair_merges_and_scores() {
        let slid = slide_line(&[2, 2, 0, 0]);
        assert_eq!(slid.tiles, vec![4, 0, 0, 0]);
        assert_eq!(slid.score, 4);
        assert_eq!(slid.merges, 1);
    }

    // Tests four equal tiles produce two merges, not a cascade
    // Verified by advancing the scan one slot after a merge
    #[test]
    fn test_four_equal_tiles_merge_pairwise() {
        let slid = slide_line(&[2, 2, 2, 2]);
        assert_eq!(slid.tiles, vec![4, 4, 0, 0]);
        assert_eq!(slid.score, 8);
        assert_eq!(slid.merges, 2);
    }

    // Tests the near pair of three equal tiles merges first
    #[test]
    fn test_three_equal_tiles_merge_near_pair() {
        let slid = slide_line(&[2, 2, 2]);
        assert_eq!(slid.tiles, vec![4, 2, 0]);
        assert_eq!(slid.score, 4);
    }

    // Tests a merge result does not merge with an existing equal tile
    // Verified by re-scanning the merged slot
    #[test]
    fn test_merged_tile_does_not_merge_again() {
        let slid = slide_line(&[2, 2, 4, 0]);
        assert_eq!(slid.tiles, vec![4, 4, 0, 0]);
        assert_eq!(slid.merges, 1);
    }

    // Tests gaps are discarded before merging
    #[test]
    fn test_gaps_removed_before_merge() {
        let slid = slide_line(&[8, 0, 8, 8]);
        assert_eq!(slid.tiles, vec![16, 8, 0, 0]);
        assert_eq!(slid.score, 16);

        let slid = slide_line(&[2, 0, 0, 4]);
        assert_eq!(slid.tiles, vec![2, 4, 0, 0]);
        assert_eq!(slid.score, 0);
        assert_eq!(slid.merges, 0);
    }

    #[test]
    fn test_two_different_pairs() {
        let slid = slide_line(&[4, 4, 8, 8]);
        assert_eq!(slid.tiles, vec![8, 16, 0, 0]);
        assert_eq!(slid.score, 24);
    }

    #[test]
    fn test_empty_and_packed_lines_unchanged() {
        assert_eq!(slide_line(&[0, 0, 0, 0]).tiles, vec![0, 0, 0, 0]);
        assert_eq!(slide_line(&[2, 4, 8, 16]).tiles, vec![2, 4, 8, 16]);
        assert!(slide_line(&[]).tiles.is_empty());
    }

    // Tests pairs whose doubled value would overflow stay apart
    // Verified by saturating the merged value instead
    #[test]
    fn test_overflowing_pair_does_not_merge() {
        let top = 1_u32 << 31;
        let slid = slide_line(&[top, top, 0, 0]);
        assert_eq!(slid.tiles, vec![top, top, 0, 0]);
        assert_eq!(slid.score, 0);
        assert_eq!(slid.merges, 0);

        let slid = slide_line(&[0, top, 0, top]);
        assert_eq!(slid.tiles, vec![top, top, 0, 0]);
        assert_eq!(slid.merges, 0);
    }

    #[test]
    fn test_merged_value() {
        assert_eq!(merged_value(8, 8), Some(16));
        assert_eq!(merged_value(8, 4), None);
        assert_eq!(merged_value(0, 0), None);
        assert_eq!(merged_value(1 << 30, 1 << 30), Some(1 << 31));
        assert_eq!(merged_value(1 << 31, 1 << 31), None);
    }
}
