//! Single-line compaction and merge shared by all four move directions
//!
//! Lines are always read from the near end (the edge tiles slide toward), so
//! the grid only has to present each row or column in that orientation.

/// Outcome of sliding one line toward its near end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidLine {
    /// New line contents, same length as the input, packed toward index 0
    pub tiles: Vec<u32>,
    /// Sum of the values produced by merges
    pub score: u64,
    /// Number of merges performed
    pub merges: usize,
}

/// Value produced by merging `near` into `far`, if the pair can merge
///
/// Only equal, non-empty tiles merge, and never when doubling would overflow.
pub const fn merged_value(near: u32, far: u32) -> Option<u32> {
    if near == 0 || near != far {
        return None;
    }
    near.checked_mul(2)
}

/// Slide and merge a line toward index 0
///
/// Gaps are dropped, then adjacent equal pairs are merged scanning from the
/// near end. A merged tile never merges again within the same call, so
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
pub fn slide_line(line: &[u32]) -> SlidLine {
    let mut packed: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut score = 0_u64;
    let mut merges = 0;
    let mut index = 0;
    while index + 1 < packed.len() {
        let merged = packed
            .get(index)
            .copied()
            .zip(packed.get(index + 1).copied())
            .and_then(|(near, far)| merged_value(near, far));
        if let Some(merged) = merged {
            if let Some(slot) = packed.get_mut(index) {
                *slot = merged;
            }
            if let Some(slot) = packed.get_mut(index + 1) {
                *slot = 0;
            }
            score += u64::from(merged);
            merges += 1;
            // Skip the vacated slot so the merged tile is not reconsidered
            index += 2;
        } else {
            index += 1;
        }
    }

    let mut tiles: Vec<u32> = packed.into_iter().filter(|&v| v != 0).collect();
    tiles.resize(line.len(), 0);

    SlidLine {
        tiles,
        score,
        merges,
    }
}
