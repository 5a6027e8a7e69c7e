//! Top-K selection of scored cells.

use std::cmp::Ordering;

use crate::response::Coordinate;

/// A response cell that passed the threshold, with its score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredCorner<T> {
    /// Cell index in the response matrix.
    pub coord: Coordinate,
    /// Response value at `coord`.
    pub score: T,
}

/// Descending score order. Scores that do not compare (NaN) are treated as
/// equal; they never reach selection because `NaN > threshold` is false.
fn score_cmp_desc<T: PartialOrd>(a: &ScoredCorner<T>, b: &ScoredCorner<T>) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Keeps the `k` best candidates (all of them for `None`) ordered by
/// descending score.
///
/// For `k` below the candidate count a quickselect partition isolates the top
/// `k` in O(n) average time and only that prefix is sorted. Equal scores end
/// up in an unspecified but deterministic order.
pub(crate) fn select_top_k_desc<T: PartialOrd>(
    items: &mut Vec<ScoredCorner<T>>,
    k: Option<usize>,
) {
    if let Some(k) = k {
        if k == 0 {
            items.clear();
            return;
        }
        if k < items.len() {
            items.select_nth_unstable_by(k - 1, score_cmp_desc);
            items.truncate(k);
        }
    }
    items.sort_unstable_by(score_cmp_desc);
}
