//! Row-parallel candidate collection (feature-gated).
//!
//! Each row is filtered independently and the per-row results are
//! concatenated in row order, so the candidate vector matches the sequential
//! traversal exactly and selection behaves identically.

use crate::response::{Coordinate, ResponseValue, ResponseView};
use crate::select::ScoredCorner;
use rayon::prelude::*;

pub(crate) fn collect_candidates_par<T: ResponseValue>(
    view: ResponseView<'_, T>,
    threshold: T,
) -> Vec<ScoredCorner<T>> {
    let row_results: Vec<Vec<ScoredCorner<T>>> = (0..view.rows())
        .into_par_iter()
        .map(|row| {
            let values = view.row(row).unwrap_or(&[]);
            values
                .iter()
                .enumerate()
                .filter(|&(_, &score)| score > threshold)
                .map(|(col, &score)| ScoredCorner {
                    coord: Coordinate::new(row, col),
                    score,
                })
                .collect()
        })
        .collect();

    row_results.into_iter().flatten().collect()
}
