//! Corner extraction from response matrices.
//!
//! Extraction walks the matrix once, keeps every cell whose response is
//! strictly above the threshold, and returns the best `count` of them ordered
//! by descending response. An empty matrix yields `None`; a matrix with no
//! qualifying cell yields `Some` of an empty vector.
//!
//! The matrix must be contiguous along its last axis. The plain entry points
//! treat a violation as a caller bug and panic; the `try_` variants report it
//! as [`CornerError::NonContiguous`].

#[cfg(feature = "rayon")]
mod par;

use crate::response::{Coordinate, ResponseValue, ResponseView};
use crate::select::{select_top_k_desc, ScoredCorner};
use crate::trace::{trace_event, trace_span};
use crate::util::{CornerError, CornerResult};

/// Extraction parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtractConfig<T> {
    /// Maximum number of corners to return; `None` returns every qualifying
    /// cell.
    pub count: Option<usize>,
    /// Cells must score strictly above this value.
    pub threshold: T,
    /// Collect candidates row-parallel. Only honored with the `rayon`
    /// feature; otherwise extraction runs sequentially.
    pub parallel: bool,
}

impl<T: ResponseValue> Default for ExtractConfig<T> {
    fn default() -> Self {
        Self {
            count: None,
            threshold: T::zero(),
            parallel: false,
        }
    }
}

impl<T: ResponseValue> ExtractConfig<T> {
    /// Returns coordinates of the selected corners.
    ///
    /// # Panics
    ///
    /// Panics if `view` is not contiguous along its last axis.
    pub fn extract(&self, view: ResponseView<'_, T>) -> Option<Vec<Coordinate>> {
        self.extract_scored(view).map(into_coordinates)
    }

    /// Returns the selected corners together with their scores.
    ///
    /// # Panics
    ///
    /// Panics if `view` is not contiguous along its last axis.
    pub fn extract_scored(&self, view: ResponseView<'_, T>) -> Option<Vec<ScoredCorner<T>>> {
        assert!(
            view.is_contiguous(),
            "response matrix must be contiguous along its last axis (column stride {})",
            view.col_stride()
        );
        self.run(view)
    }

    /// Like [`ExtractConfig::extract`], reporting a non-contiguous view as an
    /// error.
    pub fn try_extract(
        &self,
        view: ResponseView<'_, T>,
    ) -> CornerResult<Option<Vec<Coordinate>>> {
        Ok(self.try_extract_scored(view)?.map(into_coordinates))
    }

    /// Like [`ExtractConfig::extract_scored`], reporting a non-contiguous view
    /// as an error.
    pub fn try_extract_scored(
        &self,
        view: ResponseView<'_, T>,
    ) -> CornerResult<Option<Vec<ScoredCorner<T>>>> {
        if !view.is_contiguous() {
            return Err(CornerError::NonContiguous {
                col_stride: view.col_stride(),
            });
        }
        Ok(self.run(view))
    }

    fn run(&self, view: ResponseView<'_, T>) -> Option<Vec<ScoredCorner<T>>> {
        let _span =
            trace_span!("extract_corners", rows = view.rows(), cols = view.cols()).entered();
        if view.is_empty() {
            return None;
        }
        if self.count == Some(0) {
            return Some(Vec::new());
        }

        let mut candidates = self.collect_candidates(view);
        trace_event!("candidates", count = candidates.len());

        select_top_k_desc(&mut candidates, self.count);
        trace_event!("selected", count = candidates.len());
        Some(candidates)
    }

    #[cfg(feature = "rayon")]
    fn collect_candidates(&self, view: ResponseView<'_, T>) -> Vec<ScoredCorner<T>> {
        if self.parallel {
            par::collect_candidates_par(view, self.threshold)
        } else {
            collect_candidates(view, self.threshold)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn collect_candidates(&self, view: ResponseView<'_, T>) -> Vec<ScoredCorner<T>> {
        collect_candidates(view, self.threshold)
    }
}

/// Extracts up to `count` corners scoring above `threshold`, best first.
///
/// `count == None` means unbounded. Returns `None` for an empty matrix.
///
/// # Panics
///
/// Panics if `view` is not contiguous along its last axis.
pub fn extract_corners<T: ResponseValue>(
    view: ResponseView<'_, T>,
    count: Option<usize>,
    threshold: T,
) -> Option<Vec<Coordinate>> {
    config(count, threshold).extract(view)
}

/// Fallible form of [`extract_corners`].
pub fn try_extract_corners<T: ResponseValue>(
    view: ResponseView<'_, T>,
    count: Option<usize>,
    threshold: T,
) -> CornerResult<Option<Vec<Coordinate>>> {
    config(count, threshold).try_extract(view)
}

/// Same selection as [`extract_corners`], keeping each corner's score.
///
/// # Panics
///
/// Panics if `view` is not contiguous along its last axis.
pub fn extract_scored<T: ResponseValue>(
    view: ResponseView<'_, T>,
    count: Option<usize>,
    threshold: T,
) -> Option<Vec<ScoredCorner<T>>> {
    config(count, threshold).extract_scored(view)
}

/// Maps a signed count onto the `Option` form: negative means unbounded.
pub fn count_from_signed(count: i64) -> Option<usize> {
    if count < 0 {
        None
    } else {
        Some(usize::try_from(count).unwrap_or(usize::MAX))
    }
}

fn config<T: ResponseValue>(count: Option<usize>, threshold: T) -> ExtractConfig<T> {
    ExtractConfig {
        count,
        threshold,
        parallel: false,
    }
}

fn collect_candidates<T: ResponseValue>(
    view: ResponseView<'_, T>,
    threshold: T,
) -> Vec<ScoredCorner<T>> {
    view.indexed_iter()
        .filter(|&(_, score)| score > threshold)
        .map(|(coord, score)| ScoredCorner { coord, score })
        .collect()
}

fn into_coordinates<T>(corners: Vec<ScoredCorner<T>>) -> Vec<Coordinate> {
    corners.into_iter().map(|corner| corner.coord).collect()
}
