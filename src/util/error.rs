//! Error types for cornerpick.

use thiserror::Error;

/// Result alias for cornerpick operations.
pub type CornerResult<T> = std::result::Result<T, CornerError>;

/// Errors reported while building response views or extracting corners.
///
/// Empty matrices and "nothing above threshold" are not errors; they are
/// ordinary extraction results.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CornerError {
    /// Shape arithmetic overflowed `usize`.
    #[error("invalid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// Strides would make distinct cells alias the same element.
    #[error("invalid stride for {cols} columns: row stride {row_stride}, column stride {col_stride}")]
    InvalidStride {
        cols: usize,
        row_stride: usize,
        col_stride: usize,
    },
    /// The backing slice is shorter than the view requires.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A nested-row input does not have one consistent row length.
    #[error("ragged rows: row {row} has {got} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// The innermost axis is not contiguous in memory.
    #[error("response matrix is not contiguous along its last axis (column stride {col_stride})")]
    NonContiguous { col_stride: usize },
}
