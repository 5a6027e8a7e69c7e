//! Response matrices and grid coordinates.
//!
//! `ResponseView` is a borrowed 2D view into a 1D buffer with explicit row and
//! column strides, both counted in elements. Cell `(row, col)` lives at
//! `row * row_stride + col * col_stride`. A row-major buffer has
//! `col_stride == 1`; a transposed view swaps the strides and is no longer
//! contiguous along its last axis, which extraction requires.

use num_traits::Zero;

use crate::util::{CornerError, CornerResult};

mod owned;

pub use owned::OwnedResponse;

/// Element types a response matrix can hold.
///
/// Any copyable, partially ordered number with a zero qualifies: all primitive
/// integers and floats.
pub trait ResponseValue: Copy + PartialOrd + Zero + Send + Sync {}

impl<T: Copy + PartialOrd + Zero + Send + Sync> ResponseValue for T {}

/// A `(row, col)` cell index into a response matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row index (y).
    pub row: usize,
    /// Column index (x).
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate from a row and a column index.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

/// Borrowed 2D response view with explicit strides.
#[derive(Copy, Clone, Debug)]
pub struct ResponseView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    row_stride: usize,
    col_stride: usize,
}

impl<'a, T> ResponseView<'a, T> {
    /// Creates a row-major view with `row_stride == cols`.
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize) -> CornerResult<Self> {
        Self::new(data, rows, cols, cols)
    }

    /// Creates a row-major view whose rows may be padded.
    pub fn new(data: &'a [T], rows: usize, cols: usize, row_stride: usize) -> CornerResult<Self> {
        if rows > 1 && row_stride < cols {
            return Err(CornerError::InvalidStride {
                cols,
                row_stride,
                col_stride: 1,
            });
        }
        Self::with_strides(data, rows, cols, row_stride, 1)
    }

    /// Creates a view with arbitrary row and column strides.
    ///
    /// Strides must keep distinct cells on distinct elements: a zero stride
    /// on an axis longer than one cell is rejected, and so are interleaved
    /// strides where one axis does not step over the full span of the other.
    /// Empty shapes are accepted with any backing slice.
    pub fn with_strides(
        data: &'a [T],
        rows: usize,
        cols: usize,
        row_stride: usize,
        col_stride: usize,
    ) -> CornerResult<Self> {
        let view = Self {
            data,
            rows,
            cols,
            row_stride,
            col_stride,
        };
        if view.is_empty() {
            return Ok(view);
        }
        if (rows > 1 && row_stride == 0) || (cols > 1 && col_stride == 0) {
            return Err(CornerError::InvalidStride {
                cols,
                row_stride,
                col_stride,
            });
        }
        if rows > 1 && cols > 1 && !strides_disjoint(rows, cols, row_stride, col_stride) {
            return Err(CornerError::InvalidStride {
                cols,
                row_stride,
                col_stride,
            });
        }
        let needed = required_len(rows, cols, row_stride, col_stride)?;
        if data.len() < needed {
            return Err(CornerError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(view)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Elements between the starts of consecutive rows.
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Elements between consecutive cells of a row.
    pub fn col_stride(&self) -> usize {
        self.col_stride
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the view has no cells (zero rows or zero columns).
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether consecutive cells of a row are adjacent in memory.
    pub fn is_contiguous(&self) -> bool {
        self.is_empty() || self.cols == 1 || self.col_stride == 1
    }

    /// Returns the backing slice, including any padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the cell at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let idx = row
            .checked_mul(self.row_stride)?
            .checked_add(col.checked_mul(self.col_stride)?)?;
        self.data.get(idx)
    }

    /// Returns row `row` as a slice of length `cols`.
    ///
    /// `None` when out of bounds or when the view is not contiguous along its
    /// last axis.
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        if row >= self.rows || !self.is_contiguous() {
            return None;
        }
        let start = row.checked_mul(self.row_stride)?;
        let end = start.checked_add(self.cols)?;
        self.data.get(start..end)
    }

    /// Zero-copy transpose.
    pub fn transposed(&self) -> ResponseView<'a, T> {
        ResponseView {
            data: self.data,
            rows: self.cols,
            cols: self.rows,
            row_stride: self.col_stride,
            col_stride: self.row_stride,
        }
    }
}

impl<'a, T: Copy> ResponseView<'a, T> {
    /// Row-major traversal pairing each cell's coordinate with its value.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Coordinate, T)> + 'a {
        let view = *self;
        (0..view.rows).flat_map(move |row| {
            let base = row * view.row_stride;
            (0..view.cols).map(move |col| {
                let value = view.data[base + col * view.col_stride];
                (Coordinate::new(row, col), value)
            })
        })
    }
}

/// One axis must step past every element the other axis touches.
fn strides_disjoint(rows: usize, cols: usize, row_stride: usize, col_stride: usize) -> bool {
    let row_span = (cols - 1)
        .checked_mul(col_stride)
        .and_then(|v| v.checked_add(1));
    let col_span = (rows - 1)
        .checked_mul(row_stride)
        .and_then(|v| v.checked_add(1));
    row_span.is_some_and(|span| row_stride >= span)
        || col_span.is_some_and(|span| col_stride >= span)
}

fn required_len(
    rows: usize,
    cols: usize,
    row_stride: usize,
    col_stride: usize,
) -> CornerResult<usize> {
    let overflow = CornerError::InvalidDimensions { rows, cols };
    let last_row = (rows - 1).checked_mul(row_stride).ok_or(overflow.clone())?;
    let last_col = (cols - 1).checked_mul(col_stride).ok_or(overflow.clone())?;
    last_row
        .checked_add(last_col)
        .and_then(|v| v.checked_add(1))
        .ok_or(overflow)
}
