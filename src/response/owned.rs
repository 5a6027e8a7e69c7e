//! Owned, row-major response storage.

use crate::response::ResponseView;
use crate::util::{CornerError, CornerResult};

/// Owned response matrix stored contiguously in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedResponse<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> OwnedResponse<T> {
    /// Wraps a row-major buffer of exactly `rows * cols` values.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> CornerResult<Self> {
        let needed = rows
            .checked_mul(cols)
            .ok_or(CornerError::InvalidDimensions { rows, cols })?;
        if data.len() < needed {
            return Err(CornerError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(CornerError::InvalidDimensions { rows, cols });
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from nested rows, all of which must share one length.
    ///
    /// An empty outer vector yields a `0x0` matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> CornerResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows.saturating_mul(n_cols));
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(CornerError::RaggedRows {
                    row: idx,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the row-major backing buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns a borrowed, contiguous view of the matrix.
    pub fn view(&self) -> ResponseView<'_, T> {
        ResponseView {
            data: &self.data,
            rows: self.rows,
            cols: self.cols,
            row_stride: self.cols,
            col_stride: 1,
        }
    }
}

impl<T: Copy> OwnedResponse<T> {
    /// Copies any view, strided or transposed, into contiguous storage.
    pub fn from_view(view: ResponseView<'_, T>) -> Self {
        let data = view.indexed_iter().map(|(_, value)| value).collect();
        Self {
            data,
            rows: view.rows(),
            cols: view.cols(),
        }
    }
}
