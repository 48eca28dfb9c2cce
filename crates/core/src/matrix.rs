use std::ops::{Index, Mul};

use ndarray::{Array2, Zip, s};
use thiserror::Error;

use crate::Scalar;

/// Errors raised when matrix shapes are incompatible.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Inner dimensions of a product do not agree.
    #[error("cannot multiply {lhs:?} by {rhs:?}")]
    Product {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Rows passed to a constructor have different lengths.
    #[error("row {row} has {found} entries, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A dense, mutable, row-major matrix of scalars.
///
/// [`Clone`] is a deep copy: the clone shares no storage with the original.
///
/// # Row swaps
///
/// [`Matrix::swap_rows`] mutates the matrix in place. Factorizations rely on
/// this to keep a permutation matrix and a partially built factor in step with
/// the working copy they pivot, so a swap is always visible through the
/// instance it was applied to and never reallocates.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<S> {
    data: Array2<S>,
}

impl<S: Scalar> Matrix<S> {
    /// Creates a `rows × cols` matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Creates the `n × n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            data: Array2::eye(n),
        }
    }

    /// Creates a matrix from fixed-width rows.
    #[must_use]
    pub fn from_rows<const N: usize>(rows: &[[S; N]]) -> Self {
        Self {
            data: Array2::from_shape_fn((rows.len(), N), |(r, c)| rows[r][c]),
        }
    }

    /// Creates a matrix from rows that must all have the same length.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Ragged`] if a row's length differs from the first row.
    pub fn from_vec_rows(rows: Vec<Vec<S>>) -> Result<Self, ShapeError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(ShapeError::Ragged {
                row,
                expected: cols,
                found,
            });
        }

        Ok(Self {
            data: Array2::from_shape_fn((rows.len(), cols), |(r, c)| rows[r][c]),
        })
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Returns true if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        let (rows, cols) = self.dim();
        rows == cols
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> S {
        self.data[[row, col]]
    }

    /// Sets the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: S) {
        self.data[[row, col]] = value;
    }

    /// Swaps two rows in place. Swapping a row with itself is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if either row is out of bounds.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (row_a, row_b) = self.data.multi_slice_mut((s![a, ..], s![b, ..]));
        Zip::from(row_a)
            .and(row_b)
            .for_each(|x, y| std::mem::swap(x, y));
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            data: self.data.t().to_owned(),
        }
    }

    /// Returns the conjugate transpose; equal to [`Matrix::transpose`] for real scalars.
    #[must_use]
    pub fn conjugate_transpose(&self) -> Self {
        Self {
            data: self.data.t().mapv(|value| value.conj()),
        }
    }

    /// Returns the matrix product `self · rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Product`] if `self` has a different number of
    /// columns than `rhs` has rows.
    pub fn matmul(&self, rhs: &Self) -> Result<Self, ShapeError> {
        let (lhs_dim, rhs_dim) = (self.dim(), rhs.dim());
        if lhs_dim.1 != rhs_dim.0 {
            return Err(ShapeError::Product {
                lhs: lhs_dim,
                rhs: rhs_dim,
            });
        }
        Ok(Self {
            data: self.data.dot(&rhs.data),
        })
    }
}

impl<S> Index<(usize, usize)> for Matrix<S> {
    type Output = S;

    fn index(&self, (row, col): (usize, usize)) -> &S {
        &self.data[[row, col]]
    }
}

/// Unchecked product for shapes known to agree.
///
/// # Panics
///
/// Panics if the inner dimensions differ; use [`Matrix::matmul`] otherwise.
impl<S: Scalar> Mul for &Matrix<S> {
    type Output = Matrix<S>;

    fn mul(self, rhs: Self) -> Matrix<S> {
        Matrix {
            data: self.data.dot(&rhs.data),
        }
    }
}
