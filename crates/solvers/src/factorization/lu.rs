use log::debug;
use numeth_core::{Matrix, Scalar};

use super::Error;

/// The factors of an LU decomposition with row pivoting.
///
/// `l` is unit lower triangular, `u` is upper triangular, and `p` records the
/// row swaps. The factorized matrix is `pᵗ · l · u`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lu<S> {
    pub l: Matrix<S>,
    pub u: Matrix<S>,
    pub p: Matrix<S>,
}

impl<S: Scalar> Lu<S> {
    /// Returns `pᵗ · l · u`.
    #[must_use]
    pub fn reconstruct(&self) -> Matrix<S> {
        &(&self.p.transpose() * &self.l) * &self.u
    }
}

/// Computes the LU decomposition of a square matrix.
///
/// # Algorithm
///
/// Doolittle elimination on a working copy of `a`. At step `i` the pivot is
/// the Schur complement `a[i][i] - Σ l[i][k]·u[k][i]`. If it is exactly zero
/// and `i` is not the last step, rows below are searched top-down for the
/// first nonzero Schur complement in column `i`; that row is swapped into
/// place in the working copy, in `p`, and in the part of `l` built so far.
///
/// The last pivot is never searched, so a zero there is kept in `u` as is.
///
/// # Errors
///
/// Returns [`Error::NotSquare`] for a rectangular input and
/// [`Error::Singular`] if no row can supply a nonzero pivot.
pub fn lu<S: Scalar>(a: &Matrix<S>) -> Result<Lu<S>, Error> {
    let (rows, cols) = a.dim();
    if !a.is_square() {
        return Err(Error::NotSquare { rows, cols });
    }

    let n = rows;
    let mut work = a.clone();
    let mut p = Matrix::identity(n);
    let mut l = Matrix::zeros(n, n);
    let mut u = Matrix::zeros(n, n);

    for i in 0..n {
        let mut pivot = schur_complement(&work, &l, &u, i, i);

        if i + 1 < n && pivot.is_exact_zero() {
            let (row, value) = (i + 1..n)
                .map(|row| (row, schur_complement(&work, &l, &u, row, i)))
                .find(|(_, value)| !value.is_exact_zero())
                .ok_or(Error::Singular { pivot: i })?;

            debug!("zero pivot at step {i}, swapping in row {row}");
            work.swap_rows(i, row);
            p.swap_rows(i, row);
            l.swap_rows(i, row);
            pivot = value;
        }

        u.set(i, i, pivot);
        l.set(i, i, S::one());

        for j in i + 1..n {
            u.set(i, j, work.get(i, j) - partial_dot(&l, i, &u, j, i));
            l.set(j, i, schur_complement(&work, &l, &u, j, i) / pivot);
        }
    }

    Ok(Lu { l, u, p })
}

/// Entry `(row, col)` of `a` minus the contribution of the first `col` steps.
fn schur_complement<S: Scalar>(
    a: &Matrix<S>,
    l: &Matrix<S>,
    u: &Matrix<S>,
    row: usize,
    col: usize,
) -> S {
    a.get(row, col) - partial_dot(l, row, u, col, col)
}

/// `Σ_{k < len} l[row][k] · u[k][col]`
fn partial_dot<S: Scalar>(l: &Matrix<S>, row: usize, u: &Matrix<S>, col: usize, len: usize) -> S {
    (0..len).fold(S::zero(), |sum, k| sum + l.get(row, k) * u.get(k, col))
}
