use log::debug;
use numeth_core::{Matrix, Orientation, Scalar, Vector};

use super::Error;

/// The factors of an LDLᴴ decomposition.
///
/// `l` is unit lower triangular and `d` is diagonal. The factorized matrix is
/// `l · d · lᴴ`, which is `l · d · lᵗ` for real scalars.
#[derive(Debug, Clone, PartialEq)]
pub struct Ldlt<S> {
    pub l: Matrix<S>,
    pub d: Matrix<S>,
}

impl<S: Scalar> Ldlt<S> {
    /// Returns `l · d · lᴴ`.
    #[must_use]
    pub fn reconstruct(&self) -> Matrix<S> {
        &(&self.l * &self.d) * &self.l.conjugate_transpose()
    }
}

/// Computes the LDLᴴ decomposition of a Hermitian matrix.
///
/// No pivoting is performed. Row `i` is built in one pass: the products
/// `l[i][j]·d[j][j]` for `j < i` are cached in a scratch vector, summed into
/// the diagonal `d[i][i]`, and reused for every `l[j][i]` below it.
///
/// The input must be exactly Hermitian. Definiteness is not checked: an
/// indefinite matrix whose leading pivots are all nonzero still factorizes.
///
/// # Errors
///
/// Returns [`Error::NotSquare`] for a rectangular input,
/// [`Error::NotHermitian`] if `a[i][j] != conj(a[j][i])` for some entry, and
/// [`Error::Singular`] when a diagonal pivot is exactly zero.
pub fn ldlt<S: Scalar>(a: &Matrix<S>) -> Result<Ldlt<S>, Error> {
    let (rows, cols) = a.dim();
    if !a.is_square() {
        return Err(Error::NotSquare { rows, cols });
    }
    check_hermitian(a)?;

    let n = rows;
    let mut l = Matrix::<S>::zeros(n, n);
    let mut d = Matrix::<S>::zeros(n, n);
    let mut scaled = Vector::<S>::zeros(Orientation::Row, n);

    for i in 0..n {
        let mut sum = S::zero();
        for j in 0..i {
            let product = l.get(i, j) * d.get(j, j);
            scaled.set(j, product);
            sum = sum + l.get(i, j) * product.conj();
        }

        let diagonal = a.get(i, i) - sum;
        if diagonal.is_exact_zero() {
            debug!("zero diagonal at step {i}");
            return Err(Error::Singular { pivot: i });
        }
        l.set(i, i, S::one());
        d.set(i, i, diagonal);

        for j in i + 1..n {
            let sum = (0..i).fold(S::zero(), |sum, k| sum + l.get(j, k) * scaled.get(k).conj());
            l.set(j, i, (a.get(j, i) - sum) / diagonal);
        }
    }

    Ok(Ldlt { l, d })
}

fn check_hermitian<S: Scalar>(a: &Matrix<S>) -> Result<(), Error> {
    let (n, _) = a.dim();
    for row in 0..n {
        for col in row..n {
            if a.get(row, col) != a.get(col, row).conj() {
                return Err(Error::NotHermitian { row, col });
            }
        }
    }
    Ok(())
}
