use thiserror::Error;

/// Errors that can occur during factorization.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is not hermitian: entry ({row}, {col}) differs from the conjugate of ({col}, {row})")]
    NotHermitian { row: usize, col: usize },

    #[error("unable to factorize matrix: no nonzero pivot at step {pivot}")]
    Singular { pivot: usize },
}
