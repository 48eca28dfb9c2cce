//! Dense matrix factorizations.
//!
//! Both factorizations read their input through a shared reference and build
//! fresh factor matrices; the input is never mutated. Pivot decisions use
//! exact zero tests ([`Scalar::is_exact_zero`]), so a factorization fails only
//! when a pivot is exactly zero, never because it is merely small.
//!
//! # Factorizations
//!
//! - [`lu`]: `Pᵗ·L·U = A` with row pivoting on zero pivots
//! - [`ldlt`]: `L·D·Lᴴ = A` for Hermitian `A`, without pivoting
//!
//! [`Scalar::is_exact_zero`]: numeth_core::Scalar::is_exact_zero

mod error;
mod ldlt;
mod lu;

pub use error::Error;
pub use ldlt::{Ldlt, ldlt};
pub use lu::{Lu, lu};
