//! Core traits and types for numeth.
//!
//! This crate defines the shared abstractions that the factorizations and
//! root finders in `numeth-solvers` build on:
//!
//! - [`Scalar`]: a complex-capable number, implemented for `f64` and
//!   [`Complex64`]
//! - [`Matrix`] and [`Vector`]: dense containers backed by `ndarray`
//! - [`Function`]: a callable mapping scalar/vector arguments to a tagged
//!   [`Output`], with reference implementations [`ScalarFn`], [`FallibleFn`],
//!   and [`VectorFn`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod matrix;
mod observer;
mod scalar;
mod vector;

pub use function::{
    Arg, FallibleFn, Function, FunctionError, Output, OutputKind, ScalarFn, VectorFn,
};
pub use matrix::{Matrix, ShapeError};
pub use num_complex::Complex64;
pub use observer::Observer;
pub use scalar::Scalar;
pub use vector::{Orientation, Vector};
