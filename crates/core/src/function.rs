//! Callable functions of scalar and vector arguments.
//!
//! A [`Function`] takes a slice of [`Arg`]s and returns a tagged [`Output`].
//! The tag lets callers that need a plain scalar (the root finders) reject
//! results of any other shape without knowing how the function is built.

mod closure;

use std::fmt;

use thiserror::Error;

use crate::{Matrix, Scalar, Vector};

pub use closure::{FallibleFn, ScalarFn, VectorFn};

/// An argument passed to a [`Function`].
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<S> {
    Scalar(S),
    Vector(Vector<S>),
}

/// The tagged result of evaluating a [`Function`].
#[derive(Debug, Clone, PartialEq)]
pub enum Output<S> {
    Scalar(S),
    Vector(Vector<S>),
    Matrix(Matrix<S>),
}

impl<S> Output<S> {
    /// Returns the tag of this result.
    #[must_use]
    pub fn kind(&self) -> OutputKind {
        match self {
            Output::Scalar(_) => OutputKind::Scalar,
            Output::Vector(_) => OutputKind::Vector,
            Output::Matrix(_) => OutputKind::Matrix,
        }
    }
}

/// The shape of an [`Output`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Scalar,
    Vector,
    Matrix,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputKind::Scalar => "scalar",
            OutputKind::Vector => "vector",
            OutputKind::Matrix => "matrix",
        };
        f.write_str(name)
    }
}

/// Errors produced by the reference function implementations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FunctionError {
    #[error("expected {expected} argument(s), found {found}")]
    Arity { expected: usize, found: usize },

    #[error("argument {index} has the wrong type")]
    ArgumentType { index: usize },

    #[error("outside the function's domain: {reason}")]
    Domain { reason: &'static str },
}

/// A function that can be evaluated at one or more scalar or vector arguments.
pub trait Function<S: Scalar> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or the evaluation is undefined.
    fn eval(&self, args: &[Arg<S>]) -> Result<Output<S>, Self::Error>;

    /// Evaluates the function, treating failure as unrecoverable.
    ///
    /// # Panics
    ///
    /// Panics if [`Function::eval`] fails.
    fn must_eval(&self, args: &[Arg<S>]) -> Output<S> {
        match self.eval(args) {
            Ok(output) => output,
            Err(err) => panic!("function evaluation failed: {err}"),
        }
    }
}

impl<S: Scalar, F: Function<S> + ?Sized> Function<S> for &F {
    type Error = F::Error;

    fn eval(&self, args: &[Arg<S>]) -> Result<Output<S>, Self::Error> {
        (**self).eval(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Orientation;

    #[test]
    fn output_kind_matches_variant() {
        assert_eq!(Output::Scalar(1.0).kind(), OutputKind::Scalar);
        assert_eq!(
            Output::Vector(Vector::<f64>::zeros(Orientation::Row, 2)).kind(),
            OutputKind::Vector
        );
        assert_eq!(
            Output::Matrix(Matrix::<f64>::identity(2)).kind(),
            OutputKind::Matrix
        );
        assert_eq!(OutputKind::Vector.to_string(), "vector");
    }

    #[test]
    fn must_eval_returns_output() {
        let square = ScalarFn::new(|x: f64| x * x);
        assert_eq!(square.must_eval(&[Arg::Scalar(3.0)]), Output::Scalar(9.0));
    }

    #[test]
    #[should_panic(expected = "function evaluation failed")]
    fn must_eval_panics_on_failure() {
        let square = ScalarFn::new(|x: f64| x * x);
        let _ = square.must_eval(&[]);
    }
}
