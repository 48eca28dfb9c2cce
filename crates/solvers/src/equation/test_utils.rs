//! Shared fixtures for the root finder tests.
//!
//! The cubic `f(x) = x³ + 5x² + x - 5` has a single real root near 0.8434.
//! Rearranged as `x = √((5 - x - x³) / 5)` it becomes a contraction toward
//! the same root, used by the fixed-point style solvers.

use numeth_core::{FallibleFn, Function, FunctionError, ScalarFn};

/// The real root of the cubic, to the precision the tests check.
pub(crate) const ROOT: f64 = 0.8434;

/// Stop-test tolerance used throughout.
pub(crate) const TOL: f64 = 1e-4;

pub(crate) fn cubic() -> impl Function<f64, Error = FunctionError> {
    ScalarFn::new(|x: f64| x.powi(3) + 5.0 * x.powi(2) + x - 5.0)
}

pub(crate) fn cubic_prime() -> impl Function<f64, Error = FunctionError> {
    ScalarFn::new(|x: f64| 3.0 * x.powi(2) + 10.0 * x + 1.0)
}

pub(crate) fn cubic_second() -> impl Function<f64, Error = FunctionError> {
    ScalarFn::new(|x: f64| 6.0 * x + 10.0)
}

/// The cubic rearranged as a fixed-point map.
pub(crate) fn contraction() -> impl Function<f64, Error = FunctionError> {
    FallibleFn::new(|x: f64| {
        let radicand = (5.0 - x - x.powi(3)) / 5.0;
        if radicand < 0.0 {
            return Err(FunctionError::Domain {
                reason: "negative radicand",
            });
        }
        Ok(radicand.sqrt())
    })
}

/// A function that fails at every input.
pub(crate) fn failing() -> impl Function<f64, Error = FunctionError> {
    FallibleFn::new(|_: f64| -> Result<f64, FunctionError> {
        Err(FunctionError::Domain {
            reason: "undefined everywhere",
        })
    })
}
