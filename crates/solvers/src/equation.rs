//! Solvers for scalar equations: finding `x` such that `f(x) = 0`.
//!
//! Every solver reaches the function only through [`evaluate`], so an
//! evaluation failure or a non-scalar result surfaces the same way from all
//! of them: as an [`Error`] returned immediately, with no retry.
//!
//! Each solver runs a bounded loop. On every iteration it first tests its stop
//! condition against the [`Config`] tolerance, then computes the next
//! approximation. Exhausting [`Config::max_iters`] without meeting the stop
//! condition yields [`Error::NoConvergence`].
//!
//! # Solvers
//!
//! - [`bisection`]: halves a bracket until it is narrower than the tolerance
//! - [`fixed_point`]: iterates `x = g(x)`
//! - [`newton`]: uses the first derivative
//! - [`modified_newton`]: uses first and second derivatives; robust at
//!   multiple roots
//! - [`secant`]: replaces the derivative with a finite difference
//! - [`false_position`]: secant steps that keep a sign-changing endpoint
//! - [`steffensen`]: Aitken-accelerated fixed-point iteration
//!
//! Each module offers `solve`, which reports an [`Event`] to an observer
//! after every update, and `solve_unobserved`.

mod config;
mod error;
mod evaluate;
mod event;
mod iterate;
mod solution;

#[cfg(test)]
mod test_utils;

pub mod bisection;
pub mod false_position;
pub mod fixed_point;
pub mod modified_newton;
pub mod newton;
pub mod secant;
pub mod steffensen;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use evaluate::{EvalError, evaluate};
pub use event::{Action, Event};
pub use solution::{Solution, Status};
