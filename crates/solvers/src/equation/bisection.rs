//! Bisection method.
//!
//! Repeatedly halves an interval `[a, b]`, keeping the half over which `f`
//! changes sign. The stop test is met when `f` is exactly zero at the
//! midpoint or when the half-width `(b - a) / 2` drops below the tolerance.
//!
//! Endpoints are real. The sign comparison uses the real part of
//! `f(a) · f(c)`, so complex-valued functions are bisected on their real
//! part. The bracket is not required to contain a sign change; without one
//! the interval collapses toward an endpoint.

use std::cmp::Ordering;

use numeth_core::{Function, Observer, Scalar};

use super::{
    Action, Config, Error, Event, Solution,
    iterate::{Iteration, eval_at, run},
};

/// Why a bracket was refused before any evaluation.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket endpoint is NaN or infinite")]
    NonFinite,

    #[error("bracket endpoints coincide")]
    ZeroWidth,
}

/// Finds a root of `f` inside `bracket` by bisection.
///
/// The endpoints may be given in either order.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if an endpoint is non-finite or both are
/// equal, [`Error::NoConvergence`] if the budget runs out, or the evaluation
/// error of `f`.
pub fn solve<S, F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: Scalar,
    F: Function<S>,
    Obs: Observer<Event<S>, Action>,
{
    let state = Bisection::new(f, bracket)?;
    run("bisection", state, config, observer)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<S, F>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<S>, Error>
where
    S: Scalar,
    F: Function<S>,
{
    solve(f, bracket, config, ())
}

struct Bisection<'f, S, F> {
    f: &'f F,
    left: f64,
    right: f64,
    f_left: S,
    mid: f64,
    f_mid: S,
    previous: f64,
}

impl<'f, S, F> Bisection<'f, S, F>
where
    S: Scalar,
    F: Function<S>,
{
    fn new(f: &'f F, [a, b]: [f64; 2]) -> Result<Self, Error> {
        if !(a.is_finite() && b.is_finite()) {
            return Err(BracketError::NonFinite.into());
        }
        let (left, right) = match a.partial_cmp(&b) {
            Some(Ordering::Less) => (a, b),
            Some(Ordering::Greater) => (b, a),
            _ => return Err(BracketError::ZeroWidth.into()),
        };

        let f_left = eval_at(f, S::from_real(left))?;
        let mid = midpoint(left, right);
        let f_mid = eval_at(f, S::from_real(mid))?;

        Ok(Self {
            f,
            left,
            right,
            f_left,
            mid,
            f_mid,
            previous: mid,
        })
    }
}

impl<S, F> Iteration<S> for Bisection<'_, S, F>
where
    S: Scalar,
    F: Function<S>,
{
    fn current(&self) -> S {
        S::from_real(self.mid)
    }

    fn previous(&self) -> S {
        S::from_real(self.previous)
    }

    fn is_converged(&self, tol: f64) -> bool {
        self.f_mid.is_exact_zero() || (self.right - self.left) / 2.0 < tol
    }

    fn advance(&mut self) -> Result<(), Error> {
        if (self.f_left * self.f_mid).re() > 0.0 {
            self.left = self.mid;
            self.f_left = self.f_mid;
        } else {
            self.right = self.mid;
        }

        self.previous = self.mid;
        self.mid = midpoint(self.left, self.right);
        self.f_mid = eval_at(self.f, S::from_real(self.mid))?;
        Ok(())
    }
}

fn midpoint(left: f64, right: f64) -> f64 {
    left + (right - left) / 2.0
}
