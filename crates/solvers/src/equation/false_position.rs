//! Method of false position (regula falsi).
//!
//! Like the secant method, but the older point is only replaced when the new
//! approximation and the newer point straddle a sign change of `f`, i.e.
//! when `re(f(next) · f(p2)) < 0`. Starting points are not required to
//! bracket a root.
//!
//! `f` is evaluated at each candidate as soon as it is computed, so a
//! candidate where `f` fails is never returned as a root.
//!
//! The stop test runs before every update, including the first, so a budget
//! of `n` runs `n` stop tests. Loops that count the two starting points
//! against the budget converge one budget step later.

use numeth_core::{Function, Observer, Scalar};

use super::{
    Action, Config, Error, Event, Solution,
    iterate::{Iteration, eval_at, run, secant_step},
};

/// Finds a root of `f` by false position from the starting points `x0` and
/// `x1`.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if the budget runs out, or the evaluation
/// error of `f`.
pub fn solve<S, F, Obs>(
    f: &F,
    x0: S,
    x1: S,
    config: &Config,
    observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: Scalar,
    F: Function<S>,
    Obs: Observer<Event<S>, Action>,
{
    let f0 = eval_at(f, x0)?;
    let f1 = eval_at(f, x1)?;
    let current = secant_step(x0, f0, x1, f1);
    let state = FalsePosition {
        f,
        p1: x0,
        f1: f0,
        p2: x1,
        f2: f1,
        current,
        f_current: eval_at(f, current)?,
    };
    run("false position", state, config, observer)
}

/// Runs false position without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<S, F>(f: &F, x0: S, x1: S, config: &Config) -> Result<Solution<S>, Error>
where
    S: Scalar,
    F: Function<S>,
{
    solve(f, x0, x1, config, ())
}

struct FalsePosition<'f, F, S> {
    f: &'f F,
    p1: S,
    f1: S,
    p2: S,
    f2: S,
    current: S,
    f_current: S,
}

impl<F, S> Iteration<S> for FalsePosition<'_, F, S>
where
    S: Scalar,
    F: Function<S>,
{
    fn current(&self) -> S {
        self.current
    }

    fn previous(&self) -> S {
        self.p2
    }

    fn advance(&mut self) -> Result<(), Error> {
        if (self.f_current * self.f2).re() < 0.0 {
            self.p1 = self.p2;
            self.f1 = self.f2;
        }
        self.p2 = self.current;
        self.f2 = self.f_current;

        self.current = secant_step(self.p1, self.f1, self.p2, self.f2);
        self.f_current = eval_at(self.f, self.current)?;
        Ok(())
    }
}
