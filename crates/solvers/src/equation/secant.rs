//! Secant method.
//!
//! Replaces the derivative in Newton's method with the slope through the two
//! most recent approximations. Only `f` is evaluated, once per update.
//!
//! The stop test runs before every update, including the first, so a budget
//! of `n` runs `n` stop tests. Loops that count the two starting points
//! against the budget converge one budget step later; from 0.7 and 0.75 the
//! cubic `x³ + 5x² + x - 5` converges here with a budget of 4.

use numeth_core::{Function, Observer, Scalar};

use super::{
    Action, Config, Error, Event, Solution,
    iterate::{Iteration, eval_at, run, secant_step},
};

/// Finds a root of `f` by the secant method from the starting points `x0`
/// and `x1`.
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
    let state = Secant::new(f, x0, x1)?;
    run("secant", state, config, observer)
}

/// Runs the secant method without observation.
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

struct Secant<'f, F, S> {
    f: &'f F,
    p1: S,
    f1: S,
    p2: S,
    f2: S,
    current: S,
}

impl<'f, F, S> Secant<'f, F, S>
where
    S: Scalar,
    F: Function<S>,
{
    fn new(f: &'f F, p1: S, p2: S) -> Result<Self, Error> {
        let f1 = eval_at(f, p1)?;
        let f2 = eval_at(f, p2)?;
        Ok(Self {
            f,
            p1,
            f1,
            p2,
            f2,
            current: secant_step(p1, f1, p2, f2),
        })
    }
}

impl<F, S> Iteration<S> for Secant<'_, F, S>
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
        let f_current = eval_at(self.f, self.current)?;

        self.p1 = self.p2;
        self.f1 = self.f2;
        self.p2 = self.current;
        self.f2 = f_current;

        self.current = secant_step(self.p1, self.f1, self.p2, self.f2);
        Ok(())
    }
}
