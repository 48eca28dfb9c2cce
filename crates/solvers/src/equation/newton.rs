//! Newton's method.
//!
//! Each update follows the tangent line: `next = p - f(p) / f'(p)`.
//! Converges quadratically near a simple root. A zero derivative produces a
//! non-finite step, which then exhausts the budget rather than failing early.

use numeth_core::{Function, Observer, Scalar};

use super::{
    Action, Config, Error, Event, Solution,
    iterate::{Iteration, eval_at, run},
};

/// Finds a root of `f` by Newton's method, starting from `x0`.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if the budget runs out, or the evaluation
/// error of `f` or `df`.
pub fn solve<S, F, D, Obs>(
    f: &F,
    df: &D,
    x0: S,
    config: &Config,
    observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: Scalar,
    F: Function<S>,
    D: Function<S>,
    Obs: Observer<Event<S>, Action>,
{
    let state = Newton::new(f, df, x0)?;
    run("newton", state, config, observer)
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<S, F, D>(
    f: &F,
    df: &D,
    x0: S,
    config: &Config,
) -> Result<Solution<S>, Error>
where
    S: Scalar,
    F: Function<S>,
    D: Function<S>,
{
    solve(f, df, x0, config, ())
}

struct Newton<'f, F, D, S> {
    f: &'f F,
    df: &'f D,
    previous: S,
    current: S,
}

impl<'f, F, D, S> Newton<'f, F, D, S>
where
    S: Scalar,
    F: Function<S>,
    D: Function<S>,
{
    fn new(f: &'f F, df: &'f D, x0: S) -> Result<Self, Error> {
        let current = step(f, df, x0)?;
        Ok(Self {
            f,
            df,
            previous: x0,
            current,
        })
    }
}

impl<F, D, S> Iteration<S> for Newton<'_, F, D, S>
where
    S: Scalar,
    F: Function<S>,
    D: Function<S>,
{
    fn current(&self) -> S {
        self.current
    }

    fn previous(&self) -> S {
        self.previous
    }

    fn advance(&mut self) -> Result<(), Error> {
        let next = step(self.f, self.df, self.current)?;
        self.previous = self.current;
        self.current = next;
        Ok(())
    }
}

fn step<S, F, D>(f: &F, df: &D, x: S) -> Result<S, Error>
where
    S: Scalar,
    F: Function<S>,
    D: Function<S>,
{
    let fx = eval_at(f, x)?;
    let dfx = eval_at(df, x)?;
    Ok(x - fx / dfx)
}
