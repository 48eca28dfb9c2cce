//! Modified Newton's method.
//!
//! Applies Newton's method to `μ(x) = f(x) / f'(x)`, which has only simple
//! roots, so quadratic convergence is kept at roots of higher multiplicity:
//!
//! ```text
//! next = p - f·f' / (f'² - f·f'')
//! ```

use numeth_core::{Function, Observer, Scalar};

use super::{
    Action, Config, Error, Event, Solution,
    iterate::{Iteration, eval_at, run},
};

/// The function together with its first two derivatives.
#[derive(Debug, Clone, Copy)]
pub struct Derivatives<'f, F, D1, D2> {
    /// The function whose root is sought.
    pub f: &'f F,
    /// First derivative.
    pub df: &'f D1,
    /// Second derivative.
    pub d2f: &'f D2,
}

/// Finds a root of `f` by the modified Newton method, starting from `x0`.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if the budget runs out, or the first
/// evaluation error among `f`, `f'` and `f''`.
pub fn solve<S, F, D1, D2, Obs>(
    funcs: Derivatives<'_, F, D1, D2>,
    x0: S,
    config: &Config,
    observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: Scalar,
    F: Function<S>,
    D1: Function<S>,
    D2: Function<S>,
    Obs: Observer<Event<S>, Action>,
{
    let current = funcs.step(x0)?;
    let state = ModifiedNewton {
        funcs,
        previous: x0,
        current,
    };
    run("modified newton", state, config, observer)
}

/// Runs the modified Newton method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<S, F, D1, D2>(
    funcs: Derivatives<'_, F, D1, D2>,
    x0: S,
    config: &Config,
) -> Result<Solution<S>, Error>
where
    S: Scalar,
    F: Function<S>,
    D1: Function<S>,
    D2: Function<S>,
{
    solve(funcs, x0, config, ())
}

impl<F, D1, D2> Derivatives<'_, F, D1, D2> {
    fn step<S>(&self, x: S) -> Result<S, Error>
    where
        S: Scalar,
        F: Function<S>,
        D1: Function<S>,
        D2: Function<S>,
    {
        let fx = eval_at(self.f, x)?;
        let dfx = eval_at(self.df, x)?;
        let d2fx = eval_at(self.d2f, x)?;
        Ok(x - (fx * dfx) / (dfx.powi(2) - fx * d2fx))
    }
}

struct ModifiedNewton<'f, F, D1, D2, S> {
    funcs: Derivatives<'f, F, D1, D2>,
    previous: S,
    current: S,
}

impl<F, D1, D2, S> Iteration<S> for ModifiedNewton<'_, F, D1, D2, S>
where
    S: Scalar,
    F: Function<S>,
    D1: Function<S>,
    D2: Function<S>,
{
    fn current(&self) -> S {
        self.current
    }

    fn previous(&self) -> S {
        self.previous
    }

    fn advance(&mut self) -> Result<(), Error> {
        let next = self.funcs.step(self.current)?;
        self.previous = self.current;
        self.current = next;
        Ok(())
    }
}
