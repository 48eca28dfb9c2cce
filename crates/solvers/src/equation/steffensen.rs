//! Steffensen's method.
//!
//! Accelerates fixed-point iteration with Aitken's Δ² process. From `p`,
//! two plain iterates `p1 = g(p)` and `p2 = g(p1)` are extrapolated to
//!
//! ```text
//! next = p - (p1 - p)² / (p2 - 2·p1 + p)
//! ```
//!
//! giving quadratic convergence without derivatives.

use numeth_core::{Function, Observer, Scalar};

use super::{
    Action, Config, Error, Event, Solution,
    iterate::{Iteration, eval_at, run},
};

/// Finds a fixed point of `g` by Steffensen's method, starting from `x0`.
///
/// # Errors
///
/// Returns [`Error::NoConvergence`] if the budget runs out, or the evaluation
/// error of `g`.
pub fn solve<S, G, Obs>(
    g: &G,
    x0: S,
    config: &Config,
    observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: Scalar,
    G: Function<S>,
    Obs: Observer<Event<S>, Action>,
{
    let current = accelerate(g, x0)?;
    let state = Steffensen {
        g,
        previous: x0,
        current,
    };
    run("steffensen", state, config, observer)
}

/// Runs Steffensen's method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<S, G>(g: &G, x0: S, config: &Config) -> Result<Solution<S>, Error>
where
    S: Scalar,
    G: Function<S>,
{
    solve(g, x0, config, ())
}

struct Steffensen<'g, G, S> {
    g: &'g G,
    previous: S,
    current: S,
}

impl<G, S> Iteration<S> for Steffensen<'_, G, S>
where
    S: Scalar,
    G: Function<S>,
{
    fn current(&self) -> S {
        self.current
    }

    fn previous(&self) -> S {
        self.previous
    }

    fn advance(&mut self) -> Result<(), Error> {
        let next = accelerate(self.g, self.current)?;
        self.previous = self.current;
        self.current = next;
        Ok(())
    }
}

fn accelerate<S, G>(g: &G, p: S) -> Result<S, Error>
where
    S: Scalar,
    G: Function<S>,
{
    let p1 = eval_at(g, p)?;
    let p2 = eval_at(g, p1)?;
    Ok(p - (p1 - p).powi(2) / (p2 - S::from_real(2.0) * p1 + p))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::equation::{
        Status, fixed_point,
        test_utils::{ROOT, TOL, contraction, failing},
    };

    fn config(max_iters: usize) -> Config {
        Config::new(max_iters, TOL).expect("valid config")
    }

    #[test]
    fn finds_fixed_point_of_contraction() {
        let solution = solve_unobserved(&contraction(), 0.7, &config(5)).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 2);
        assert_abs_diff_eq!(solution.root, ROOT, epsilon = TOL);
    }

    #[test]
    fn needs_fewer_updates_than_plain_iteration() {
        let config = config(100);

        let accelerated = solve_unobserved(&contraction(), 0.7, &config).expect("should converge");
        let plain =
            fixed_point::solve_unobserved(&contraction(), 0.7, &config).expect("should converge");

        assert!(accelerated.iters < plain.iters);
    }

    #[test]
    fn exhausts_small_budget() {
        let result = solve_unobserved(&contraction(), 0.7, &config(2));
        assert!(matches!(result, Err(Error::NoConvergence { iters: 2 })));
    }

    #[test]
    fn propagates_evaluation_error() {
        let result = solve_unobserved(&failing(), 0.7, &config(5));
        assert!(matches!(result, Err(Error::Function(_))));
    }
}
