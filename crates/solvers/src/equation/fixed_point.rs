//! Fixed-point iteration.
//!
//! Iterates `p ← g(p)` until successive values agree within the tolerance.
//! Converges when `g` is a contraction near the fixed point.

use numeth_core::{Function, Observer, Scalar};

use super::{
    Action, Config, Error, Event, Solution,
    iterate::{Iteration, eval_at, run},
};

/// Finds a fixed point of `g`, starting from `x0`.
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
    let current = eval_at(g, x0)?;
    let state = FixedPoint {
        g,
        previous: x0,
        current,
    };
    run("fixed point", state, config, observer)
}

/// Runs fixed-point iteration without observation.
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

struct FixedPoint<'g, G, S> {
    g: &'g G,
    previous: S,
    current: S,
}

impl<G, S> Iteration<S> for FixedPoint<'_, G, S>
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
        let next = eval_at(self.g, self.current)?;
        self.previous = self.current;
        self.current = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use numeth_core::FunctionError;

    use crate::equation::{
        Status,
        test_utils::{ROOT, TOL, contraction},
    };

    fn config(max_iters: usize) -> Config {
        Config::new(max_iters, TOL).expect("valid config")
    }

    #[test]
    fn finds_fixed_point_of_contraction() {
        let solution =
            solve_unobserved(&contraction(), 0.7, &config(100)).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 8);
        assert_abs_diff_eq!(solution.root, ROOT, epsilon = TOL);
    }

    #[test]
    fn exhausts_small_budget() {
        let result = solve_unobserved(&contraction(), 0.7, &config(5));
        assert!(matches!(result, Err(Error::NoConvergence { iters: 5 })));
    }

    #[test]
    fn propagates_domain_error() {
        // g(2) takes the square root of a negative number.
        let result = solve_unobserved(&contraction(), 2.0, &config(100));

        let Err(Error::Function(source)) = result else {
            panic!("expected a function error");
        };
        assert_eq!(
            source.downcast_ref::<FunctionError>(),
            Some(&FunctionError::Domain {
                reason: "negative radicand"
            })
        );
    }

    #[test]
    fn observer_receives_consecutive_iterates() {
        let mut steps = Vec::new();
        let observer = |event: &Event<f64>| -> Option<Action> {
            steps.push((event.previous, event.x));
            None
        };

        solve(&contraction(), 0.7, &config(100), observer).expect("should converge");

        assert_eq!(steps.len(), 8);
        for pair in steps.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }
}
