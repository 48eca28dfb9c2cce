use log::{debug, trace};
use numeth_core::{Arg, Function, Observer, Scalar};

use super::{Action, Config, Error, Event, Solution, Status, evaluate};

/// The state a root finder carries between updates.
pub(super) trait Iteration<S: Scalar> {
    /// The latest approximation.
    fn current(&self) -> S;

    /// The approximation `current` was computed from.
    fn previous(&self) -> S;

    /// Returns true if the stop test is met.
    ///
    /// The default compares `|current - previous|` against `tol`.
    fn is_converged(&self, tol: f64) -> bool {
        distance(self.current(), self.previous()) < tol
    }

    /// Computes the next approximation.
    fn advance(&mut self) -> Result<(), Error>;
}

/// Drives an iteration until it converges, the observer stops it, or the
/// iteration budget runs out.
///
/// The stop test runs before each update, so a budget of zero always exhausts.
pub(super) fn run<S, It, Obs>(
    method: &str,
    mut state: It,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: Scalar,
    It: Iteration<S>,
    Obs: Observer<Event<S>, Action>,
{
    for iter in 0..config.max_iters() {
        if state.is_converged(config.tol()) {
            debug!("{method} converged after {iter} iterations");
            return Ok(Solution {
                status: Status::Converged,
                root: state.current(),
                iters: iter,
            });
        }

        state.advance()?;

        let event = Event {
            iter: iter + 1,
            x: state.current(),
            previous: state.previous(),
        };
        trace!("{method} iteration {}: x = {:?}", event.iter, event.x);

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("{method} stopped by observer after {} iterations", event.iter);
            return Ok(Solution {
                status: Status::StoppedByObserver,
                root: event.x,
                iters: event.iter,
            });
        }
    }

    debug!(
        "{method} did not converge within {} iterations",
        config.max_iters()
    );
    Err(Error::NoConvergence {
        iters: config.max_iters(),
    })
}

/// Evaluates `f` at a single scalar argument.
pub(super) fn eval_at<S, F>(f: &F, x: S) -> Result<S, Error>
where
    S: Scalar,
    F: Function<S>,
{
    Ok(evaluate(f, &[Arg::Scalar(x)])?)
}

/// `|a - b|` as a real number.
pub(super) fn distance<S: Scalar>(a: S, b: S) -> f64 {
    (a - b).abs().re()
}

/// The secant step through `(p1, f1)` and `(p2, f2)`.
pub(super) fn secant_step<S: Scalar>(p1: S, f1: S, p2: S, f2: S) -> S {
    p2 - f2 * ((p2 - p1) / (f2 - f1))
}
