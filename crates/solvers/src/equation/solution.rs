/// Indicates how a root finder stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The stop test was met.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<S> {
    /// Final solver status.
    pub status: Status,

    /// The approximation of the root.
    pub root: S,

    /// Number of updates performed before stopping.
    pub iters: usize,
}
