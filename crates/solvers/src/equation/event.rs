/// Iteration event emitted by the root finders after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<S> {
    /// Number of updates performed so far (1-based).
    pub iter: usize,
    /// The new approximation.
    pub x: S,
    /// The approximation it replaced.
    pub previous: S,
}

/// Control actions supported by the root finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the latest approximation.
    StopEarly,
}
