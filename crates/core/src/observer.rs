/// A hook that sees each solver event and may steer the solver.
///
/// Returning `Some(action)` asks the solver to act on it; `None` lets the
/// iteration carry on. What actions exist is up to each solver.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Inspects `event` and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        assert_eq!(Observer::<usize, Stop>::observe(&mut observer, &3), None);
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &usize| {
            seen.push(*event);
            (*event >= 2).then_some(Stop::Now)
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some(Stop::Now));
        assert_eq!(seen, vec![1, 2]);
    }
}
