/// Receives solver events and decides whether the solve should continue.
///
/// The bisection solver hands every recorded iteration to its observer, which
/// is how the console prints the trace row by row and how callers cut a solve
/// short without touching the solver's own stopping rules.
///
/// Returning `Some(action)` requests a solver-specific action; `None` leaves
/// the iteration untouched.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// the observer that never acts.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
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
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
