/// Receives solver events and optionally steers the iteration.
///
/// A minimizer calls `observe` at well-defined points of its loop (see the
/// solver's `Event` type). Returning `Some(action)` requests a solver-specific
/// action such as stopping early, while `None` lets the solver carry on.
///
/// Progress reporting, plotting, and custom stopping rules are all observers,
/// so the solver itself never prints or collects anything beyond its result.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is a no-op
/// observer that never acts.
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
