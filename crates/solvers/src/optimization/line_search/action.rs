/// Actions an observer can take during a line-search minimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the most recently accepted point.
    ///
    /// Ignored when returned from [`Event::Converged`](super::Event::Converged),
    /// since the run is already finished.
    StopEarly,
}
