use super::Trajectory;

/// Indicates how a line-search minimization ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a line-search minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Final point.
    ///
    /// On convergence this is the point the last step started from.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub value: f64,

    /// Every accepted point, starting with the initial one.
    pub trajectory: Trajectory<N>,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl<const N: usize> Solution<N> {
    /// Returns `true` if the solver met its convergence test.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
