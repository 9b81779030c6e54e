use super::Record;

/// Events emitted by the line-search minimizer.
///
/// Every event carries a [`Record`] describing an accepted point, so observers
/// can report progress uniformly regardless of the event kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a, const N: usize> {
    /// The starting point was evaluated.
    Started {
        /// The starting point (iteration `0`).
        record: Record<N>,
    },

    /// A step was accepted and appended to the trajectory.
    Accepted {
        /// The newly accepted point.
        record: Record<N>,

        /// The search direction the step was taken along.
        direction: &'a [f64; N],

        /// The step size chosen by the line search.
        step_size: f64,
    },

    /// The convergence test passed and the run is finishing.
    Converged {
        /// The point the final step started from, which is returned.
        record: Record<N>,

        /// The final step's candidate, which is not recorded.
        candidate: Record<N>,
    },
}

impl<const N: usize> Event<'_, N> {
    /// Returns the accepted point this event reports.
    #[must_use]
    pub fn record(&self) -> &Record<N> {
        match self {
            Self::Started { record }
            | Self::Accepted { record, .. }
            | Self::Converged { record, .. } => record,
        }
    }

    /// Returns the iteration counter at the time of the event.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Started { record } | Self::Accepted { record, .. } => record.iter,
            Self::Converged { candidate, .. } => candidate.iter,
        }
    }
}
