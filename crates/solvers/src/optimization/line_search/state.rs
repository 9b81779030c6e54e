use descent_core::Evaluation;

use super::{Record, Solution, Status, Trajectory};

/// Mutable state of a single minimization run.
pub(super) struct State<const N: usize> {
    current: Record<N>,
    eval: Evaluation<N>,
    iters: usize,
    trajectory: Trajectory<N>,
}

impl<const N: usize> State<N> {
    pub(super) fn new(x: [f64; N], eval: Evaluation<N>) -> Self {
        let current = Record {
            iter: 0,
            x,
            value: eval.value,
        };
        Self {
            current,
            eval,
            iters: 0,
            trajectory: Trajectory::new(current),
        }
    }

    pub(super) fn current(&self) -> &Record<N> {
        &self.current
    }

    pub(super) fn eval(&self) -> &Evaluation<N> {
        &self.eval
    }

    pub(super) fn iters(&self) -> usize {
        self.iters
    }

    pub(super) fn tick(&mut self) {
        self.iters += 1;
    }

    /// Moves to an accepted point and records it.
    pub(super) fn accept(&mut self, x: [f64; N], eval: Evaluation<N>) -> Record<N> {
        self.current = Record {
            iter: self.iters,
            x,
            value: eval.value,
        };
        self.eval = eval;
        self.trajectory.push(self.current);
        self.current
    }

    pub(super) fn into_solution(self, status: Status) -> Solution<N> {
        Solution {
            status,
            x: self.current.x,
            value: self.current.value,
            trajectory: self.trajectory,
            iters: self.iters,
        }
    }
}
