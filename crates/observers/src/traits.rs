//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused wherever the capabilities exist.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events tied to an iteration counter
//! - [`HasPoint`] — events that carry the current point
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() < self.target).then(A::stop_early)
//!     }
//! }
//! ```

use descent_solvers::optimization::line_search;

/// An event tied to an iteration counter.
pub trait HasIteration {
    /// Returns the iteration counter at the time of the event.
    fn iteration(&self) -> usize;
}

/// An event that carries the current point.
pub trait HasPoint {
    /// Returns the coordinates of the current point.
    fn point(&self) -> &[f64];
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective at the current point.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- line_search::Event ---

impl<const N: usize> HasIteration for line_search::Event<'_, N> {
    fn iteration(&self) -> usize {
        self.iter()
    }
}

impl<const N: usize> HasPoint for line_search::Event<'_, N> {
    fn point(&self) -> &[f64] {
        &self.record().x
    }
}

impl<const N: usize> HasObjective for line_search::Event<'_, N> {
    fn objective(&self) -> f64 {
        self.record().value
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for line_search::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
