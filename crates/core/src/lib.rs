//! Core traits for line-search minimization.
//!
//! This crate defines the contracts shared by solvers and observers:
//!
//! - [`Objective`] — a function that reports its value, gradient, and
//!   optionally its Hessian at a point
//! - [`Evaluation`] — the result of evaluating an objective
//! - [`Observer`] — receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::{Evaluation, Objective};
pub use observer::Observer;
