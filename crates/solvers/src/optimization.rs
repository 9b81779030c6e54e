//! Solvers for optimization problems.
//!
//! An [`Objective`] reports its value, gradient, and optionally its Hessian at
//! a point `x: [f64; N]`. Solvers in this module search for the `x` that
//! minimizes that value.
//!
//! # Solvers
//!
//! - [`line_search`] — Gradient Descent and Newton's method with a
//!   backtracking line search
//!
//! [`Objective`]: descent_core::Objective

mod evaluate;

pub use evaluate::{EvalError, evaluate};

pub mod line_search;
