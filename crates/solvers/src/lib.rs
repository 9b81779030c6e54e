//! Line-search minimizers for smooth unconstrained objectives.
//!
//! See [`optimization::line_search`] for Gradient Descent and Newton's method
//! driven by a shared backtracking line search.

pub mod optimization;
