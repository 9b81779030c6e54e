//! Line-search minimization with Gradient Descent or Newton's method.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration:
//!
//! 1. Computes a search direction `d` from the current evaluation
//!    ([`Method::GradientDescent`] uses `−∇f`, [`Method::Newton`] solves
//!    `∇²f·d = −∇f`).
//! 2. Backtracks from an initial step size until
//!    `f(x + α·d) ≤ f(x) + c·α·⟨−d, d⟩` (see [`Backtracking`]).
//! 3. Evaluates the candidate `x + α·d` and applies the method's convergence
//!    test. On convergence the run ends and returns the point the step started
//!    from. Otherwise the candidate is accepted and recorded.
//!
//! The run also ends when `max_iters` iterations have been counted, with
//! [`Status::MaxIters`]. Non-convergence is not an error.
//!
//! # When to Use
//!
//! - The objective is smooth and its gradient is available
//! - Newton: the Hessian is available and positive definite near the minimum
//! - Gradient Descent: Hessians are unavailable or too expensive
//!
//! # Limitations
//!
//! - **Unconstrained only**: no bounds or constraints on `x`
//! - **Dense linear algebra**: Newton solves a dense `N × N` system per step
//! - **Local minima**: converges to a stationary point near `x0`, not
//!   necessarily the global minimum
//!
//! # Observer Events
//!
//! - [`Event::Started`] — the starting point was evaluated
//! - [`Event::Accepted`] — a step was accepted and recorded
//! - [`Event::Converged`] — the convergence test passed
//!
//! Observers can return [`Action::StopEarly`] from `Started` or `Accepted` to
//! end the run with [`Status::StoppedByObserver`].

mod action;
mod backtracking;
mod config;
mod error;
mod event;
mod linalg;
mod method;
mod search;
mod solution;
mod state;
mod trajectory;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use backtracking::Backtracking;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use method::Method;
pub use solution::{Solution, Status};
pub use trajectory::{Record, Trajectory};

use descent_core::{Objective, Observer};

use search::search;

/// Minimizes the objective starting from `x0`.
///
/// The observer receives an [`Event`] when the run starts, after every accepted
/// step, and on convergence.
/// See the [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the objective fails or produces a non-finite value at
/// an evaluated point, if Newton's method meets a missing or singular Hessian,
/// or if the line search cannot find an acceptable step.
pub fn minimize<O, Obs, const N: usize>(
    objective: &O,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    search(objective, x0, config, observer)
}

/// Minimizes the objective starting from `x0` without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<O, const N: usize>(
    objective: &O,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
{
    minimize(objective, x0, config, ())
}
