//! Logs every iteration of a line-search run through `tracing`.
//!
//! # Usage
//!
//! ```text
//! cargo run --example progress -- Newton
//! cargo run --example progress -- "Gradient Descent"
//! ```
//!
//! Minimizes the Rosenbrock function from (−1, 2) with the named method and
//! prints one line per accepted point.

use std::error::Error;

use descent_core::Evaluation;
use descent_observers::ProgressLog;
use descent_solvers::optimization::line_search::{self, Config, Method};

fn rosenbrock(x: &[f64; 2], need_hessian: bool) -> Evaluation<2> {
    let [a, b] = *x;
    let valley = b - a * a;
    let eval = Evaluation::new(
        100.0 * valley * valley + (1.0 - a).powi(2),
        [-400.0 * a * valley - 2.0 * (1.0 - a), 200.0 * valley],
    );
    if need_hessian {
        eval.with_hessian([
            [1200.0 * a * a - 400.0 * b + 2.0, -400.0 * a],
            [-400.0 * a, 200.0],
        ])
    } else {
        eval
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    let method: Method = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("Newton")
        .parse()?;
    let config = Config::new(method, 10_000, 1e-8, 1e-12)?;

    let solution = line_search::minimize(
        &rosenbrock,
        [-1.0, 2.0],
        &config,
        ProgressLog::with_label(method.name()),
    )?;

    println!(
        "{method}: {:?} after {} iterations at x = {:?}",
        solution.status, solution.iters, solution.x
    );

    Ok(())
}
