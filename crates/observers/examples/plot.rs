//! Interactive visualizations of the line-search minimizers.
//!
//! Each mode minimizes a two-variable objective with both Gradient Descent and
//! Newton's method and opens a plot window comparing the runs.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- rosenbrock
//! cargo run --example plot --features plot -- rotated path
//! cargo run --example plot --features plot -- exp history
//! ```
//!
//! # Objectives
//!
//! - **sphere** — x² + y², a circular bowl
//! - **axis** — x² + 100·y², an ill-conditioned bowl along the axes
//! - **rotated** — the same conditioning rotated by 30°, which makes Gradient
//!   Descent zig-zag
//! - **rosenbrock** — the banana valley, started from (−1, 2)
//! - **exp** — e^(x+3y−0.1) + e^(x−3y−0.1) + e^(−x−0.1)
//!
//! # Views
//!
//! - **history** (default) — objective against iteration on a log scale
//! - **path** — accepted points in the plane, over ten level curves of the
//!   objective

use std::error::Error;

use descent_core::Evaluation;
use descent_observers::{PlotObserver, ShowConfig, contour::Contour};
use descent_solvers::optimization::line_search::{self, Config, Event, Method};

type Objective2 = fn(&[f64; 2], bool) -> Evaluation<2>;

#[derive(Clone, Copy)]
enum View {
    History,
    Path,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "rosenbrock".into());
    let view = match args.next().as_deref() {
        None | Some("history") => View::History,
        Some("path") => View::Path,
        Some(other) => usage(&format!("Unknown view: {other}")),
    };

    let (objective, x0): (Objective2, [f64; 2]) = match name.as_str() {
        "sphere" => (|x: &[f64; 2], h: bool| quadratic([[1.0, 0.0], [0.0, 1.0]], x, h), [1.0, 1.0]),
        "axis" => (|x: &[f64; 2], h: bool| quadratic([[1.0, 0.0], [0.0, 100.0]], x, h), [1.0, 1.0]),
        "rotated" => (|x: &[f64; 2], h: bool| quadratic(rotated(), x, h), [1.0, 1.0]),
        "rosenbrock" => (rosenbrock, [-1.0, 2.0]),
        "exp" => (exp_sum, [1.0, 1.0]),
        other => usage(&format!("Unknown objective: {other}")),
    };
    let region = match name.as_str() {
        "exp" => Contour::new([-1.3, 2.5], [-3.0, 3.0]),
        _ => Contour::new([-2.5, 2.5], [-2.5, 2.5]),
    };

    let mut obs = PlotObserver::<2>::new([Method::GradientDescent.name(), Method::Newton.name()]);
    for (slot, method) in [Method::GradientDescent, Method::Newton].into_iter().enumerate() {
        let solution = run(objective, x0, method, slot, view, &mut obs)?;
        println!(
            "{method}: {:?} after {} iterations, x = {:?}, f(x) = {}",
            solution.status, solution.iters, solution.x, solution.value
        );
    }

    let config = ShowConfig::new().title(format!("{name}: Gradient Descent vs. Newton")).legend();
    let config = match view {
        View::History => config.log_y(),
        View::Path => config
            .markers()
            .equal_axes()
            .level_curves(region.trace(|x| objective(x, false).value)),
    };
    obs.show(config)?;

    Ok(())
}

fn usage(message: &str) -> ! {
    eprintln!("{message}");
    eprintln!("Usage: plot [sphere|axis|rotated|rosenbrock|exp] [history|path]");
    std::process::exit(1);
}

/// Runs one method and records its trajectory into trace `slot`.
#[allow(clippy::cast_precision_loss)]
fn run(
    objective: Objective2,
    x0: [f64; 2],
    method: Method,
    slot: usize,
    view: View,
    obs: &mut PlotObserver<2>,
) -> Result<line_search::Solution<2>, Box<dyn Error>> {
    let config = Config::new(method, 10_000, 1e-8, 1e-12)?;

    let solution = line_search::minimize(&objective, x0, &config, |event: &Event<'_, 2>| {
        if matches!(event, Event::Converged { .. }) {
            return None;
        }
        let record = event.record();
        let (x, y) = match view {
            View::History => (record.iter as f64, record.value),
            View::Path => (record.x[0], record.x[1]),
        };
        let mut traces = [None; 2];
        traces[slot] = Some(y);
        obs.record(x, traces);
        None
    })?;

    Ok(solution)
}

// --- Objectives --------------------------------------------------------------

/// xᵀ·Q·x for a symmetric Q.
fn quadratic(q: [[f64; 2]; 2], x: &[f64; 2], need_hessian: bool) -> Evaluation<2> {
    let qx = [
        q[0][0] * x[0] + q[0][1] * x[1],
        q[1][0] * x[0] + q[1][1] * x[1],
    ];
    let eval = Evaluation::new(x[0] * qx[0] + x[1] * qx[1], [2.0 * qx[0], 2.0 * qx[1]]);
    if need_hessian {
        eval.with_hessian(q.map(|row| row.map(|v| 2.0 * v)))
    } else {
        eval
    }
}

/// Wᵀ·diag(100, 1)·W with W a 30° rotation.
fn rotated() -> [[f64; 2]; 2] {
    let (s, c) = (0.5, 3.0_f64.sqrt() / 2.0);
    [
        [100.0 * c * c + s * s, -99.0 * c * s],
        [-99.0 * c * s, 100.0 * s * s + c * c],
    ]
}

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

fn exp_sum(x: &[f64; 2], need_hessian: bool) -> Evaluation<2> {
    let [a, b] = *x;
    let up = (a + 3.0 * b - 0.1).exp();
    let down = (a - 3.0 * b - 0.1).exp();
    let back = (-a - 0.1).exp();

    let eval = Evaluation::new(up + down + back, [up + down - back, 3.0 * (up - down)]);
    if need_hessian {
        eval.with_hessian([
            [up + down + back, 3.0 * (up - down)],
            [3.0 * (up - down), 9.0 * (up + down)],
        ])
    } else {
        eval
    }
}
