
use approx::assert_relative_eq;
use thiserror::Error;

use descent_core::{Evaluation, Objective};

use super::{
    Action, Config, Error, Event, Method, Solution, Status, minimize, minimize_unobserved,
};

use fixtures::{ExpSum, Linear, Quadratic, Rosenbrock};

fn config(method: Method, max_iters: usize) -> Config {
    Config::new(method, max_iters, 1e-8, 1e-12).unwrap()
}

fn assert_monotone(solution: &Solution<2>) {
    let values: Vec<f64> = solution.trajectory.values().collect();
    for pair in values.windows(2) {
        assert!(pair[1] <= pair[0], "objective increased: {pair:?}");
    }
}

#[test]
fn gradient_descent_minimizes_sphere() {
    let solution =
        minimize_unobserved(&Quadratic::sphere(), [1.0, 1.0], &config(Method::GradientDescent, 100))
            .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(solution.x[1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(solution.value, 0.0, epsilon = 1e-12);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.trajectory.len(), 2);
}

#[test]
fn newton_converges_after_one_step_on_quadratics() {
    for quadratic in [
        Quadratic::sphere(),
        Quadratic::axis_aligned(),
        Quadratic::rotated(),
    ] {
        let solution =
            minimize_unobserved(&quadratic, [1.0, 1.0], &config(Method::Newton, 100)).unwrap();

        assert!(solution.is_converged());
        assert_eq!(solution.trajectory.len(), 2);
        assert_eq!(solution.iters, 2);
        assert_relative_eq!(solution.x[0], 0.0, epsilon = 1e-10);
        assert_relative_eq!(solution.x[1], 0.0, epsilon = 1e-10);
    }
}

#[test]
fn gradient_descent_never_increases_objective() {
    for quadratic in [Quadratic::axis_aligned(), Quadratic::rotated()] {
        let solution = minimize_unobserved(
            &quadratic,
            [1.0, 1.0],
            &config(Method::GradientDescent, 100),
        )
        .unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 100);
        assert_eq!(solution.trajectory.len(), 101);
        assert_monotone(&solution);
    }
}

#[test]
fn trajectory_values_match_objective() {
    let solution =
        minimize_unobserved(&Rosenbrock, [-1.0, 2.0], &config(Method::GradientDescent, 10))
            .unwrap();

    for (i, record) in solution.trajectory.records().iter().enumerate() {
        let expected = Rosenbrock.evaluate(&record.x, false).unwrap().value;
        assert_eq!(record.iter, i);
        assert_relative_eq!(record.value, expected);
    }
}

#[test]
fn rosenbrock_gradient_descent_hits_iteration_limit() {
    let solution =
        minimize_unobserved(&Rosenbrock, [-1.0, 2.0], &config(Method::GradientDescent, 10))
            .unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.is_converged());
    assert_eq!(solution.trajectory.len(), 11);
    assert_relative_eq!(solution.trajectory.records()[0].value, 104.0);

    let last = solution.trajectory.last().unwrap();
    assert_eq!(solution.x, last.x);
    assert_relative_eq!(solution.value, last.value);
    assert_monotone(&solution);
}

#[test]
fn rosenbrock_gradient_descent_converges_with_enough_iterations() {
    let solution = minimize_unobserved(
        &Rosenbrock,
        [-1.0, 2.0],
        &config(Method::GradientDescent, 10_000),
    )
    .unwrap();

    assert!(solution.is_converged());
    assert!(solution.iters > 1000);
    assert_relative_eq!(solution.x[0], 1.0, epsilon = 0.05);
    assert_relative_eq!(solution.x[1], 1.0, epsilon = 0.05);
}

#[test]
fn rosenbrock_newton_converges() {
    let solution =
        minimize_unobserved(&Rosenbrock, [-1.0, 2.0], &config(Method::Newton, 100)).unwrap();

    assert!(solution.is_converged());
    assert!(solution.iters < 100);
    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-3);
    assert_relative_eq!(solution.x[1], 1.0, epsilon = 1e-3);
}

#[test]
fn exp_sum_converges_with_both_methods() {
    let [x_star, y_star] = ExpSum::minimizer();

    for method in [Method::GradientDescent, Method::Newton] {
        let solution = minimize_unobserved(&ExpSum, [1.0, 1.0], &config(method, 100)).unwrap();

        assert!(solution.is_converged(), "{method} did not converge");
        assert_relative_eq!(solution.x[0], x_star, epsilon = 1e-3);
        assert_relative_eq!(solution.x[1], y_star, epsilon = 1e-3);
        assert_relative_eq!(solution.value, ExpSum::minimum(), epsilon = 1e-6);
    }
}

#[test]
fn newton_fails_on_zero_hessian() {
    let linear = Linear { a: [5.0, 2.0] };
    let result = minimize_unobserved(&linear, [1.0, 1.0], &config(Method::Newton, 100));

    assert!(matches!(result, Err(Error::SingularHessian { iter: 1 })));
}

#[test]
fn gradient_descent_runs_down_unbounded_objective() {
    let linear = Linear { a: [5.0, 2.0] };
    let solution =
        minimize_unobserved(&linear, [1.0, 1.0], &config(Method::GradientDescent, 100)).unwrap();

    // Every full step is accepted, so x moves by −a each iteration.
    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.trajectory.len(), 101);
    assert_relative_eq!(solution.x[0], -499.0, epsilon = 1e-9);
    assert_relative_eq!(solution.x[1], -199.0, epsilon = 1e-9);
    assert_monotone(&solution);
}

#[test]
fn zero_iterations_returns_start() {
    let solution =
        minimize_unobserved(&Rosenbrock, [-1.0, 2.0], &config(Method::Newton, 0)).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.x, [-1.0, 2.0]);
    assert_relative_eq!(solution.value, 104.0);
    assert_eq!(solution.trajectory.len(), 1);
}

#[test]
fn repeated_runs_are_independent() {
    let config = config(Method::GradientDescent, 10);

    let first = minimize_unobserved(&Rosenbrock, [-1.0, 2.0], &config).unwrap();
    let second = minimize_unobserved(&Rosenbrock, [-1.0, 2.0], &config).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.trajectory.len(), 11);
}

#[test]
fn observer_sees_start_steps_and_convergence() {
    let mut seen = Vec::new();
    let observer = |event: &Event<'_, 2>| {
        let kind = match event {
            Event::Started { .. } => "started",
            Event::Accepted { step_size, .. } => {
                assert_relative_eq!(*step_size, 0.5);
                "accepted"
            }
            Event::Converged { candidate, .. } => {
                assert_eq!(candidate.x, [0.0, 0.0]);
                "converged"
            }
        };
        seen.push((kind, event.iter(), event.record().x));
        None
    };

    let solution = minimize(
        &Quadratic::sphere(),
        [1.0, 1.0],
        &config(Method::GradientDescent, 100),
        observer,
    )
    .unwrap();

    assert!(solution.is_converged());
    assert_eq!(
        seen,
        [
            ("started", 0, [1.0, 1.0]),
            ("accepted", 1, [0.0, 0.0]),
            ("converged", 2, [0.0, 0.0]),
        ]
    );
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event<'_, 2>| {
        if event.iter() == 3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = minimize(
        &Rosenbrock,
        [-1.0, 2.0],
        &config(Method::GradientDescent, 100),
        observer,
    )
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.trajectory.len(), 4);
    assert_eq!(Some(&solution.x), solution.trajectory.points().last());
}

#[test]
fn observer_can_stop_before_first_step() {
    let observer = |_event: &Event<'_, 2>| Some(Action::StopEarly);

    let solution = minimize(&Rosenbrock, [-1.0, 2.0], &config(Method::Newton, 100), observer)
        .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.trajectory.len(), 1);
}

#[derive(Debug, Error)]
#[error("x = {0} is outside the domain")]
struct OutOfDomain(f64);

/// f(x) = (x − 2)², defined only for x ≤ 2.5.
struct Bounded;

impl Objective<1> for Bounded {
    type Error = OutOfDomain;

    fn evaluate(&self, x: &[f64; 1], _need_hessian: bool) -> Result<Evaluation<1>, Self::Error> {
        if x[0] > 2.5 {
            return Err(OutOfDomain(x[0]));
        }
        Ok(Evaluation::new((x[0] - 2.0).powi(2), [2.0 * (x[0] - 2.0)]))
    }
}

#[test]
fn objective_errors_propagate() {
    // The first trial step from x = 1 lands at x = 3.
    let result = minimize_unobserved(&Bounded, [1.0], &config(Method::GradientDescent, 10));

    let Err(Error::Objective { iter, source }) = result else {
        panic!("expected an objective error");
    };
    assert_eq!(iter, 1);
    assert_eq!(source.to_string(), "x = 3 is outside the domain");
}

#[test]
fn non_finite_start_is_an_error() {
    let objective = |_x: &[f64; 1], _need_hessian: bool| Evaluation::new(f64::NAN, [0.0]);
    let result = minimize_unobserved(&objective, [0.0], &config(Method::GradientDescent, 10));

    assert!(matches!(result, Err(Error::NonFiniteValue { iter: 0, .. })));
}

#[test]
fn newton_requires_hessian() {
    let objective = |x: &[f64; 1], _need_hessian: bool| Evaluation::new(x[0] * x[0], [2.0 * x[0]]);
    let result = minimize_unobserved(&objective, [1.0], &config(Method::Newton, 10));

    assert!(matches!(result, Err(Error::MissingHessian { iter: 0 })));
}

#[test]
fn line_search_gives_up_when_every_trial_is_nan() {
    let objective = |x: &[f64; 1], _need_hessian: bool| {
        let value = if x[0] == 1.0 { 1.0 } else { f64::NAN };
        Evaluation::new(value, [2.0])
    };
    let result = minimize_unobserved(&objective, [1.0], &config(Method::GradientDescent, 10));

    assert!(matches!(
        result,
        Err(Error::LineSearch {
            iter: 1,
            backtracks: 50,
            ..
        })
    ));
}
