use std::{fmt, str::FromStr};

use descent_core::Evaluation;

use super::{Config, ConfigError, Error, linalg};

/// The rule used to pick a search direction and test for convergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Steepest descent along the negative gradient.
    ///
    /// Converges when the objective changes by less than `objective_tol` or
    /// `x` moves by less than `x_tol` in one step.
    GradientDescent,

    /// Newton's method, solving `H·d = −g` for the direction.
    ///
    /// Converges when half the squared Newton decrement `dᵀ·H·d` falls below
    /// `objective_tol` or `x` moves by less than `x_tol` in one step. Fails
    /// with [`Error::SingularHessian`] when the system has no solution.
    Newton,
}

/// A proposed step, as seen by the convergence test.
pub(super) struct Step<'a, const N: usize> {
    pub(super) from: &'a [f64; N],
    pub(super) from_eval: &'a Evaluation<N>,
    pub(super) to: &'a [f64; N],
    pub(super) to_value: f64,
    pub(super) direction: &'a [f64; N],
}

impl Method {
    /// Returns the human-readable method name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GradientDescent => "Gradient Descent",
            Self::Newton => "Newton",
        }
    }

    /// Returns `true` if the method needs Hessians from the objective.
    #[must_use]
    pub fn needs_hessian(self) -> bool {
        matches!(self, Self::Newton)
    }

    /// Computes the search direction from the evaluation at the current point.
    pub(super) fn direction<const N: usize>(
        self,
        eval: &Evaluation<N>,
        iter: usize,
    ) -> Result<[f64; N], Error> {
        let descent = eval.gradient.map(|g| -g);
        match self {
            Self::GradientDescent => Ok(descent),
            Self::Newton => {
                let hessian = eval.hessian.ok_or(Error::MissingHessian { iter })?;
                linalg::solve(&hessian, &descent).ok_or(Error::SingularHessian { iter })
            }
        }
    }

    /// Tests whether `step` satisfies this method's convergence criteria.
    pub(super) fn is_converged<const N: usize>(self, step: &Step<'_, N>, config: &Config) -> bool {
        if linalg::distance(step.to, step.from) < config.x_tol() {
            return true;
        }

        match self {
            Self::GradientDescent => {
                (step.to_value - step.from_eval.value).abs() < config.objective_tol()
            }
            Self::Newton => step.from_eval.hessian.is_some_and(|hessian| {
                let decrement = linalg::quadratic_form(&hessian, step.direction);
                // A negative decrement has no square root and never converges.
                decrement >= 0.0 && 0.5 * decrement < config.objective_tol()
            }),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gradient Descent" => Ok(Self::GradientDescent),
            "Newton" => Ok(Self::Newton),
            other => Err(ConfigError::UnknownMethod(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn tight() -> Config {
        Config::new(Method::Newton, 100, 1e-8, 1e-12).unwrap()
    }

    #[test]
    fn parses_known_names() {
        assert_eq!("Gradient Descent".parse::<Method>(), Ok(Method::GradientDescent));
        assert_eq!("Newton".parse::<Method>(), Ok(Method::Newton));
        assert_eq!(Method::Newton.to_string(), "Newton");
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "BFGS".parse::<Method>(),
            Err(ConfigError::UnknownMethod("BFGS".into()))
        );
        assert_eq!(
            "newton".parse::<Method>(),
            Err(ConfigError::UnknownMethod("newton".into()))
        );
    }

    #[test]
    fn gradient_direction_is_negated_gradient() {
        let eval = Evaluation::new(1.0, [2.0, -4.0]);
        let d = Method::GradientDescent.direction(&eval, 1).unwrap();
        assert_eq!(d, [-2.0, 4.0]);
    }

    #[test]
    fn newton_direction_solves_hessian_system() {
        let eval = Evaluation::new(1.0, [2.0, 200.0]).with_hessian([[2.0, 0.0], [0.0, 200.0]]);
        let d = Method::Newton.direction(&eval, 1).unwrap();

        assert_relative_eq!(d[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(d[1], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn newton_direction_needs_nonsingular_hessian() {
        let missing = Evaluation::new(1.0, [1.0]);
        let singular = missing.with_hessian([[0.0]]);

        assert!(matches!(
            Method::Newton.direction(&missing, 3),
            Err(Error::MissingHessian { iter: 3 })
        ));
        assert!(matches!(
            Method::Newton.direction(&singular, 4),
            Err(Error::SingularHessian { iter: 4 })
        ));
    }

    #[test]
    fn newton_decrement_test() {
        let from_eval = Evaluation::new(1.0, [2.0]).with_hessian([[2.0]]);
        let small = [-1e-5];
        let large = [-1.0];

        // dᵀHd = 2e-10, half of which is below 1e-8.
        let converged = Step {
            from: &[1.0],
            from_eval: &from_eval,
            to: &[0.99999],
            to_value: 0.5,
            direction: &small,
        };
        // dᵀHd = 2.
        let pending = Step {
            direction: &large,
            ..converged
        };

        assert!(Method::Newton.is_converged(&converged, &tight()));
        assert!(!Method::Newton.is_converged(&pending, &tight()));
    }

    #[test]
    fn negative_decrement_never_converges_on_objective() {
        let from_eval = Evaluation::new(0.0, [1.0]).with_hessian([[-2.0]]);
        let step = Step {
            from: &[0.0],
            from_eval: &from_eval,
            to: &[1.0],
            to_value: 0.0,
            direction: &[-1e-6],
        };

        assert!(!Method::Newton.is_converged(&step, &tight()));
    }

    #[test]
    fn small_move_converges_either_method() {
        let from_eval = Evaluation::new(10.0, [1.0]).with_hessian([[1.0]]);
        let step = Step {
            from: &[1.0],
            from_eval: &from_eval,
            to: &[1.0],
            to_value: 5.0,
            direction: &[-100.0],
        };

        assert!(Method::GradientDescent.is_converged(&step, &tight()));
        assert!(Method::Newton.is_converged(&step, &tight()));
    }

    #[test]
    fn gradient_descent_objective_test() {
        let from_eval = Evaluation::new(1.0, [1.0]);
        let flat = Step {
            from: &[0.0],
            from_eval: &from_eval,
            to: &[1.0],
            to_value: 1.0 - 1e-9,
            direction: &[1.0],
        };
        let steep = Step {
            to_value: 0.5,
            ..flat
        };

        assert!(Method::GradientDescent.is_converged(&flat, &tight()));
        assert!(!Method::GradientDescent.is_converged(&steep, &tight()));
    }
}
