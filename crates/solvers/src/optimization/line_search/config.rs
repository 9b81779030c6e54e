use thiserror::Error;

use super::{Backtracking, Method};

/// Configuration for the line-search minimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    method: Method,
    max_iters: usize,
    objective_tol: f64,
    x_tol: f64,
    backtracking: Backtracking,
}

/// Errors that can occur when validating a line-search config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown method {0:?}, expected \"Gradient Descent\" or \"Newton\"")]
    UnknownMethod(String),

    #[error("objective_tol must be finite and positive")]
    ObjectiveTol,

    #[error("x_tol must be finite and positive")]
    XTol,

    #[error("sufficient_decrease must lie strictly between 0 and 1")]
    SufficientDecrease,

    #[error("contraction must lie strictly between 0 and 1")]
    Contraction,

    #[error("initial_step must be finite and positive")]
    InitialStep,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(Method::GradientDescent, 100, 1e-8, 1e-12).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances and default backtracking.
    ///
    /// The run converges when the method's objective test falls below
    /// `objective_tol` or the accepted step moves `x` by less than `x_tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is non-positive or non-finite.
    pub fn new(
        method: Method,
        max_iters: usize,
        objective_tol: f64,
        x_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !objective_tol.is_finite() || objective_tol <= 0.0 {
            return Err(ConfigError::ObjectiveTol);
        }
        if !x_tol.is_finite() || x_tol <= 0.0 {
            return Err(ConfigError::XTol);
        }

        Ok(Self {
            method,
            max_iters,
            objective_tol,
            x_tol,
            backtracking: Backtracking::default(),
        })
    }

    /// Replaces the backtracking parameters.
    #[must_use]
    pub fn with_backtracking(mut self, backtracking: Backtracking) -> Self {
        self.backtracking = backtracking;
        self
    }

    /// Returns the search-direction method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the objective tolerance.
    #[must_use]
    pub fn objective_tol(&self) -> f64 {
        self.objective_tol
    }

    /// Returns the step-length tolerance on `x`.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the backtracking line-search parameters.
    #[must_use]
    pub fn backtracking(&self) -> &Backtracking {
        &self.backtracking
    }
}
