use tracing::{debug, trace};

use super::{ConfigError, Error};

/// Parameters of the backtracking line search.
///
/// Starting from `initial_step`, the step size is multiplied by `contraction`
/// until the trial point satisfies the sufficient-decrease condition
///
/// ```text
/// f(x + α·d) ≤ f(x) + c·α·⟨−d, d⟩
/// ```
///
/// where `c` is `sufficient_decrease`. The search gives up after
/// `max_backtracks` contractions. Trial values that are NaN or infinite
/// always fail the condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backtracking {
    sufficient_decrease: f64,
    contraction: f64,
    initial_step: f64,
    max_backtracks: usize,
}

impl Default for Backtracking {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.01, 0.5, 1.0, 50).unwrap()
    }
}

impl Backtracking {
    /// Creates validated backtracking parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `sufficient_decrease` or `contraction` is outside
    /// the open interval (0, 1), or if `initial_step` is not finite and positive.
    pub fn new(
        sufficient_decrease: f64,
        contraction: f64,
        initial_step: f64,
        max_backtracks: usize,
    ) -> Result<Self, ConfigError> {
        if !(sufficient_decrease > 0.0 && sufficient_decrease < 1.0) {
            return Err(ConfigError::SufficientDecrease);
        }
        if !(contraction > 0.0 && contraction < 1.0) {
            return Err(ConfigError::Contraction);
        }
        if !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }

        Ok(Self {
            sufficient_decrease,
            contraction,
            initial_step,
            max_backtracks,
        })
    }

    /// Returns the sufficient-decrease constant `c`.
    #[must_use]
    pub fn sufficient_decrease(&self) -> f64 {
        self.sufficient_decrease
    }

    /// Returns the factor applied to the step size after each rejection.
    #[must_use]
    pub fn contraction(&self) -> f64 {
        self.contraction
    }

    /// Returns the first step size tried.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the maximum number of contractions before giving up.
    #[must_use]
    pub fn max_backtracks(&self) -> usize {
        self.max_backtracks
    }

    /// Finds the first step size that satisfies the sufficient-decrease test.
    ///
    /// `value` is the objective at the current point and `slope` the
    /// directional term multiplying `c·α`. `value_at` returns the objective
    /// at the trial point for a given step size.
    pub(super) fn step_size<F>(
        &self,
        iter: usize,
        value: f64,
        slope: f64,
        mut value_at: F,
    ) -> Result<f64, Error>
    where
        F: FnMut(f64) -> Result<f64, Error>,
    {
        let mut step_size = self.initial_step;
        let mut backtracks = 0;

        loop {
            let trial = value_at(step_size)?;
            if self.is_sufficient(value, slope, step_size, trial) {
                return Ok(step_size);
            }

            if backtracks == self.max_backtracks {
                debug!(iter, step_size, backtracks, "line search exhausted");
                return Err(Error::LineSearch {
                    iter,
                    step_size,
                    backtracks,
                });
            }

            trace!(iter, step_size, trial, "step rejected");
            step_size *= self.contraction;
            backtracks += 1;
        }
    }

    fn is_sufficient(&self, value: f64, slope: f64, step_size: f64, trial: f64) -> bool {
        trial.is_finite() && trial <= value + self.sufficient_decrease * step_size * slope
    }
}
