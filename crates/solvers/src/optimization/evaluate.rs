use thiserror::Error;

use descent_core::{Evaluation, Objective};

/// Errors that can occur when evaluating an objective.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The objective call failed.
    #[error("objective call failed")]
    Objective(#[source] E),

    /// The objective value is NaN or infinite.
    #[error("objective value is not finite: {0}")]
    NonFiniteValue(f64),

    /// A Hessian was requested but not returned.
    #[error("objective did not return a Hessian")]
    MissingHessian,
}

/// Evaluates the objective at `x` and checks the result.
///
/// A Hessian is required in the result exactly when `need_hessian` is `true`.
///
/// # Errors
///
/// Returns an error if the objective fails, its value is not finite, or a
/// requested Hessian is missing.
pub fn evaluate<O, const N: usize>(
    objective: &O,
    x: &[f64; N],
    need_hessian: bool,
) -> Result<Evaluation<N>, EvalError<O::Error>>
where
    O: Objective<N>,
{
    let eval = objective
        .evaluate(x, need_hessian)
        .map_err(EvalError::Objective)?;

    if !eval.value.is_finite() {
        return Err(EvalError::NonFiniteValue(eval.value));
    }
    if need_hessian && eval.hessian.is_none() {
        return Err(EvalError::MissingHessian);
    }

    Ok(eval)
}
