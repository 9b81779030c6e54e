use crate::optimization::EvalError;

/// Errors that can occur during a line-search minimization.
///
/// `iter` is the iteration in progress when the failure happened, with `0`
/// referring to the evaluation of the starting point.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("objective error at iteration {iter}: {source}")]
    Objective {
        iter: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("objective value {value} is not finite at iteration {iter}")]
    NonFiniteValue { iter: usize, value: f64 },

    #[error("objective returned no Hessian at iteration {iter}")]
    MissingHessian { iter: usize },

    #[error("Hessian is singular at iteration {iter}")]
    SingularHessian { iter: usize },

    #[error("no acceptable step at iteration {iter} after {backtracks} backtracks")]
    LineSearch {
        iter: usize,
        step_size: f64,
        backtracks: usize,
    },
}

impl Error {
    pub(super) fn from_eval<E>(error: EvalError<E>, iter: usize) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match error {
            EvalError::Objective(source) => Self::Objective {
                iter,
                source: Box::new(source),
            },
            EvalError::NonFiniteValue(value) => Self::NonFiniteValue { iter, value },
            EvalError::MissingHessian => Self::MissingHessian { iter },
        }
    }
}
