use std::convert::Infallible;

/// The value, gradient, and optional Hessian of an objective at a point.
///
/// The Hessian is stored row-major and is only expected when the caller
/// asked for second-order information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<const N: usize> {
    /// Objective value.
    pub value: f64,

    /// Gradient of the objective.
    pub gradient: [f64; N],

    /// Hessian of the objective, if computed.
    pub hessian: Option<[[f64; N]; N]>,
}

impl<const N: usize> Evaluation<N> {
    /// Creates a first-order evaluation with no Hessian.
    #[must_use]
    pub fn new(value: f64, gradient: [f64; N]) -> Self {
        Self {
            value,
            gradient,
            hessian: None,
        }
    }

    /// Attaches a Hessian to this evaluation.
    #[must_use]
    pub fn with_hessian(mut self, hessian: [[f64; N]; N]) -> Self {
        self.hessian = Some(hessian);
        self
    }
}

/// A scalar function of `N` real variables that can be minimized.
///
/// Implementations return the objective value and gradient at `x`. When
/// `need_hessian` is `true` they must also return the Hessian; when it is
/// `false` the Hessian may be omitted and is never read.
///
/// Evaluation must be deterministic. Solvers call it for trial points during
/// a line search as well as for every accepted point.
///
/// Closures of the form `Fn(&[f64; N], bool) -> Evaluation<N>` implement this
/// trait with an [`Infallible`] error.
///
/// # Example
///
/// ```
/// use descent_core::{Evaluation, Objective};
///
/// let sphere = |x: &[f64; 2], need_hessian: bool| {
///     let eval = Evaluation::new(x[0] * x[0] + x[1] * x[1], [2.0 * x[0], 2.0 * x[1]]);
///     if need_hessian {
///         eval.with_hessian([[2.0, 0.0], [0.0, 2.0]])
///     } else {
///         eval
///     }
/// };
///
/// let eval = sphere.evaluate(&[1.0, 2.0], false).unwrap();
/// assert_eq!(eval.value, 5.0);
/// assert!(eval.hessian.is_none());
/// ```
pub trait Objective<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the objective cannot be computed at `x`.
    fn evaluate(&self, x: &[f64; N], need_hessian: bool) -> Result<Evaluation<N>, Self::Error>;
}

impl<const N: usize, F> Objective<N> for F
where
    F: Fn(&[f64; N], bool) -> Evaluation<N>,
{
    type Error = Infallible;

    fn evaluate(&self, x: &[f64; N], need_hessian: bool) -> Result<Evaluation<N>, Self::Error> {
        Ok(self(x, need_hessian))
    }
}
