//! Dense vector and matrix helpers over fixed-size arrays.

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

/// Returns `x + step_size · direction`.
pub(super) fn advance<const N: usize>(
    x: &[f64; N],
    direction: &[f64; N],
    step_size: f64,
) -> [f64; N] {
    std::array::from_fn(|i| x[i] + step_size * direction[i])
}

/// Returns the inner product `⟨a, b⟩`.
pub(super) fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    SVector::<f64, N>::from(*a).dot(&SVector::<f64, N>::from(*b))
}

/// Returns the Euclidean distance between `a` and `b`.
pub(super) fn distance<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    (SVector::<f64, N>::from(*a) - SVector::<f64, N>::from(*b)).norm()
}

/// Returns `vᵀ·M·v` for a row-major matrix `M`.
pub(super) fn quadratic_form<const N: usize>(matrix: &[[f64; N]; N], v: &[f64; N]) -> f64 {
    let m = SMatrix::<f64, N, N>::from_fn(|i, j| matrix[i][j]);
    let v = SVector::<f64, N>::from(*v);
    v.dot(&(m * v))
}

/// Solves `M·x = rhs` by LU decomposition.
///
/// Returns `None` if `M` is singular or the solution is not finite.
pub(super) fn solve<const N: usize>(matrix: &[[f64; N]; N], rhs: &[f64; N]) -> Option<[f64; N]> {
    let m = DMatrix::from_fn(N, N, |i, j| matrix[i][j]);
    let b = DVector::from_column_slice(rhs);
    let x = m.lu().solve(&b)?;

    if x.iter().all(|v| v.is_finite()) {
        Some(std::array::from_fn(|i| x[i]))
    } else {
        None
    }
}
