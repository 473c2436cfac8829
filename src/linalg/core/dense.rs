//! Dense matrix helpers shared by the solver, power, and exponential code.
//!
//! Small, allocation-light utilities: identity construction, the ∞-norm and
//! 1-norm, and the structural tests used to skip balancing permutations and
//! the eigendecomposition.
use ndarray::{Array2, ArrayView2};
use num_complex::Complex64;

/// `n×n` identity matrix.
pub fn identity(n: usize) -> Array2<f64> {
    Array2::eye(n)
}

/// Infinity norm: maximum absolute row sum.
pub fn inf_norm(a: &ArrayView2<'_, f64>) -> f64 {
    a.rows().into_iter().map(|row| row.iter().map(|v| v.abs()).sum::<f64>()).fold(0.0, f64::max)
}

/// 1-norm of a complex matrix: maximum column sum of moduli.
pub fn one_norm_complex(a: &ArrayView2<'_, Complex64>) -> f64 {
    a.columns().into_iter().map(|col| col.iter().map(|z| z.norm()).sum::<f64>()).fold(0.0, f64::max)
}

/// `true` when every strictly-lower entry is exactly zero.
///
/// Stops at the first non-zero entry below the diagonal.
pub fn is_upper_triangular(a: &ArrayView2<'_, f64>) -> bool {
    let n = a.nrows();
    (1..n).all(|i| (0..i).all(|j| a[[i, j]] == 0.0))
}

/// `true` when every off-diagonal entry is exactly zero.
pub fn is_diagonal(a: &ArrayView2<'_, f64>) -> bool {
    a.indexed_iter().all(|((i, j), &v)| i == j || v == 0.0)
}
