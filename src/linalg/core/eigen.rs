//! linalg::core::eigen — eigenvalues and right eigenvectors of a real matrix.
//!
//! Purpose
//! -------
//! Produce the full eigen-pair set of a general real square matrix as
//! complex arrays, which the exact exponential path consumes.
//!
//! Key behaviors
//! -------------
//! - Copy the input into a `faer::Mat` and run `eigen_from_real`, which
//!   reduces to real Schur form and back-substitutes the eigenvectors.
//! - Return eigenvalues and unit-norm eigenvectors in matching column order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Complex eigenvalues come in adjacent conjugate pairs whose eigenvector
//!   columns are conjugates of each other.
//! - Defective inputs yield nearly parallel (or non-finite) columns; the
//!   caller is responsible for testing invertibility of the eigenvector
//!   matrix.
//!
//! Conventions
//! -----------
//! - Non-convergence of the eigensolver surfaces as
//!   [`LinalgError::LinearAlgebraFailure`] with routine `"evd"` and the
//!   matrix order as `status`.
use crate::linalg::errors::{LinalgError, LinalgResult};
use faer::Mat;
use ndarray::{Array1, Array2, ArrayView2};
use num_complex::Complex64;

/// RealEigen — eigen-pair set of a real matrix.
///
/// Fields
/// ------
/// - `values`: `Array1<Complex64>`
///   The `n` eigenvalues.
/// - `vectors`: `Array2<Complex64>`
///   `n×n` right eigenvectors; column `k` belongs to `values[k]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RealEigen {
    pub values: Array1<Complex64>,
    pub vectors: Array2<Complex64>,
}

/// Compute eigenvalues and right eigenvectors of `a`.
///
/// Parameters
/// ----------
/// - `a`: `&ArrayView2<f64>`
///   Square matrix of order `n ≥ 1` with finite entries.
///
/// Returns
/// -------
/// `LinalgResult<RealEigen>`
///
/// Errors
/// ------
/// - `LinalgError::LinearAlgebraFailure { routine: "evd", status: n }`
///   If the eigensolver does not converge.
pub fn real_eigen(a: &ArrayView2<'_, f64>) -> LinalgResult<RealEigen> {
    let n = a.nrows();
    let m = Mat::<f64>::from_fn(n, n, |i, j| a[[i, j]]);
    let evd = m
        .eigen()
        .map_err(|_| LinalgError::LinearAlgebraFailure { routine: "evd", status: n as i64 })?;

    let u = evd.U().to_owned();
    let s = evd.S().column_vector();
    let values = Array1::from_shape_fn(n, |k| s[k]);
    let vectors = Array2::from_shape_fn((n, n), |(i, j)| u[(i, j)]);
    Ok(RealEigen { values, vectors })
}
