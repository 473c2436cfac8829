//! linalg::validation — shape and finiteness checks for matrix operands.
//!
//! Purpose
//! -------
//! Centralize the input checks shared by the public operations so that every
//! entry point rejects malformed operands the same way, before any numerical
//! work or allocation of scratch buffers.
//!
//! Conventions
//! -----------
//! - Each helper receives the operand name as it appears in the public API
//!   (`"A"`, `"B"`, `"X"`, `"M"`, `"x"`, `"y"`) so error messages point at the
//!   offending argument.
//! - Helpers return [`LinalgResult`] and never panic.
use crate::linalg::errors::{LinalgError, LinalgResult};
use ndarray::{ArrayView1, ArrayView2};

/// Check that `a` is a non-empty square matrix and return its order `n`.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` if `a` has zero rows or columns.
/// - `LinalgError::NotSquare` if `a.nrows() != a.ncols()`.
pub fn validate_square(a: &ArrayView2<'_, f64>, name: &'static str) -> LinalgResult<usize> {
    let (rows, cols) = a.dim();
    if rows == 0 || cols == 0 {
        return Err(LinalgError::EmptyMatrix { name });
    }
    if rows != cols {
        return Err(LinalgError::NotSquare { name, rows, cols });
    }
    Ok(rows)
}

/// Check that the right-hand side `b` has `n` rows and at least one column,
/// returning its column count `p`.
///
/// Errors
/// ------
/// - `LinalgError::DimensionMismatch` if `b.nrows() != n`.
/// - `LinalgError::NoRightHandSide` if `b.ncols() == 0`.
pub fn validate_rhs(b: &ArrayView2<'_, f64>, n: usize) -> LinalgResult<usize> {
    if b.nrows() != n {
        return Err(LinalgError::DimensionMismatch { name: "B", expected: n, found: b.nrows() });
    }
    if b.ncols() == 0 {
        return Err(LinalgError::NoRightHandSide);
    }
    Ok(b.ncols())
}

/// Check that every entry of `a` is finite.
///
/// Errors
/// ------
/// - `LinalgError::NonFiniteEntry` naming the first offending `(row, col)`
///   in row-major order.
pub fn validate_finite_matrix(a: &ArrayView2<'_, f64>, name: &'static str) -> LinalgResult<()> {
    match a.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some(((row, col), &value)) => Err(LinalgError::NonFiniteEntry { name, row, col, value }),
        None => Ok(()),
    }
}

/// Check that `v` has length `n` and only finite entries.
///
/// Errors
/// ------
/// - `LinalgError::DimensionMismatch` if `v.len() != n`.
/// - `LinalgError::NonFiniteEntry` (with `row = 0`, `col = index`) for the
///   first non-finite entry.
pub fn validate_vector(v: &ArrayView1<'_, f64>, n: usize, name: &'static str) -> LinalgResult<()> {
    if v.len() != n {
        return Err(LinalgError::DimensionMismatch { name, expected: n, found: v.len() });
    }
    match v.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        Some((col, &value)) => Err(LinalgError::NonFiniteEntry { name, row: 0, col, value }),
        None => Ok(()),
    }
}
