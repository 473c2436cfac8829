//! linalg::expmprod — bilinear form `x·exp(M)·y`.
//!
//! Computes `E = exp(M)` through the exponential engine, then `t = x·E`, and
//! returns `t·y`. Engine failures are propagated unchanged; every
//! intermediate is owned by the call.
use crate::linalg::{
    core::options::ExpmOptions,
    errors::LinalgResult,
    expm::expm_with_options,
    validation::{validate_square, validate_vector},
};
use ndarray::{ArrayBase, Data, Ix1, Ix2};

/// Evaluate `x·exp(M)·y` with default engine options.
///
/// Parameters
/// ----------
/// - `x`: `&ArrayBase<S, Ix1>`
///   Row vector of length `n`.
/// - `m`: `&ArrayBase<T, Ix2>`
///   Square matrix, `n×n`.
/// - `y`: `&ArrayBase<U, Ix1>`
///   Column vector of length `n`.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` / `LinalgError::NotSquare`
///   If `M` is not a non-empty square matrix.
/// - `LinalgError::DimensionMismatch`
///   If `x` or `y` does not have length `n`.
/// - `LinalgError::NonFiniteEntry`
///   If any operand contains NaN or ±∞.
/// - Any error of [`expm`](crate::linalg::expm::expm), unchanged.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_matexp::linalg::expmprod::expmprod;
/// let m = array![[0.0, 1.0], [0.0, 0.0]];
/// let v = expmprod(&array![1.0, 0.0], &m, &array![0.0, 1.0]).unwrap();
/// assert!((v - 1.0).abs() < 1e-14);
/// ```
pub fn expmprod<S, T, U>(
    x: &ArrayBase<S, Ix1>, m: &ArrayBase<T, Ix2>, y: &ArrayBase<U, Ix1>,
) -> LinalgResult<f64>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    U: Data<Elem = f64>,
{
    expmprod_with_options(x, m, y, &ExpmOptions::default())
}

/// Evaluate `x·exp(M)·y` with explicit engine options.
pub fn expmprod_with_options<S, T, U>(
    x: &ArrayBase<S, Ix1>, m: &ArrayBase<T, Ix2>, y: &ArrayBase<U, Ix1>, opts: &ExpmOptions,
) -> LinalgResult<f64>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    U: Data<Elem = f64>,
{
    let m = m.view();
    let n = validate_square(&m, "M")?;
    validate_vector(&x.view(), n, "x")?;
    validate_vector(&y.view(), n, "y")?;

    let e = expm_with_options(&m, opts)?;
    let t = x.dot(&e);
    Ok(t.dot(y))
}
