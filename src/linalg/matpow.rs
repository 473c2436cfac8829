//! linalg::matpow — integer powers of a square matrix.
//!
//! `X^k` by binary exponentiation in `O(log |k|)` products. Negative powers
//! invert `X` through [`solve`](crate::linalg::solve::solve) first and raise
//! the inverse to `|k|`; `X^0` is the identity for every `X`, singular or not.
use crate::linalg::{
    core::dense::identity,
    errors::LinalgResult,
    solve::solve,
    validation::validate_square,
};
use ndarray::{Array2, ArrayBase, Data, Ix2};

/// Compute `X^k`.
///
/// Parameters
/// ----------
/// - `x`: `&ArrayBase<S, Ix2>`
///   Square matrix, `n ≥ 1`.
/// - `k`: `i64`
///   Exponent; negative values use the inverse of `x`.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` / `LinalgError::NotSquare`
///   If `x` is not a non-empty square matrix.
/// - Any error of [`solve`] for `k < 0`, unchanged (notably
///   `LinalgError::SingularMatrix` for singular `x`).
///
/// Notes
/// -----
/// - The accumulator starts at the base and the bits of `|k| − 1` are
///   consumed from least to most significant: the accumulator picks up the
///   running square on each set bit, and the square is updated only while
///   bits remain.
/// - Entries are not checked for finiteness when `k ≥ 0`; non-finite values
///   propagate through the products.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_matexp::linalg::matpow::matpow;
/// let x = array![[1.0, 1.0], [0.0, 1.0]];
/// assert_eq!(matpow(&x, 5).unwrap(), array![[1.0, 5.0], [0.0, 1.0]]);
/// ```
pub fn matpow<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix2>, k: i64) -> LinalgResult<Array2<f64>> {
    let x = x.view();
    let n = validate_square(&x, "X")?;
    if k == 0 {
        return Ok(identity(n));
    }

    let mut base = if k < 0 { solve(&x, &identity(n))? } else { x.to_owned() };
    let mut acc = base.clone();
    let mut bits = k.unsigned_abs() - 1;
    while bits > 0 {
        if bits & 1 == 1 {
            acc = acc.dot(&base);
        }
        bits >>= 1;
        if bits > 0 {
            base = base.dot(&base);
        }
    }
    Ok(acc)
}
