//! linalg::core::lu — LU factorization with partial pivoting.
//!
//! Purpose
//! -------
//! Provide the single factorization primitive used across the crate: the
//! public linear solver, negative matrix powers, the Pade denominator solve in
//! the exponential engine, and the complex eigenvector-matrix inversion of the
//! exact exponential path.
//!
//! Key behaviors
//! -------------
//! - [`lu_factor`] copies the input into a `nalgebra::DMatrix` and factors it
//!   with `nalgebra::linalg::LU` (`P·A = L·U`, row pivoting on the entry of
//!   largest modulus in each column).
//! - [`LuFactors::solve_in_place`] substitutes every column of a right-hand
//!   side through the factors and writes the solution back.
//! - [`lu_solve`] composes both steps (the `gesv` driver).
//!
//! Invariants & assumptions
//! ------------------------
//! - A factorization whose `U` has an **exactly zero** diagonal entry is
//!   reported as [`LinalgError::SingularMatrix`] with the 0-based column of
//!   the first such entry. Tiny but non-zero pivots are accepted; detecting
//!   ill-conditioning is left to callers.
//! - Illegal arguments (non-square matrix, right-hand side of the wrong
//!   height) are reported as [`LinalgError::InvalidFactorInput`]; public
//!   callers validate dimensions first, so reaching this signals a logic bug.
//!
//! Conventions
//! -----------
//! - Generic over [`LuScalar`] so the same code serves `f64` and
//!   `Complex64`.
use crate::linalg::errors::{LinalgError, LinalgResult};
use nalgebra::{ComplexField, DMatrix, Dyn, linalg::LU};
use ndarray::Array2;
use num_complex::Complex64;

/// Scalar types accepted by the LU kernels.
pub trait LuScalar: ComplexField<RealField = f64> + Copy {}

impl LuScalar for f64 {}

impl LuScalar for Complex64 {}

/// LuFactors — nalgebra LU factors of a square matrix of known order.
#[derive(Debug, Clone)]
pub struct LuFactors<T: LuScalar> {
    lu: LU<T, Dyn, Dyn>,
    order: usize,
}

/// Factor a square matrix as `P·A = L·U`.
///
/// Parameters
/// ----------
/// - `a`: `Array2<T>`
///   Square matrix; it is copied into nalgebra storage and dropped.
///
/// Returns
/// -------
/// `LinalgResult<LuFactors<T>>`
///
/// Errors
/// ------
/// - `LinalgError::InvalidFactorInput { routine: "getrf", arg: 1 }`
///   If `a` is not square.
/// - `LinalgError::SingularMatrix { pivot }`
///   If `U[pivot, pivot]` is exactly zero.
pub fn lu_factor<T: LuScalar>(a: Array2<T>) -> LinalgResult<LuFactors<T>> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(LinalgError::InvalidFactorInput { routine: "getrf", arg: 1 });
    }
    let n = rows;
    let lu = LU::new(to_dmatrix(&a));
    if let Some(pivot) = lu.u().diagonal().iter().position(|&d| d.modulus() == 0.0) {
        return Err(LinalgError::SingularMatrix { pivot });
    }
    Ok(LuFactors { lu, order: n })
}

impl<T: LuScalar> LuFactors<T> {
    /// Order of the factored matrix.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Overwrite `b` with the solution `X` of `A·X = B`.
    ///
    /// Errors
    /// ------
    /// - `LinalgError::InvalidFactorInput { routine: "getrs", arg: 2 }`
    ///   If `b.nrows()` differs from the order of the factorization.
    pub fn solve_in_place(&self, b: &mut Array2<T>) -> LinalgResult<()> {
        if b.nrows() != self.order {
            return Err(LinalgError::InvalidFactorInput { routine: "getrs", arg: 2 });
        }
        let mut x = to_dmatrix(b);
        if !self.lu.solve_mut(&mut x) {
            // Unreachable after `lu_factor` screened the diagonal of U.
            return Err(LinalgError::SingularMatrix { pivot: self.order.saturating_sub(1) });
        }
        b.indexed_iter_mut().for_each(|((i, j), v)| *v = x[(i, j)]);
        Ok(())
    }
}

/// Solve `A·X = B` by factoring `a` and substituting into `b`.
///
/// Both buffers are consumed; the returned matrix reuses the storage of `b`.
pub fn lu_solve<T: LuScalar>(a: Array2<T>, mut b: Array2<T>) -> LinalgResult<Array2<T>> {
    let factors = lu_factor(a)?;
    factors.solve_in_place(&mut b)?;
    Ok(b)
}

fn to_dmatrix<T: LuScalar>(a: &Array2<T>) -> DMatrix<T> {
    DMatrix::from_fn(a.nrows(), a.ncols(), |i, j| a[[i, j]])
}
