//! linalg::core::balance — similarity permutation and diagonal scaling.
//!
//! Purpose
//! -------
//! Precondition a square matrix before the Pade approximation by (1)
//! permuting rows/columns symmetrically so that eigenvalues isolated by zero
//! structure move to the ends, and (2) rescaling row/column pairs by powers of
//! two so their norms become comparable. Both transforms are similarities, so
//! `exp` of the balanced matrix maps back to `exp` of the input exactly.
//!
//! Key behaviors
//! -------------
//! - [`permute_for_balance`] follows LAPACK `dgebal` with job `'P'` and
//!   returns a [`BalancePermutation`] recording `ilo`, `ihi` and the swaps.
//! - [`scale_for_balance`] follows `dgebal` with job `'S'` over the full
//!   index range and returns the scale vector.
//! - [`unbalance_scaling`] and [`BalancePermutation::apply_inverse`] undo the
//!   two transforms on a result matrix.
//!
//! Invariants & assumptions
//! ------------------------
//! - Scale factors are powers of two, so scaling and unscaling introduce no
//!   rounding error.
//! - After permutation, rows `> ihi` have zeros left of the diagonal and
//!   columns `< ilo` have zeros below the diagonal.
//!
//! Conventions
//! -----------
//! - All indices are 0-based; `ilo..=ihi` is the block left for scaling.
//! - `swaps[i]` for `i < ilo` or `i > ihi` names the row/column exchanged
//!   with `i` ("forward" swap list). Entries inside `ilo..=ihi` equal `i`.
use crate::linalg::errors::{LinalgError, LinalgResult};
use ndarray::{Array1, Array2};

const RADIX: f64 = 2.0;
const CONV_FACTOR: f64 = 0.95;

/// BalancePermutation — swap record emitted by [`permute_for_balance`].
///
/// Fields
/// ------
/// - `ilo`, `ihi`: `usize`
///   Inclusive bounds of the block that was not isolated.
/// - `swaps`: `Vec<usize>`
///   Forward swap list; see the module conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancePermutation {
    pub ilo: usize,
    pub ihi: usize,
    pub swaps: Vec<usize>,
}

impl BalancePermutation {
    /// Identity permutation of order `n` (`ilo = 0`, `ihi = n - 1`).
    pub fn identity(n: usize) -> Self {
        BalancePermutation { ilo: 0, ihi: n.saturating_sub(1), swaps: (0..n).collect() }
    }

    /// `true` when no row or column was isolated.
    pub fn is_identity(&self) -> bool {
        self.ilo == 0 && self.ihi + 1 == self.swaps.len()
    }

    /// Explicit index array `π` with `B[i][j] = A[π[i]][π[j]]`.
    ///
    /// Swaps are replayed in the order `dgebal` performed them: trailing
    /// positions from the last index down to `ihi + 1`, then leading positions
    /// `0..ilo`.
    pub fn index_array(&self) -> Vec<usize> {
        let n = self.swaps.len();
        let mut pi: Vec<usize> = (0..n).collect();
        for i in (self.ihi + 1..n).rev() {
            pi.swap(i, self.swaps[i]);
        }
        for i in 0..self.ilo {
            pi.swap(i, self.swaps[i]);
        }
        pi
    }

    /// Inverse of [`BalancePermutation::index_array`].
    pub fn inverse_index_array(&self) -> Vec<usize> {
        let pi = self.index_array();
        let mut inv = vec![0; pi.len()];
        for (i, &p) in pi.iter().enumerate() {
            inv[p] = i;
        }
        inv
    }

    /// Map a matrix computed in permuted coordinates back to the original
    /// ordering, permuting rows and columns symmetrically.
    pub fn apply_inverse(&self, z: &Array2<f64>) -> Array2<f64> {
        let inv = self.inverse_index_array();
        Array2::from_shape_fn(z.dim(), |(i, j)| z[[inv[i], inv[j]]])
    }
}

/// Exchange index `j` with index `m`: columns over rows `0..=l`, rows over
/// columns `k..n`. Entries outside those ranges are zero by construction.
fn exchange(a: &mut Array2<f64>, j: usize, m: usize, k: usize, l: usize) {
    if j == m {
        return;
    }
    let n = a.ncols();
    for i in 0..=l {
        a.swap([i, j], [i, m]);
    }
    for c in k..n {
        a.swap([j, c], [m, c]);
    }
}

/// Permute `a` in place to isolate eigenvalues (LAPACK `dgebal`, job `'P'`).
///
/// Parameters
/// ----------
/// - `a`: `&mut Array2<f64>`
///   Square, non-empty matrix; overwritten by `Pᵀ·A·P`.
///
/// Returns
/// -------
/// `BalancePermutation`
///   Bounds of the remaining block and the swap record.
pub fn permute_for_balance(a: &mut Array2<f64>) -> BalancePermutation {
    let n = a.nrows();
    let mut swaps: Vec<usize> = (0..n).collect();
    if n == 0 {
        return BalancePermutation { ilo: 0, ihi: 0, swaps };
    }
    let mut k = 0usize;
    let mut l = n - 1;

    // Rows with zero off-diagonal entries in 0..=l go to the bottom.
    loop {
        let isolated = (0..=l).rev().find(|&j| (0..=l).all(|i| i == j || a[[j, i]] == 0.0));
        match isolated {
            Some(j) => {
                swaps[l] = j;
                exchange(a, j, l, k, l);
                if l == 0 {
                    return BalancePermutation { ilo: 0, ihi: 0, swaps };
                }
                l -= 1;
            }
            None => break,
        }
    }

    // Columns with zero off-diagonal entries in k..=l go to the left.
    loop {
        let isolated = (k..=l).find(|&j| (k..=l).all(|i| i == j || a[[i, j]] == 0.0));
        match isolated {
            Some(j) => {
                swaps[k] = j;
                exchange(a, j, k, k, l);
                k += 1;
            }
            None => break,
        }
    }

    BalancePermutation { ilo: k, ihi: l, swaps }
}

/// Scale `a` in place by a diagonal similarity (LAPACK `dgebal`, job `'S'`).
///
/// Row `i` is divided and column `i` multiplied by `scale[i]`, so the
/// balanced matrix is `D⁻¹·A·D` with `D = diag(scale)`.
///
/// Errors
/// ------
/// - `LinalgError::LinearAlgebraFailure { routine: "gebal", status: -3 }`
///   If a NaN appears while searching for a scale factor.
pub fn scale_for_balance(a: &mut Array2<f64>) -> LinalgResult<Array1<f64>> {
    let n = a.nrows();
    let mut scale = Array1::<f64>::ones(n);
    let sfmin1 = f64::MIN_POSITIVE / f64::EPSILON;
    let sfmax1 = 1.0 / sfmin1;
    let sfmin2 = sfmin1 * RADIX;
    let sfmax2 = 1.0 / sfmin2;

    loop {
        let mut noconv = false;
        for i in 0..n {
            let mut c = a.column(i).iter().map(|v| v * v).sum::<f64>().sqrt();
            let mut r = a.row(i).iter().map(|v| v * v).sum::<f64>().sqrt();
            let mut ca = a.column(i).iter().fold(0.0_f64, |m, v| m.max(v.abs()));
            let mut ra = a.row(i).iter().fold(0.0_f64, |m, v| m.max(v.abs()));

            if c == 0.0 || r == 0.0 {
                continue;
            }
            let mut g = r / RADIX;
            let mut f: f64 = 1.0;
            let s = c + r;

            while c < g && f.max(c).max(ca) < sfmax2 && r.min(g).min(ra) > sfmin2 {
                if (c + f + ca + r + g + ra).is_nan() {
                    return Err(LinalgError::LinearAlgebraFailure { routine: "gebal", status: -3 });
                }
                f *= RADIX;
                c *= RADIX;
                ca *= RADIX;
                r /= RADIX;
                g /= RADIX;
                ra /= RADIX;
            }

            g = c / RADIX;
            while g >= r && r.max(ra) < sfmax2 && f.min(c).min(g).min(ca) > sfmin2 {
                f /= RADIX;
                c /= RADIX;
                g /= RADIX;
                ca /= RADIX;
                r *= RADIX;
                ra *= RADIX;
            }

            if c + r >= CONV_FACTOR * s {
                continue;
            }
            if f < 1.0 && scale[i] < 1.0 && f * scale[i] <= sfmin1 {
                continue;
            }
            if f > 1.0 && scale[i] > 1.0 && scale[i] >= sfmax1 / f {
                continue;
            }
            scale[i] *= f;
            noconv = true;
            a.row_mut(i).mapv_inplace(|v| v / f);
            a.column_mut(i).mapv_inplace(|v| v * f);
        }
        if !noconv {
            break;
        }
    }
    Ok(scale)
}

/// Undo [`scale_for_balance`] on a result: `z[i][j] *= scale[i] / scale[j]`.
pub fn unbalance_scaling(z: &mut Array2<f64>, scale: &Array1<f64>) {
    for ((i, j), v) in z.indexed_iter_mut() {
        *v *= scale[i] / scale[j];
    }
}
