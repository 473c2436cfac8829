//! linalg::core::pade — (8, 8) Pade approximant of the matrix exponential.
//!
//! Purpose
//! -------
//! Evaluate `r(Z) = q(Z)⁻¹·p(Z)` for a preconditioned matrix `Z` with
//! `‖Z‖∞ < 1`, where `p(Z) = I + Σ cⱼ Zʲ` and `q(Z) = p(-Z)` use the fixed
//! coefficient table [`PADE_COEFFS`].
//!
//! Key behaviors
//! -------------
//! - [`PadeWorkspace`] owns the numerator, denominator and product buffers
//!   for a single evaluation; they are allocated once per call and dropped
//!   with the workspace.
//! - Both polynomials are accumulated Horner-style, reusing one product
//!   buffer through `ndarray::linalg::general_mat_mul`.
//! - The final solve `q(Z)·R = p(Z)` goes through the crate LU kernel.
//!
//! Conventions
//! -----------
//! - `PADE_COEFFS[j - 1]` is the coefficient of `Zʲ`, `j = 1..=8`.
use crate::linalg::{
    core::lu::lu_solve,
    errors::LinalgResult,
};
use ndarray::{Array2, ArrayView2, linalg::general_mat_mul};

/// Coefficients `c₁..c₈` of the (8, 8) Pade approximant to `exp`.
pub const PADE_COEFFS: [f64; 8] = [
    5.0000000000000000e-1,
    1.1666666666666667e-1,
    1.6666666666666667e-2,
    1.6025641025641026e-3,
    1.0683760683760684e-4,
    4.8562548562548563e-6,
    1.3875013875013875e-7,
    1.9270852604185938e-9,
];

/// PadeWorkspace — scratch matrices for one Pade evaluation.
///
/// Fields
/// ------
/// - `numer`: `Array2<f64>`
///   Running numerator polynomial; holds `p(Z)` after accumulation.
/// - `denom`: `Array2<f64>`
///   Running denominator polynomial; holds `q(Z)` after accumulation.
/// - `work`: `Array2<f64>`
///   Product buffer for `Z·numer` and `Z·denom`.
#[derive(Debug, Clone)]
pub struct PadeWorkspace {
    pub numer: Array2<f64>,
    pub denom: Array2<f64>,
    work: Array2<f64>,
}

impl PadeWorkspace {
    /// Allocate zeroed buffers for order `n`.
    pub fn new(n: usize) -> Self {
        PadeWorkspace {
            numer: Array2::zeros((n, n)),
            denom: Array2::zeros((n, n)),
            work: Array2::zeros((n, n)),
        }
    }

    /// Accumulate `p(Z)` into `numer` and `q(Z)` into `denom`.
    ///
    /// For `j = 8, 7, …, 1`:
    /// `numer ← Z·numer + cⱼ·Z` and `denom ← Z·denom + (−1)^(j+1)·cⱼ·Z`;
    /// then `denom` is negated and the identity added to both, giving
    /// `denom = I − c₁Z + c₂Z² − …`.
    pub fn accumulate(&mut self, z: &ArrayView2<'_, f64>) {
        self.numer.fill(0.0);
        self.denom.fill(0.0);
        let mut sign = -1.0;
        for &c in PADE_COEFFS.iter().rev() {
            general_mat_mul(1.0, z, &self.numer, 0.0, &mut self.work);
            self.numer.assign(&self.work);
            self.numer.scaled_add(c, z);

            general_mat_mul(1.0, z, &self.denom, 0.0, &mut self.work);
            self.denom.assign(&self.work);
            self.denom.scaled_add(sign * c, z);
            sign = -sign;
        }
        self.denom.mapv_inplace(|v| -v);
        for i in 0..z.nrows() {
            self.numer[[i, i]] += 1.0;
            self.denom[[i, i]] += 1.0;
        }
    }

    /// Evaluate `q(Z)⁻¹·p(Z)`, consuming the workspace.
    ///
    /// Errors
    /// ------
    /// - Whatever [`lu_solve`] reports for the denominator (singular pivot or
    ///   illegal argument); callers decide how to escalate.
    pub fn evaluate(mut self, z: &ArrayView2<'_, f64>) -> LinalgResult<Array2<f64>> {
        self.accumulate(z);
        lu_solve(self.denom, self.numer)
    }
}
