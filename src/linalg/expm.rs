//! linalg::expm — matrix exponential of a dense real matrix.
//!
//! Purpose
//! -------
//! Compute `exp(X) = Σ Xᵐ/m!` for a real `n×n` matrix, preferring an exact
//! eigendecomposition and falling back to a preconditioned Pade
//! approximant when `X` is not (numerically) diagonalizable.
//!
//! Key behaviors
//! -------------
//! - `n = 1`: scalar exponential, no further machinery.
//! - Diagonal `X` (the zero matrix included): elementwise exponential of the
//!   diagonal, reported as the eigen path with condition 1.
//! - Eigen path: `X = V·Λ·V⁻¹` via [`real_eigen`]; the complex eigenvector
//!   matrix is inverted with the LU kernel and the result is
//!   `Re(V·diag(exp λ)·V⁻¹)`. Accepted only when the eigensolver converges,
//!   `V` is invertible, `‖V‖₁·‖V⁻¹‖₁` is finite and within
//!   `ExpmOptions::eigen_cond_limit`, and the result is finite.
//! - Pade path (Moler–Van Loan scaling and squaring):
//!   1. shift by the mean diagonal `μ` when `μ > 0`,
//!   2. balance by permutation unless `X` is upper triangular,
//!   3. balance by diagonal power-of-two scaling,
//!   4. divide by `2^s` so that the ∞-norm drops below one,
//!   5. evaluate the (8, 8) Pade approximant,
//!   6. square `s` times,
//!   7. undo the scaling, then the permutation,
//!   8. multiply by `exp(μ)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated (non-empty, square, finite) before any work.
//! - Failures of the Pade denominator solve are fatal: they surface as
//!   [`LinalgError::LinearAlgebraFailure`] and are logged at `error` level.
//! - The only designed fallback is eigen → Pade. It is taken when
//!   [`diagonalize`] rejects `X` (eigensolver non-convergence included) or
//!   when the eigen-path result overflows to a non-finite value.
//!
//! Conventions
//! -----------
//! - Every intermediate matrix is owned by the call and released on return;
//!   the caller's matrix is only read.
//! - Path selection, trace shift, balancing bounds, and squaring counts are
//!   emitted as `debug` records on `ExpmOptions::logger`.
//!
//! Testing notes
//! -------------
//! - Unit tests below pin each path on closed-form cases (diagonal,
//!   rotation, nilpotent, triangular, permutation-heavy) and check that both
//!   paths agree on generic input. End-to-end properties live in
//!   `tests/integration_expm_pipeline.rs`.
use crate::linalg::{
    core::{
        balance::{BalancePermutation, permute_for_balance, scale_for_balance, unbalance_scaling},
        dense::{inf_norm, is_diagonal, is_upper_triangular, one_norm_complex},
        eigen::real_eigen,
        lu::lu_solve,
        options::{ExpmMethod, ExpmOptions},
        pade::PadeWorkspace,
    },
    errors::{LinalgError, LinalgResult},
    validation::{validate_finite_matrix, validate_square},
};
use ndarray::{Array1, Array2, ArrayBase, ArrayView2, Data, Ix2};
use num_complex::Complex64;
use slog::{Logger, debug, error};

/// Squaring counts beyond this leave nothing representable after scaling.
const MAX_SQUARINGS: u32 = 1100;

/// Which algorithm produced an exponential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpmPath {
    /// `1×1` input.
    Scalar,
    /// Eigendecomposition; `condition` is `‖V‖₁·‖V⁻¹‖₁`.
    Eigen { condition: f64 },
    /// Pade with scaling and squaring.
    Pade {
        /// Number of squarings `s`.
        squarings: u32,
        /// Diagonal shift `μ` that was removed, `0.0` if none.
        trace_shift: f64,
        /// Whether a non-identity balancing permutation was undone.
        permuted: bool,
    },
}

/// ExpmReport — exponential together with the path that computed it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpmReport {
    pub value: Array2<f64>,
    pub path: ExpmPath,
}

/// Outcome of the diagonalizability probe.
///
/// Variants
/// --------
/// - `Diagonalizable { v, w, eigenvalues, condition }`
///   Complex eigenvector matrix `v`, its inverse `w`, eigenvalues in column
///   order of `v`, and the 1-norm condition number of `v`.
/// - `NotDiagonalizable { condition }`
///   The eigensolver did not converge, or `v` is singular, non-finite, or
///   too ill-conditioned; `condition` is `+∞` when it could not be
///   computed.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagonalization {
    Diagonalizable {
        v: Array2<Complex64>,
        w: Array2<Complex64>,
        eigenvalues: Array1<Complex64>,
        condition: f64,
    },
    NotDiagonalizable { condition: f64 },
}

/// Matrix exponential with default options.
///
/// Parameters
/// ----------
/// - `x`: `&ArrayBase<S, Ix2>`
///   Square matrix, `n ≥ 1`, finite entries.
///
/// Returns
/// -------
/// `LinalgResult<Array2<f64>>`
///   Freshly allocated `exp(x)`.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` / `LinalgError::NotSquare`
///   If `x` is not a non-empty square matrix.
/// - `LinalgError::NonFiniteEntry`
///   If `x` contains NaN or ±∞.
/// - `LinalgError::LinearAlgebraFailure`
///   If balancing or the Pade denominator solve fails.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_matexp::linalg::expm::expm;
/// let z = expm(&array![[0.0, 1.0], [0.0, 0.0]]).unwrap();
/// assert!((z[[0, 1]] - 1.0).abs() < 1e-14);
/// ```
pub fn expm<S: Data<Elem = f64>>(x: &ArrayBase<S, Ix2>) -> LinalgResult<Array2<f64>> {
    expm_with_options(x, &ExpmOptions::default())
}

/// Matrix exponential with explicit [`ExpmOptions`].
pub fn expm_with_options<S: Data<Elem = f64>>(
    x: &ArrayBase<S, Ix2>, opts: &ExpmOptions,
) -> LinalgResult<Array2<f64>> {
    expm_report(x, opts).map(|report| report.value)
}

/// Matrix exponential plus the [`ExpmPath`] that produced it.
///
/// Errors
/// ------
/// - As [`expm`], plus `LinalgError::NotDiagonalizable` when
///   `opts.method == ExpmMethod::Eigen` and either the eigenvector matrix is
///   rejected or the eigen-path result is not finite.
pub fn expm_report<S: Data<Elem = f64>>(
    x: &ArrayBase<S, Ix2>, opts: &ExpmOptions,
) -> LinalgResult<ExpmReport> {
    let x = x.view();
    let n = validate_square(&x, "X")?;
    validate_finite_matrix(&x, "X")?;
    let log = &opts.logger;

    if n == 1 {
        debug!(log, "expm path selected"; "path" => "scalar");
        let value = Array2::from_elem((1, 1), x[[0, 0]].exp());
        return Ok(ExpmReport { value, path: ExpmPath::Scalar });
    }

    if opts.method != ExpmMethod::Pade {
        if is_diagonal(&x) {
            debug!(log, "expm path selected"; "path" => "eigen", "n" => n, "diagonal" => true);
            let value = Array2::from_diag(&x.diag().mapv(f64::exp));
            return Ok(ExpmReport { value, path: ExpmPath::Eigen { condition: 1.0 } });
        }

        let condition = match diagonalize(&x, opts).map_err(|e| log_failure(log, e))? {
            Diagonalization::Diagonalizable { v, w, eigenvalues, condition } => {
                let value = exp_from_eigen(&v, &w, &eigenvalues);
                if value.iter().all(|z| z.is_finite()) {
                    debug!(log, "expm path selected"; "path" => "eigen", "n" => n,
                           "condition" => condition);
                    return Ok(ExpmReport { value, path: ExpmPath::Eigen { condition } });
                }
                debug!(log, "eigen path result not finite"; "condition" => condition);
                condition
            }
            Diagonalization::NotDiagonalizable { condition } => {
                debug!(log, "eigenvector matrix rejected"; "condition" => condition,
                       "limit" => opts.eigen_cond_limit);
                condition
            }
        };
        if opts.method == ExpmMethod::Eigen {
            return Err(LinalgError::NotDiagonalizable { condition });
        }
        debug!(log, "falling back to pade"; "condition" => condition);
    }

    expm_pade(&x, log).map_err(|e| log_failure(log, e))
}

/// Probe whether `x` can be exponentiated through its eigendecomposition.
///
/// Errors
/// ------
/// - `LinalgError::LinearAlgebraFailure`
///   If the complex LU reports an illegal argument.
pub fn diagonalize(x: &ArrayView2<'_, f64>, opts: &ExpmOptions) -> LinalgResult<Diagonalization> {
    let n = x.nrows();
    let eig = match real_eigen(x) {
        Ok(eig) => eig,
        Err(LinalgError::LinearAlgebraFailure { routine, status }) => {
            debug!(opts.logger, "eigensolver did not converge"; "routine" => routine,
                   "status" => status);
            return Ok(Diagonalization::NotDiagonalizable { condition: f64::INFINITY });
        }
        Err(e) => return Err(e),
    };
    let v = eig.vectors;
    if v.iter().any(|z| !z.re.is_finite() || !z.im.is_finite()) {
        return Ok(Diagonalization::NotDiagonalizable { condition: f64::INFINITY });
    }

    let w = match lu_solve(v.clone(), Array2::<Complex64>::eye(n)) {
        Ok(w) => w,
        Err(LinalgError::SingularMatrix { .. }) => {
            return Ok(Diagonalization::NotDiagonalizable { condition: f64::INFINITY });
        }
        Err(e) => return Err(e.into_failure("getrf")),
    };

    let condition = one_norm_complex(&v.view()) * one_norm_complex(&w.view());
    if !condition.is_finite() || condition > opts.eigen_cond_limit {
        return Ok(Diagonalization::NotDiagonalizable { condition });
    }
    Ok(Diagonalization::Diagonalizable { v, w, eigenvalues: eig.values, condition })
}

/// `Re(V·diag(exp λ)·W)`.
fn exp_from_eigen(
    v: &Array2<Complex64>, w: &Array2<Complex64>, eigenvalues: &Array1<Complex64>,
) -> Array2<f64> {
    let mut scaled = v.clone();
    for (mut col, lambda) in scaled.columns_mut().into_iter().zip(eigenvalues.iter()) {
        let r = lambda.re.exp();
        let e = if lambda.im == 0.0 {
            Complex64::new(r, 0.0)
        } else {
            Complex64::new(r * lambda.im.cos(), r * lambda.im.sin())
        };
        col.mapv_inplace(|z| z * e);
    }
    scaled.dot(w).mapv(|z| z.re)
}

/// Smallest `s ≥ 0` with `norm / 2^s < 1` for `norm ≥ 1/2`; zero otherwise.
fn squaring_count(norm: f64) -> u32 {
    if norm > 0.0 {
        let s = (1.0 + norm.log2()).trunc();
        if s <= 0.0 { 0 } else { (s as u32).min(MAX_SQUARINGS) }
    } else {
        0
    }
}

fn expm_pade(x: &ArrayView2<'_, f64>, log: &Logger) -> LinalgResult<ExpmReport> {
    let n = x.nrows();
    let mut z = x.to_owned();
    let triangular = is_upper_triangular(&z.view());

    let mu = z.diag().sum() / n as f64;
    let trace_shift = if mu > 0.0 {
        z.diag_mut().mapv_inplace(|d| d - mu);
        mu
    } else {
        0.0
    };

    let perm =
        if triangular { BalancePermutation::identity(n) } else { permute_for_balance(&mut z) };
    let scale = scale_for_balance(&mut z)?;
    debug!(log, "balanced"; "ilo" => perm.ilo, "ihi" => perm.ihi, "triangular" => triangular,
           "trace_shift" => trace_shift);

    let norm = inf_norm(&z.view());
    let squarings = squaring_count(norm);
    if squarings > 0 {
        let factor = 0.5_f64.powi(squarings as i32);
        z.mapv_inplace(|v| v * factor);
    }
    debug!(log, "expm path selected"; "path" => "pade", "norm" => norm, "squarings" => squarings);

    let mut r =
        PadeWorkspace::new(n).evaluate(&z.view()).map_err(|e| e.into_failure("getrf"))?;
    for _ in 0..squarings {
        r = r.dot(&r);
    }

    unbalance_scaling(&mut r, &scale);
    let permuted = !triangular && !perm.is_identity();
    if permuted {
        r = perm.apply_inverse(&r);
    }
    if trace_shift > 0.0 {
        let e = trace_shift.exp();
        r.mapv_inplace(|v| v * e);
    }

    Ok(ExpmReport { value: r, path: ExpmPath::Pade { squarings, trace_shift, permuted } })
}

fn log_failure(log: &Logger, err: LinalgError) -> LinalgError {
    if let LinalgError::LinearAlgebraFailure { routine, status } = &err {
        error!(log, "linear algebra failure"; "routine" => *routine, "status" => *status);
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::core::dense::identity;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Path selection (scalar, eigen, pade) under each `ExpmMethod`.
    // - Closed-form results on diagonal, rotation, nilpotent, and triangular
    //   inputs.
    // - Agreement of the two paths on generic and permutation-heavy inputs.
    // - Squaring-count rule and input validation.
    // - Zero matrices of every small order and overflowing exponentials.
    // -------------------------------------------------------------------------

    fn pade_only() -> ExpmOptions {
        ExpmOptions::default().with_method(ExpmMethod::Pade)
    }

    fn eigen_only() -> ExpmOptions {
        ExpmOptions::default().with_method(ExpmMethod::Eigen)
    }

    fn assert_matrix_close(a: &Array2<f64>, b: &Array2<f64>, tol: f64) {
        assert_eq!(a.dim(), b.dim());
        for ((i, j), v) in a.indexed_iter() {
            assert_abs_diff_eq!(*v, b[[i, j]], epsilon = tol);
        }
    }

    #[test]
    fn squaring_count_follows_truncated_log_rule() {
        assert_eq!(squaring_count(0.0), 0);
        assert_eq!(squaring_count(0.3), 0);
        assert_eq!(squaring_count(0.5), 0);
        assert_eq!(squaring_count(0.75), 0);
        assert_eq!(squaring_count(1.0), 1);
        assert_eq!(squaring_count(3.9), 2);
        assert_eq!(squaring_count(4.0), 3);
        assert_eq!(squaring_count(f64::INFINITY), MAX_SQUARINGS);
    }

    #[test]
    fn scalar_input_uses_scalar_path() {
        let report = expm_report(&array![[2.0]], &ExpmOptions::default()).unwrap();
        assert_eq!(report.path, ExpmPath::Scalar);
        assert_eq!(report.value[[0, 0]], 2.0_f64.exp());
    }

    #[test]
    // Purpose
    // -------
    // Diagonal input takes the eigen path and returns elementwise exp.
    //
    // Given
    // -----
    // - diag(1, -2, 0.5).
    //
    // Expect
    // ------
    // - `ExpmPath::Eigen` with condition 1 and diag(e, e⁻², e^½).
    fn diagonal_input_takes_eigen_path() {
        // Arrange
        let d = array![[1.0, 0.0, 0.0], [0.0, -2.0, 0.0], [0.0, 0.0, 0.5]];

        // Act
        let report = expm_report(&d, &ExpmOptions::default()).unwrap();

        // Assert
        match report.path {
            ExpmPath::Eigen { condition } => assert_abs_diff_eq!(condition, 1.0, epsilon = 1e-12),
            other => panic!("expected eigen path, got {other:?}"),
        }
        let expected = Array2::from_diag(&array![1.0_f64.exp(), (-2.0_f64).exp(), 0.5_f64.exp()]);
        assert_matrix_close(&report.value, &expected, 1e-14);
    }

    #[test]
    // Purpose
    // -------
    // Complex-conjugate eigenvalues are reassembled correctly.
    //
    // Given
    // -----
    // - The rotation generator [[0, 1], [-1, 0]].
    //
    // Expect
    // ------
    // - [[cos 1, sin 1], [-sin 1, cos 1]] from both paths.
    fn rotation_generator_matches_closed_form_on_both_paths() {
        // Arrange
        let x = array![[0.0, 1.0], [-1.0, 0.0]];
        let (c, s) = (1.0_f64.cos(), 1.0_f64.sin());
        let expected = array![[c, s], [-s, c]];

        // Act
        let eig = expm_report(&x, &eigen_only()).unwrap();
        let pade = expm_report(&x, &pade_only()).unwrap();

        // Assert
        assert!(matches!(eig.path, ExpmPath::Eigen { .. }));
        assert!(matches!(pade.path, ExpmPath::Pade { .. }));
        assert_matrix_close(&eig.value, &expected, 1e-12);
        assert_matrix_close(&pade.value, &expected, 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // A defective (Jordan) input is rejected by the eigen path and handled
    // by Pade under `Auto`.
    //
    // Given
    // -----
    // - The nilpotent matrix [[0, 1], [0, 0]].
    //
    // Expect
    // ------
    // - `Auto` returns [[1, 1], [0, 1]] via Pade with one squaring.
    // - `Eigen` fails with `NotDiagonalizable`.
    fn nilpotent_input_falls_back_to_pade() {
        // Arrange
        let x = array![[0.0, 1.0], [0.0, 0.0]];

        // Act
        let auto = expm_report(&x, &ExpmOptions::default()).unwrap();
        let eig = expm_report(&x, &eigen_only());

        // Assert
        assert_eq!(
            auto.path,
            ExpmPath::Pade { squarings: 1, trace_shift: 0.0, permuted: false }
        );
        assert_matrix_close(&auto.value, &array![[1.0, 1.0], [0.0, 1.0]], 1e-15);
        assert!(matches!(eig, Err(LinalgError::NotDiagonalizable { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Positive trace shift is removed and restored.
    //
    // Given
    // -----
    // - X = 3·I + N with N = [[0, 2], [0, 0]]; exp(X) = e³·(I + N).
    //
    // Expect
    // ------
    // - Pade path with trace_shift 3, no permutation, and the closed form.
    fn positive_trace_shift_is_undone() {
        // Arrange
        let x = array![[3.0, 2.0], [0.0, 3.0]];
        let e3 = 3.0_f64.exp();

        // Act
        let report = expm_report(&x, &ExpmOptions::default()).unwrap();

        // Assert
        match report.path {
            ExpmPath::Pade { trace_shift, permuted, .. } => {
                assert_eq!(trace_shift, 3.0);
                assert!(!permuted);
            }
            other => panic!("expected pade path, got {other:?}"),
        }
        assert_matrix_close(&report.value, &array![[e3, 2.0 * e3], [0.0, e3]], 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // The balancing permutation is undone on the Pade path.
    //
    // Given
    // -----
    // - A lower-triangular 3×3 matrix with distinct diagonal (fully isolated
    //   by the permutation; diagonalizable, so the eigen path is a reference).
    //
    // Expect
    // ------
    // - Pade reports `permuted` and agrees with the eigen path.
    fn permuted_pade_agrees_with_eigen_path() {
        // Arrange
        let x = array![[-1.0, 0.0, 0.0], [0.5, 0.25, 0.0], [2.0, -1.5, 1.0]];

        // Act
        let pade = expm_report(&x, &pade_only()).unwrap();
        let eig = expm_report(&x, &eigen_only()).unwrap();

        // Assert
        assert!(matches!(pade.path, ExpmPath::Pade { permuted: true, .. }));
        assert_matrix_close(&pade.value, &eig.value, 1e-12);
    }

    #[test]
    fn generic_dense_input_paths_agree() {
        let x = array![
            [0.2, -1.1, 0.4, 0.0],
            [0.9, -0.3, 0.1, 0.7],
            [-0.5, 0.6, 1.2, -0.8],
            [0.3, 0.0, -0.4, 0.5]
        ];
        let pade = expm_with_options(&x, &pade_only()).unwrap();
        let eig = expm_with_options(&x, &eigen_only()).unwrap();
        assert_matrix_close(&pade, &eig, 1e-11);
    }

    #[test]
    fn large_norm_uses_many_squarings() {
        let x = array![[-20.0, 5.0], [3.0, -15.0]];
        let report = expm_report(&x, &pade_only()).unwrap();
        let eig = expm_with_options(&x, &eigen_only()).unwrap();
        assert!(matches!(report.path, ExpmPath::Pade { squarings, .. } if squarings >= 3));
        for ((i, j), v) in report.value.indexed_iter() {
            assert_abs_diff_eq!(*v, eig[[i, j]], epsilon = 1e-14);
        }
    }

    #[test]
    // Purpose
    // -------
    // The zero matrix of every order exponentiates to the identity through
    // both `Auto` and `Eigen`.
    //
    // Given
    // -----
    // - 0ₙ for n = 1, …, 10.
    //
    // Expect
    // ------
    // - Exactly Iₙ; for n ≥ 2 the eigen path with condition 1.
    fn zero_matrix_exponentiates_to_identity_on_auto_and_eigen() {
        for n in 1..=10 {
            // Arrange
            let zero = Array2::<f64>::zeros((n, n));

            // Act
            let auto = expm_report(&zero, &ExpmOptions::default()).unwrap();
            let eig = expm_report(&zero, &eigen_only()).unwrap();

            // Assert
            for report in [&auto, &eig] {
                assert_eq!(report.value, identity(n), "order {n}");
                if n > 1 {
                    assert_eq!(report.path, ExpmPath::Eigen { condition: 1.0 });
                }
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // An eigenvalue whose exponential overflows yields `inf`, never NaN.
    //
    // Given
    // -----
    // - diag(720, 0); exp(720) exceeds `f64::MAX`.
    //
    // Expect
    // ------
    // - [[inf, 0], [0, 1]] under `Auto` and `Eigen`.
    fn overflowing_diagonal_entry_gives_infinity_without_nan() {
        // Arrange
        let x = array![[720.0, 0.0], [0.0, 0.0]];

        // Act
        let auto = expm(&x).unwrap();
        let eig = expm_with_options(&x, &eigen_only()).unwrap();

        // Assert
        for z in [&auto, &eig] {
            assert!(z.iter().all(|v| !v.is_nan()));
            assert_eq!(z[[0, 0]], f64::INFINITY);
            assert_eq!(z[[0, 1]], 0.0);
            assert_eq!(z[[1, 0]], 0.0);
            assert_eq!(z[[1, 1]], 1.0);
        }
    }

    #[test]
    // Purpose
    // -------
    // A non-finite eigen-path result is rejected: `Auto` falls back to Pade
    // and `Eigen` reports `NotDiagonalizable`.
    //
    // Given
    // -----
    // - X = [[720, 1], [0, 0]], diagonalizable with a well-conditioned
    //   eigenvector matrix but exp(720) = inf.
    //
    // Expect
    // ------
    // - `Auto`: Pade path, no NaN, exp(X)[1, 1] = 1 and exp(X)[1, 0] = 0.
    // - `Eigen`: `NotDiagonalizable` with a finite condition number.
    fn overflowing_eigen_result_falls_back_to_pade() {
        // Arrange
        let x = array![[720.0, 1.0], [0.0, 0.0]];

        // Act
        let auto = expm_report(&x, &ExpmOptions::default()).unwrap();
        let eig = expm_report(&x, &eigen_only());

        // Assert
        assert!(matches!(auto.path, ExpmPath::Pade { .. }));
        assert!(auto.value.iter().all(|v| !v.is_nan()));
        assert_eq!(auto.value[[0, 0]], f64::INFINITY);
        assert_eq!(auto.value[[1, 0]], 0.0);
        assert_abs_diff_eq!(auto.value[[1, 1]], 1.0, epsilon = 1e-8);
        match eig {
            Err(LinalgError::NotDiagonalizable { condition }) => assert!(condition.is_finite()),
            other => panic!("expected NotDiagonalizable, got {other:?}"),
        }
    }

    #[test]
    fn diagonalize_reports_condition_for_defective_input() {
        let x = array![[1.0, 1.0], [0.0, 1.0]];
        match diagonalize(&x.view(), &ExpmOptions::default()).unwrap() {
            Diagonalization::NotDiagonalizable { condition } => {
                assert!(condition > ExpmOptions::default().eigen_cond_limit)
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn invalid_inputs_are_rejected_before_work() {
        assert_eq!(
            expm(&Array2::<f64>::zeros((0, 0))),
            Err(LinalgError::EmptyMatrix { name: "X" })
        );
        assert_eq!(
            expm(&Array2::<f64>::zeros((3, 2))),
            Err(LinalgError::NotSquare { name: "X", rows: 3, cols: 2 })
        );
        assert!(matches!(
            expm(&array![[0.0, f64::NAN], [0.0, 0.0]]),
            Err(LinalgError::NonFiniteEntry { name: "X", row: 0, col: 1, .. })
        ));
    }
}
