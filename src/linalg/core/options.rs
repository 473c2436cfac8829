//! Expm options — configuration of the matrix-exponential engine.
//!
//! Purpose
//! -------
//! Collect the knobs that steer [`expm_with_options`] in one validated value:
//! which algorithm may run, how ill-conditioned an eigenvector matrix may be
//! before the exact path is abandoned, and the trace hook.
//!
//! Key behaviors
//! -------------
//! - [`ExpmOptions::new`] validates every numeric field and never panics.
//! - [`ExpmOptions::default`] reproduces the behavior of the plain
//!   [`expm`] entry point.
//! - [`ExpmOptions::with_logger`] swaps the trace hook without touching the
//!   numeric settings.
//!
//! Invariants & assumptions
//! ------------------------
//! - `eigen_cond_limit` is finite and `>= 1`.
//!
//! Downstream usage
//! ----------------
//! - Build once, pass by reference to [`expm_with_options`],
//!   [`expm_report`], or [`expmprod_with_options`].
//!
//! [`expm`]: crate::linalg::expm::expm
//! [`expm_with_options`]: crate::linalg::expm::expm_with_options
//! [`expm_report`]: crate::linalg::expm::expm_report
//! [`expmprod_with_options`]: crate::linalg::expmprod::expmprod_with_options
use crate::linalg::{
    core::trace::discard_logger,
    errors::{LinalgError, LinalgResult},
};
use slog::Logger;

/// Default ceiling on the 1-norm condition number of the eigenvector matrix.
pub const DEFAULT_EIGEN_COND_LIMIT: f64 = 67_108_864.0; // 1 / sqrt(f64::EPSILON)

/// Algorithm selection for the matrix exponential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpmMethod {
    /// Eigendecomposition first, Pade with scaling and squaring when the
    /// input is not (numerically) diagonalizable.
    #[default]
    Auto,
    /// Pade with scaling and squaring only.
    Pade,
    /// Eigendecomposition only; non-diagonalizable input is an error.
    Eigen,
}

/// ExpmOptions — validated configuration for the exponential engine.
///
/// Fields
/// ------
/// - `method`: [`ExpmMethod`]
///   Which algorithm(s) may run.
/// - `eigen_cond_limit`: `f64`
///   The exact path is accepted only when `‖V‖₁·‖V⁻¹‖₁` is finite and at
///   most this value.
/// - `logger`: `slog::Logger`
///   Trace hook; discards records by default.
///
/// Notes
/// -----
/// - Fields are public for reading; construct through [`ExpmOptions::new`]
///   or [`Default`] so that the invariants hold.
#[derive(Clone)]
pub struct ExpmOptions {
    pub method: ExpmMethod,
    pub eigen_cond_limit: f64,
    pub logger: Logger,
}

impl ExpmOptions {
    /// Construct validated options with a discarding logger.
    ///
    /// Errors
    /// ------
    /// - `LinalgError::InvalidCondLimit`
    ///   If `eigen_cond_limit` is non-finite or below 1.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_matexp::linalg::core::options::{ExpmMethod, ExpmOptions};
    /// let opts = ExpmOptions::new(ExpmMethod::Pade, 1e8).unwrap();
    /// assert_eq!(opts.method, ExpmMethod::Pade);
    /// assert!(ExpmOptions::new(ExpmMethod::Auto, 0.5).is_err());
    /// ```
    pub fn new(method: ExpmMethod, eigen_cond_limit: f64) -> LinalgResult<Self> {
        if !eigen_cond_limit.is_finite() {
            return Err(LinalgError::InvalidCondLimit {
                value: eigen_cond_limit,
                reason: "must be finite",
            });
        }
        if eigen_cond_limit < 1.0 {
            return Err(LinalgError::InvalidCondLimit {
                value: eigen_cond_limit,
                reason: "must be at least 1",
            });
        }
        Ok(ExpmOptions {
            method,
            eigen_cond_limit,
            logger: discard_logger(),
        })
    }

    /// Replace the trace hook.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the algorithm selection.
    pub fn with_method(mut self, method: ExpmMethod) -> Self {
        self.method = method;
        self
    }
}

impl Default for ExpmOptions {
    fn default() -> Self {
        ExpmOptions {
            method: ExpmMethod::Auto,
            eigen_cond_limit: DEFAULT_EIGEN_COND_LIMIT,
            logger: discard_logger(),
        }
    }
}

impl std::fmt::Debug for ExpmOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpmOptions")
            .field("method", &self.method)
            .field("eigen_cond_limit", &self.eigen_cond_limit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::core::trace::terminal_logger;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Default values and their agreement with the documented constants.
    // - Rejection of invalid condition limits.
    // - Builder-style replacement of the logger and method.
    // -------------------------------------------------------------------------

    #[test]
    fn default_condition_limit_is_inverse_sqrt_epsilon() {
        let opts = ExpmOptions::default();
        assert_eq!(opts.eigen_cond_limit, 1.0 / f64::EPSILON.sqrt());
        assert_eq!(opts.method, ExpmMethod::Auto);
    }

    #[test]
    // Purpose
    // -------
    // Invalid condition limits are reported with the offending value.
    //
    // Given
    // -----
    // - NaN, +∞, and sub-unit limits.
    //
    // Expect
    // ------
    // - `InvalidCondLimit` for each, with the matching reason.
    fn new_rejects_invalid_condition_limits() {
        assert!(matches!(
            ExpmOptions::new(ExpmMethod::Auto, f64::NAN),
            Err(LinalgError::InvalidCondLimit { reason: "must be finite", .. })
        ));
        assert!(matches!(
            ExpmOptions::new(ExpmMethod::Auto, f64::INFINITY),
            Err(LinalgError::InvalidCondLimit { reason: "must be finite", .. })
        ));
        assert!(matches!(
            ExpmOptions::new(ExpmMethod::Auto, 0.9),
            Err(LinalgError::InvalidCondLimit { value, .. }) if value == 0.9
        ));
        assert!(ExpmOptions::new(ExpmMethod::Auto, 1.0).is_ok());
    }

    #[test]
    fn builders_replace_only_their_field() {
        // Arrange
        let base = ExpmOptions::new(ExpmMethod::Auto, 1e6).unwrap();

        // Act
        let opts = base
            .with_method(ExpmMethod::Eigen)
            .with_logger(terminal_logger(slog::Level::Critical));

        // Assert
        assert_eq!(opts.method, ExpmMethod::Eigen);
        assert_eq!(opts.eigen_cond_limit, 1e6);
        assert!(format!("{opts:?}").starts_with("ExpmOptions { method: Eigen"));
    }
}
