//! Errors for dense linear algebra (dimension checks, singular systems,
//! factorization contract violations, and decomposition failures).
//!
//! This module defines a single error type, [`LinalgError`], shared by
//! [`solve`](crate::linalg::solve::solve), [`matpow`](crate::linalg::matpow::matpow),
//! [`expm`](crate::linalg::expm::expm) and
//! [`expmprod`](crate::linalg::expmprod::expmprod). It implements
//! `Display`/`Error` and converts to `PyErr` when the `python-bindings`
//! feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy). Only the `status` field of
//!   [`LinalgError::LinearAlgebraFailure`] follows the LAPACK convention
//!   (negative = illegal argument position, positive = 1-based pivot).
//! - Each variant belongs to exactly one [`LinalgErrorKind`]; callers that
//!   only care about the broad category should match on
//!   [`LinalgError::kind`].
//! - Nothing in this crate retries on error: every operation is
//!   deterministic in its inputs.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Crate-wide result alias for linear algebra operations.
pub type LinalgResult<T> = Result<T, LinalgError>;

/// Broad error category of a [`LinalgError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgErrorKind {
    /// Zero or mismatched dimensions. Always a caller bug.
    Dimension,
    /// A required inverse does not exist for this input.
    Singular,
    /// The factorization kernel was called with an illegal argument.
    InvalidFactorInput,
    /// A factorization/decomposition reported an internal failure. Fatal.
    LinearAlgebraFailure,
    /// Non-finite data or an invalid configuration value.
    InvalidInput,
}

/// Unified error type for dense linear algebra.
///
/// Variants cover dimension validation, data-dependent singularity,
/// factorization contract violations, decomposition failures, and
/// option/data validation.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    // ---- Dimensions ----
    /// Matrix has zero rows or columns.
    EmptyMatrix { name: &'static str },

    /// Matrix must be square.
    NotSquare { name: &'static str, rows: usize, cols: usize },

    /// Operand length does not match the expected dimension.
    DimensionMismatch { name: &'static str, expected: usize, found: usize },

    /// Right-hand side has zero columns.
    NoRightHandSide,

    // ---- Singularity ----
    /// LU factorization met an exactly-zero pivot in column `pivot`.
    SingularMatrix { pivot: usize },

    /// Eigenvector matrix is singular or too ill-conditioned to invert.
    NotDiagonalizable { condition: f64 },

    // ---- Factorization contract ----
    /// Argument `arg` of the factorization routine had an illegal value.
    InvalidFactorInput { routine: &'static str, arg: usize },

    // ---- Decomposition failure ----
    /// Underlying routine reported a failure; `status` uses LAPACK codes.
    LinearAlgebraFailure { routine: &'static str, status: i64 },

    // ---- Data / options validation ----
    /// Input entries must be finite.
    NonFiniteEntry { name: &'static str, row: usize, col: usize, value: f64 },

    /// Condition limit for the eigen path must be finite and >= 1.
    InvalidCondLimit { value: f64, reason: &'static str },
}

impl LinalgError {
    /// Category of this error.
    pub fn kind(&self) -> LinalgErrorKind {
        match self {
            LinalgError::EmptyMatrix { .. }
            | LinalgError::NotSquare { .. }
            | LinalgError::DimensionMismatch { .. }
            | LinalgError::NoRightHandSide => LinalgErrorKind::Dimension,
            LinalgError::SingularMatrix { .. } | LinalgError::NotDiagonalizable { .. } => {
                LinalgErrorKind::Singular
            }
            LinalgError::InvalidFactorInput { .. } => LinalgErrorKind::InvalidFactorInput,
            LinalgError::LinearAlgebraFailure { .. } => LinalgErrorKind::LinearAlgebraFailure,
            LinalgError::NonFiniteEntry { .. }
            | LinalgError::InvalidCondLimit { .. } => LinalgErrorKind::InvalidInput,
        }
    }

    /// Re-express a factorization error raised inside a composite routine
    /// as a fatal [`LinalgError::LinearAlgebraFailure`].
    ///
    /// Illegal arguments map to a negative status (`-arg`), singular pivots to
    /// the 1-based pivot index. Every other variant is returned unchanged.
    pub fn into_failure(self, routine: &'static str) -> LinalgError {
        match self {
            LinalgError::InvalidFactorInput { arg, .. } => {
                LinalgError::LinearAlgebraFailure { routine, status: -(arg as i64) }
            }
            LinalgError::SingularMatrix { pivot } => {
                LinalgError::LinearAlgebraFailure { routine, status: pivot as i64 + 1 }
            }
            other => other,
        }
    }
}

impl std::error::Error for LinalgError {}

impl std::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Dimensions ----
            LinalgError::EmptyMatrix { name } => {
                write!(f, "Dimension error: '{name}' is 0-dimensional")
            }
            LinalgError::NotSquare { name, rows, cols } => {
                write!(f, "Dimension error: '{name}' must be square, found {rows}x{cols}")
            }
            LinalgError::DimensionMismatch { name, expected, found } => {
                write!(f, "Dimension error: '{name}' has length {found}, expected {expected}")
            }
            LinalgError::NoRightHandSide => {
                write!(f, "Dimension error: no right-hand side in 'B'")
            }

            // ---- Singularity ----
            LinalgError::SingularMatrix { pivot } => {
                write!(f, "System is exactly singular: zero pivot in column {pivot}")
            }
            LinalgError::NotDiagonalizable { condition } => {
                write!(f, "Matrix is not diagonalizable (eigenvector condition {condition:e})")
            }

            // ---- Factorization contract ----
            LinalgError::InvalidFactorInput { routine, arg } => {
                write!(f, "Argument {arg} of routine {routine} had an invalid value")
            }

            // ---- Decomposition failure ----
            LinalgError::LinearAlgebraFailure { routine, status } => {
                write!(f, "Routine {routine} returned info code {status}")
            }

            // ---- Data / options validation ----
            LinalgError::NonFiniteEntry { name, row, col, value } => {
                write!(f, "Non-finite entry in '{name}' at ({row}, {col}): {value}")
            }
            LinalgError::InvalidCondLimit { value, reason } => {
                write!(f, "Invalid eigenvector condition limit {value}: {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl std::convert::From<LinalgError> for PyErr {
    fn from(err: LinalgError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
