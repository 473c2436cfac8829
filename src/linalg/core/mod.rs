//! core — numerical kernels behind the dense linear-algebra operations.
//!
//! Purpose
//! -------
//! Collect the building blocks shared by [`solve`](crate::linalg::solve),
//! [`matpow`](crate::linalg::matpow), [`expm`](crate::linalg::expm) and
//! [`expmprod`](crate::linalg::expmprod): dense helpers, the LU kernel,
//! balancing, the real eigendecomposition, the Pade approximant, engine
//! options, and the trace hook.
//!
//! Key behaviors
//! -------------
//! - [`lu`] factors and solves real or complex systems with partial pivoting
//!   through `nalgebra`.
//! - [`balance`] isolates eigenvalues by permutation and equalizes row and
//!   column norms by power-of-two scaling, recording both so they can be
//!   undone exactly.
//! - [`eigen`] returns eigenvalues and complex right eigenvectors through
//!   `faer`.
//! - [`pade`] evaluates the (8, 8) Pade approximant of `exp` on a matrix with
//!   small norm.
//! - [`options`] and [`trace`] configure the exponential engine.
//!
//! Invariants & assumptions
//! ------------------------
//! - Kernels assume square, finite inputs; public entry points validate
//!   shapes and entries before calling into this module.
//! - Every buffer is owned by a single call; nothing here is shared across
//!   threads or cached between calls.
//!
//! Conventions
//! -----------
//! - Storage is `ndarray` row-major `f64` (or `Complex64` for the
//!   eigenvector matrix); indices are 0-based.
//! - Kernel failures are reported through
//!   [`LinalgError`](crate::linalg::errors::LinalgError); kernels never log.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests against hand-computed results;
//!   end-to-end behavior is covered by `tests/integration_expm_pipeline.rs`.

pub mod balance;
pub mod dense;
pub mod eigen;
pub mod lu;
pub mod options;
pub mod pade;
pub mod trace;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::balance::{
    BalancePermutation, permute_for_balance, scale_for_balance, unbalance_scaling,
};
pub use self::dense::{identity, inf_norm, is_diagonal, is_upper_triangular, one_norm_complex};
pub use self::eigen::{RealEigen, real_eigen};
pub use self::lu::{LuFactors, LuScalar, lu_factor, lu_solve};
pub use self::options::{ExpmMethod, ExpmOptions};
pub use self::pade::{PADE_COEFFS, PadeWorkspace};
pub use self::trace::{discard_logger, terminal_logger};
