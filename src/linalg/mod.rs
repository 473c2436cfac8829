//! linalg — dense matrix exponential, powers, and linear solves.
//!
//! Purpose
//! -------
//! Provide four pure operations on small-to-moderate dense real matrices:
//! [`expm`] (matrix exponential), [`solve`] (`A·X = B`), [`matpow`]
//! (integer powers), and [`expmprod`] (`x·exp(M)·y`), together with the
//! kernels, options, and error type they share.
//!
//! Key behaviors
//! -------------
//! - [`expm`] tries an exact eigendecomposition first and falls back to
//!   Pade(8, 8) with scaling and squaring, balancing, and trace shift when
//!   the input is not (numerically) diagonalizable.
//! - [`solve`] and negative powers in [`matpow`] go through one LU kernel
//!   with partial pivoting; exactly singular systems fail with
//!   [`LinalgError::SingularMatrix`].
//! - [`expmprod`] composes [`expm`] with two vector products.
//!
//! Invariants & assumptions
//! ------------------------
//! - All operations are synchronous and single-threaded, take their inputs
//!   by shared reference, and return freshly allocated results. No state is
//!   kept between calls, so independent calls may run in parallel.
//! - Matrix operands must be non-empty, square where required, and finite;
//!   violations are reported before any numerical work.
//!
//! Conventions
//! -----------
//! - Storage is `ndarray` `f64`; indices in errors are 0-based.
//! - Public functions accept any `ndarray` storage (`Array2`, views, …) via
//!   `ArrayBase<S, _>` with `S: Data<Elem = f64>`.
//!
//! Downstream usage
//! ----------------
//! - Typical flow: build an `Array2<f64>`, call [`expm`] (or
//!   [`expm_with_options`] with an [`ExpmOptions`] carrying a logger from
//!   [`core::trace`]), and match on [`LinalgError::kind`] for failures.
//! - Python bindings in the crate root wrap the four operations one-to-one.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; `tests/integration_expm_pipeline.rs`
//!   checks the cross-operation properties (identities, additivity, agreement
//!   between `expm`, `matpow`, `solve`, and `expmprod`).

pub mod core;
pub mod errors;
pub mod expm;
pub mod expmprod;
pub mod matpow;
pub mod solve;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{ExpmMethod, ExpmOptions};
pub use self::errors::{LinalgError, LinalgErrorKind, LinalgResult};
pub use self::expm::{
    Diagonalization, ExpmPath, ExpmReport, diagonalize, expm, expm_report, expm_with_options,
};
pub use self::expmprod::{expmprod, expmprod_with_options};
pub use self::matpow::matpow;
pub use self::solve::solve;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_matexp::linalg::prelude::*;
//
// to import the four operations, their options, and the error surface.

pub mod prelude {
    pub use super::{
        ExpmMethod, ExpmOptions, ExpmPath, ExpmReport, LinalgError, LinalgErrorKind, LinalgResult,
        expm, expm_report, expm_with_options, expmprod, expmprod_with_options, matpow, solve,
    };
}
