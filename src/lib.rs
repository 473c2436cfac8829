//! rust_matexp — dense matrix exponential, powers, and linear solves with
//! Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the four dense operations to Python through the `_rust_matexp`
//! extension module. The numerical work lives in [`linalg`]; this file only
//! wires modules together and, with the `python-bindings` feature, defines the
//! Python-facing functions.
//!
//! Key behaviors
//! -------------
//! - Re-export [`linalg`] as the public crate surface.
//! - With `python-bindings`: define `expm`, `solve`, `matpow`, and
//!   `expmprod` as `#[pyfunction]`s over NumPy arrays and register them in the
//!   `_rust_matexp` module.
//!
//! Invariants & assumptions
//! ------------------------
//! - Python inputs are converted to contiguous `float64` arrays before any
//!   call into [`linalg`]; shape and finiteness checks are left to the Rust
//!   operations so both languages see identical validation.
//! - Results are returned as freshly allocated NumPy arrays (or a float for
//!   `expmprod`); no Python buffer is written to.
//!
//! Conventions
//! -----------
//! - Every [`linalg::LinalgError`] surfaces in Python as `ValueError` with the
//!   error's `Display` text.
//! - The `method` keyword accepts `"auto"`, `"pade"`, or `"eigen"`, mirroring
//!   [`linalg::ExpmMethod`].
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in [`linalg`] and by
//!   `tests/integration_expm_pipeline.rs`; the bindings are thin enough to be
//!   exercised from Python smoke tests only.

pub mod linalg;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    linalg::core::options::ExpmOptions,
    utils::{extract_expm_method, extract_f64_matrix, extract_f64_vector},
};

/// Matrix exponential of a square `float64` matrix.
///
/// Parameters
/// ----------
/// - `x`: array-like, shape `(n, n)`
/// - `method`: `Optional[str]`
///   `"auto"` (default), `"pade"`, or `"eigen"`.
///
/// Errors
/// ------
/// - `ValueError` for empty, rectangular, or non-finite input, for a
///   non-diagonalizable input under `method="eigen"`, and for internal
///   factorization failures.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "expm", signature = (x, method = None), text_signature = "(x, /, method=None)")]
pub fn py_expm<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, method: Option<&str>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let x_arr = extract_f64_matrix(py, x)?;
    let opts = ExpmOptions::default().with_method(extract_expm_method(method)?);
    let z = linalg::expm_with_options(&x_arr.as_array(), &opts)?;
    Ok(z.into_pyarray(py))
}

/// Solve `A·X = B` for `X`; `B` must be 2-D with `n` rows.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "solve", signature = (a, b), text_signature = "(a, b, /)")]
pub fn py_solve<'py>(
    py: Python<'py>, a: &Bound<'py, PyAny>, b: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let a_arr = extract_f64_matrix(py, a)?;
    let b_arr = extract_f64_matrix(py, b)?;
    let x = linalg::solve(&a_arr.as_array(), &b_arr.as_array())?;
    Ok(x.into_pyarray(py))
}

/// Integer power `X^k`; negative `k` inverts `X` first.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "matpow", signature = (x, k), text_signature = "(x, k, /)")]
pub fn py_matpow<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, k: i64,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let x_arr = extract_f64_matrix(py, x)?;
    let z = linalg::matpow(&x_arr.as_array(), k)?;
    Ok(z.into_pyarray(py))
}

/// Bilinear form `x·exp(M)·y`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "expmprod",
    signature = (x, m, y, method = None),
    text_signature = "(x, m, y, /, method=None)"
)]
pub fn py_expmprod<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, m: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>,
    method: Option<&str>,
) -> PyResult<f64> {
    let x_arr = extract_f64_vector(py, x)?;
    let m_arr = extract_f64_matrix(py, m)?;
    let y_arr = extract_f64_vector(py, y)?;
    let opts = ExpmOptions::default().with_method(extract_expm_method(method)?);
    let v = linalg::expmprod_with_options(
        &x_arr.as_array(),
        &m_arr.as_array(),
        &y_arr.as_array(),
        &opts,
    )?;
    Ok(v)
}

/// Initializer of the `_rust_matexp` extension module.
///
/// Notes
/// -----
/// - Invoked by Python when importing the compiled extension; not called
///   directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_matexp<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_expm, m)?)?;
    m.add_function(wrap_pyfunction!(py_solve, m)?)?;
    m.add_function(wrap_pyfunction!(py_matpow, m)?)?;
    m.add_function(wrap_pyfunction!(py_expmprod, m)?)?;
    Ok(())
}
