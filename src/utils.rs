//! Python argument extraction for the `_rust_matexp` bindings.
//!
//! Accepts NumPy arrays directly (zero-copy when already `float64`), pandas
//! objects through `to_numpy`, and nested Python sequences as a fallback.
//! Only compiled with the `python-bindings` feature.

#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Array2 / Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
    PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
use crate::linalg::core::options::ExpmMethod;

/// Extract a 1-D `float64` array from a NumPy array, pandas Series, or
/// sequence of floats.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_vector<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Ok(series_ro);
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Extract a 2-D `float64` array from a NumPy array, pandas DataFrame, or
/// sequence of equal-length rows.
///
/// Errors
/// ------
/// - `TypeError` if the object is none of the accepted kinds.
/// - `ValueError` if a nested sequence is ragged.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray2<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro);
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or sequence of float64 rows",
        )
    })?;
    let ncols = rows.first().map_or(0, Vec::len);
    if let Some(i) = rows.iter().position(|r| r.len() != ncols) {
        return Err(PyValueError::new_err(format!(
            "row {i} has length {}, expected {ncols}",
            rows[i].len()
        )));
    }
    let nrows = rows.len();
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let arr = Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(arr.into_pyarray(py).readonly())
}

/// Parse the `method` keyword of `expm` / `expmprod`.
#[cfg(feature = "python-bindings")]
pub fn extract_expm_method(method: Option<&str>) -> PyResult<ExpmMethod> {
    match method.map(str::to_lowercase).as_deref() {
        None | Some("auto") => Ok(ExpmMethod::Auto),
        Some("pade") => Ok(ExpmMethod::Pade),
        Some("eigen") => Ok(ExpmMethod::Eigen),
        Some(other) => Err(PyValueError::new_err(format!(
            "invalid method {:?} (expected 'auto', 'pade', or 'eigen')",
            other
        ))),
    }
}
