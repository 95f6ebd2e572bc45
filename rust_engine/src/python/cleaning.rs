use pyo3::prelude::*;

use crate::transformations::cleaning;

/// Remove infinite and NaN values from a list
///
/// Args:
///     column: list of floats
///
/// Returns:
///     list: finite values in their original order
#[pyfunction]
#[pyo3(name = "remove_invalids")]
pub fn py_remove_invalids(column: Vec<f64>) -> Vec<f64> {
    cleaning::remove_invalids(&column)
}

/// Calculate the median of a list (0.0 when empty)
///
/// The list is converted into a private buffer, so the caller's list keeps
/// its order.
#[pyfunction]
#[pyo3(name = "calculate_median")]
pub fn py_calculate_median(column: Vec<f64>) -> f64 {
    cleaning::calculate_median(column)
}

/// Strip invalid values, then calculate the median (0.0 when nothing is left)
///
/// Example:
///     >>> biobeat_engine.cleaning.get_clean_median([1.0, float("nan"), 3.0])
///     2.0
#[pyfunction]
#[pyo3(name = "get_clean_median")]
pub fn py_get_clean_median(column: Vec<f64>) -> f64 {
    cleaning::clean_median(&column)
}

pub fn register_cleaning_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_remove_invalids, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_median, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_clean_median, m)?)?;
    Ok(())
}
