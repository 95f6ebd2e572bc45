use pyo3::prelude::*;

use crate::transformations::scaling::{self, ScalingParameters};

/// Python wrapper for ScalingParameters
#[pyclass(name = "ScalingParameters")]
#[derive(Clone)]
pub struct PyScalingParameters {
    #[pyo3(get)]
    pub mean: f64,
    #[pyo3(get)]
    pub std_dev: f64,
}

#[pymethods]
impl PyScalingParameters {
    #[new]
    #[pyo3(signature = (mean=0.0, std_dev=1.0))]
    fn new(mean: f64, std_dev: f64) -> Self {
        ScalingParameters::new(mean, std_dev).into()
    }

    /// Fit mean and sample standard deviation on a list
    #[staticmethod]
    fn fit(column: Vec<f64>) -> Self {
        ScalingParameters::fit(&column).into()
    }

    /// Like `fit`, but raises ValueError on an empty list or nan/inf values
    #[staticmethod]
    fn fit_strict(column: Vec<f64>) -> PyResult<Self> {
        Ok(ScalingParameters::try_fit(&column)?.into())
    }

    fn transform(&self, column: Vec<f64>) -> Vec<f64> {
        self.inner().transform(&column)
    }

    fn inverse_transform(&self, column: Vec<f64>) -> Vec<f64> {
        self.inner().inverse_transform(&column)
    }

    /// Serialize as `{"mean": ..., "std_dev": ...}`
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner()).map_err(|e| {
            pyo3::exceptions::PyRuntimeError::new_err(format!(
                "Failed to serialize scaling parameters: {}",
                e
            ))
        })
    }

    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let params: ScalingParameters = serde_json::from_str(json).map_err(|e| {
            pyo3::exceptions::PyValueError::new_err(format!("Failed to parse JSON: {}", e))
        })?;
        Ok(params.into())
    }

    fn __repr__(&self) -> String {
        format!(
            "ScalingParameters(mean={:.4}, std_dev={:.4})",
            self.mean, self.std_dev
        )
    }
}

impl PyScalingParameters {
    fn inner(&self) -> ScalingParameters {
        ScalingParameters::new(self.mean, self.std_dev)
    }
}

impl From<ScalingParameters> for PyScalingParameters {
    fn from(params: ScalingParameters) -> Self {
        PyScalingParameters {
            mean: params.mean,
            std_dev: params.std_dev,
        }
    }
}

/// Calculate the mean of a list (0.0 when empty)
#[pyfunction]
#[pyo3(name = "calculate_mean")]
pub fn py_calculate_mean(column: Vec<f64>) -> f64 {
    scaling::calculate_mean(&column)
}

/// Calculate the sample standard deviation of a list around `mean`
///
/// Returns 1.0 for fewer than two values or zero variance.
#[pyfunction]
#[pyo3(name = "calculate_std")]
pub fn py_calculate_std(column: Vec<f64>, mean: f64) -> f64 {
    scaling::calculate_std(&column, mean)
}

/// Apply `(x - mean) / std_dev` to every value of a list
#[pyfunction]
#[pyo3(name = "apply_standardization")]
pub fn py_apply_standardization(column: Vec<f64>, mean: f64, std_dev: f64) -> Vec<f64> {
    scaling::apply_standardization(&column, mean, std_dev)
}

/// Fit scaling parameters on training data
///
/// Returns:
///     tuple: (mean, standard_deviation); (0.0, 1.0) for an empty list
#[pyfunction]
#[pyo3(name = "get_scaling_parameters")]
pub fn py_get_scaling_parameters(column: Vec<f64>) -> (f64, f64) {
    let params = ScalingParameters::fit(&column);
    (params.mean, params.std_dev)
}

/// Scale a list with known parameters; an empty list stays empty
#[pyfunction]
#[pyo3(name = "scale_column")]
pub fn py_scale_column(column: Vec<f64>, mean: f64, std_dev: f64) -> Vec<f64> {
    scaling::scale_column(&column, mean, std_dev)
}

pub fn register_scaling_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_calculate_mean, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_std, m)?)?;
    m.add_function(wrap_pyfunction!(py_apply_standardization, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_scaling_parameters, m)?)?;
    m.add_function(wrap_pyfunction!(py_scale_column, m)?)?;
    m.add_class::<PyScalingParameters>()?;
    Ok(())
}
