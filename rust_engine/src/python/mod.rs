//! Python bindings for the biobeat engine.
//!
//! This module exposes the column kernels to Python via PyO3.
//!
//! # Modules
//!
//! - [`cleaning`]: `biobeat_engine.cleaning` (invalid removal, median)
//! - [`scaling`]: `biobeat_engine.scaling` (mean, std, standardization)
//! - [`preprocessing`]: config-driven column pipeline at the package top level

pub mod cleaning;
pub mod preprocessing;
pub mod scaling;

use pyo3::prelude::*;

use crate::error::KernelError;

pub use cleaning::register_cleaning_functions;
pub use preprocessing::register_preprocessing_functions;
pub use scaling::{register_scaling_functions, PyScalingParameters};

impl From<KernelError> for PyErr {
    fn from(err: KernelError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// Kernel errors become `ValueError`, anything else `RuntimeError`.
pub(crate) fn to_py_err(err: anyhow::Error) -> PyErr {
    if err.downcast_ref::<KernelError>().is_some() {
        pyo3::exceptions::PyValueError::new_err(format!("{:#}", err))
    } else {
        pyo3::exceptions::PyRuntimeError::new_err(format!("{:#}", err))
    }
}

/// Populate the extension module and its `cleaning`/`scaling` submodules.
pub fn register_python_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    let cleaning = PyModule::new(py, "cleaning")?;
    register_cleaning_functions(&cleaning)?;
    m.add_submodule(&cleaning)?;

    let scaling = PyModule::new(py, "scaling")?;
    register_scaling_functions(&scaling)?;
    m.add_submodule(&scaling)?;

    register_preprocessing_functions(m)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
