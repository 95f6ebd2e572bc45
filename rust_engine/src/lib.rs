//! Biobeat engine - numeric kernels for column cleaning and scaling.
//!
//! The [`transformations`] module holds the pure kernels. [`preprocessing`]
//! chains them per column according to an [`config::EngineConfig`], and the
//! `python` feature exposes everything as the `biobeat_engine` extension
//! module.

pub mod config;
pub mod error;
pub mod preprocessing;
pub mod transformations;

#[cfg(feature = "python")]
pub mod python;

pub use config::EngineConfig;
pub use error::{KernelError, KernelResult};
pub use preprocessing::{ColumnPipeline, StandardizedColumn};
pub use transformations::{Column, ScalingParameters};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Biobeat engine - column cleaning and scaling kernels
#[cfg(feature = "python")]
#[pymodule]
fn biobeat_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_python_module(m)
}
