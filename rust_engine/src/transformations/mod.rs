//! Numeric kernels for single-column cleaning and scaling.
//!
//! Every function here is pure: it reads its arguments, allocates its result
//! and keeps no state between calls.
//!
//! # Modules
//!
//! - [`cleaning`]: Remove non-finite values, compute the median
//! - [`scaling`]: Mean, sample standard deviation and z-score standardization
//!
//! # Example
//!
//! ```
//! use biobeat_engine::transformations::{
//!     apply_standardization, calculate_mean, calculate_std, remove_invalids,
//! };
//!
//! let clean = remove_invalids(&[2.0, f64::NAN, 4.0, 6.0]);
//! let mean = calculate_mean(&clean);
//! let std_dev = calculate_std(&clean, mean);
//! assert_eq!(apply_standardization(&clean, mean, std_dev), vec![-1.0, 0.0, 1.0]);
//! ```

pub mod cleaning;
pub mod scaling;

/// One variable's observations.
pub type Column = Vec<f64>;

pub use cleaning::{
    calculate_median, clean_median, median_of, remove_invalids, try_calculate_median,
    validate_column,
};
pub use scaling::{
    apply_standardization, calculate_mean, calculate_std, scale_column,
    try_apply_standardization, try_calculate_mean, try_calculate_std, ScalingParameters,
};
