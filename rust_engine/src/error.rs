//! Error types for the checked kernel variants.
//!
//! The plain kernels never fail and answer degenerate input with sentinel
//! values. Callers that prefer to reject such input use the `try_*` functions,
//! which report problems through [`KernelError`].

/// Result type for checked kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

/// Error type for checked kernel operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    #[error("Empty column: {0} requires at least one value")]
    EmptyColumn(&'static str),

    #[error("Non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },

    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = KernelError::NonFinite {
            index: 3,
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "Non-finite value inf at index 3");

        let err = KernelError::InvalidParameter {
            name: "std_dev",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "Invalid parameter: std_dev = 0");

        let err = KernelError::EmptyColumn("median");
        assert!(err.to_string().contains("median"));
    }
}
