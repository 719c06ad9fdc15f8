//! Error types for vector construction and parsing
//!
//! Arithmetic never fails: numeric anomalies such as normalizing a zero
//! vector surface as IEEE 754 NaN/Infinity components. Errors only arise
//! when building a vector from untrusted input (slices, strings).

use std::num::ParseFloatError;
use thiserror::Error;

/// Main error type for vector construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Fewer values were supplied than a vector has components
    #[error("Expected {expected} components, found {found}")]
    InsufficientComponents {
        /// Number of components required
        expected: usize,
        /// Number of values actually supplied
        found: usize,
    },

    /// More values were supplied than a vector has components
    #[error("Expected {expected} components, found {found}")]
    TooManyComponents {
        /// Number of components allowed
        expected: usize,
        /// Number of values actually supplied
        found: usize,
    },

    /// A component could not be parsed as a floating-point number
    #[error("Invalid component {value:?}: {source}")]
    InvalidComponent {
        /// The offending text
        value: String,
        /// The underlying parse error
        source: ParseFloatError,
    },
}

/// Extension of the Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;
