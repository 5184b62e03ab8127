//! Error types for pixelnorm

use thiserror::Error;

/// Result type alias for pixelnorm operations
pub type Result<T> = std::result::Result<T, PixelnormError>;

/// Error types that can occur in pixelnorm
#[derive(Debug, Error)]
pub enum PixelnormError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or configuration
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Pixel buffer length does not match the declared dimensions
    #[error("Dimension mismatch: {height}x{width} requires {expected} pixels, got {actual}")]
    DimensionMismatch {
        /// Declared image height
        height: usize,
        /// Declared image width
        width: usize,
        /// Pixel count implied by the dimensions
        expected: usize,
        /// Actual pixel buffer length
        actual: usize,
    },

    /// Input and output buffers differ in length
    #[error("Length mismatch: input has {input} elements, output has {output}")]
    LengthMismatch {
        /// Input buffer length
        input: usize,
        /// Output buffer length
        output: usize,
    },

    /// Normalized value differs from the expected value beyond the tolerance
    #[error("Tolerance exceeded at index {index}: expected {expected:.6}, got {actual:.6}")]
    ToleranceExceeded {
        /// Index of the first offending element
        index: usize,
        /// Expected normalized value
        expected: f32,
        /// Actual normalized value
        actual: f32,
    },

    /// One or more iterations of a batch run failed the correctness check
    #[error("{failed} of {total} iterations failed the correctness check")]
    ChecksFailed {
        /// Number of failed iterations
        failed: usize,
        /// Total iterations executed
        total: usize,
    },
}
