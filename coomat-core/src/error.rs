//! Error types for coomat operations

use alloc::string::String;

/// Errors that can occur while parsing or combining matrices
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// The `rows=`/`cols=` header lines are absent or unsplittable
    MissingDimensions,
    /// A dimension header is present but its count is not an integer
    InvalidDimension(String),
    /// An entry line does not parse as `(row,col,value)`
    MalformedEntry(String),
    /// Operand dimensions differ in an addition
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::MissingDimensions => {
                write!(f, "Input has wrong format: missing dimensions")
            }
            MatrixError::InvalidDimension(line) => {
                write!(f, "Input has wrong format: invalid dimension \"{line}\"")
            }
            MatrixError::MalformedEntry(line) => {
                write!(f, "Input has wrong format at line: \"{line}\"")
            }
            MatrixError::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "Matrices must have the same dimensions for addition: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
        }
    }
}

/// Result type for coomat operations
pub type Result<T> = core::result::Result<T, MatrixError>;
