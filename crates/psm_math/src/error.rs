//! Math error types
//!
//! Only two operations report failure: normalizing a zero-length `Vector3`
//! and inverting a singular `Matrix4x4`. Every other degenerate input is
//! handled silently by the operation itself.

use std::fmt;

/// Error type for math operations with a violated precondition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Normalization of a vector whose magnitude is exactly zero
    ZeroLengthVector,
    /// Inversion of a matrix whose determinant is exactly zero
    SingularMatrix,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::ZeroLengthVector => write!(f, "Cannot normalize a zero-length vector"),
            MathError::SingularMatrix => write!(f, "Matrix is singular and cannot be inverted"),
        }
    }
}

impl std::error::Error for MathError {}
