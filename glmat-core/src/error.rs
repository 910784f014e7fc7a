/// Errors reported by matrix construction and projection
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A matrix buffer did not hold exactly 16 elements.
    #[error("Invalid matrix dimensions: expected {expected} elements, got {actual}")]
    InvalidDimensions { expected: usize, actual: usize },

    /// Projection parameters would produce a matrix with NaN or infinite entries.
    #[error("Degenerate projection: {0}")]
    DegenerateProjection(&'static str),

    /// Aspect ratio must be finite and strictly positive.
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspect(f32),
}

pub type Result<T> = std::result::Result<T, MatrixError>;

/// Checks that a raw buffer can hold a 4x4 matrix.
pub(crate) fn check_len(len: usize) -> Result<()> {
    if len == crate::matrix::MATRIX_LEN {
        Ok(())
    } else {
        Err(MatrixError::InvalidDimensions {
            expected: crate::matrix::MATRIX_LEN,
            actual: len,
        })
    }
}
