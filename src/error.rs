//! Central error handling for rope mesh operations.
//!
//! The geometry core is total: degenerate numeric input clamps to safe
//! values and always yields drawable (possibly empty) buffers. These errors
//! cover the GPU adapter and the strip validation pass only.

/// Centralized error type for rope mesh operations.
#[derive(thiserror::Error, Debug)]
pub enum RopeMeshError {
    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl RopeMeshError {
    /// Convenience constructors for common error types
    pub fn upload<T: ToString>(msg: T) -> Self {
        RopeMeshError::Upload(msg.to_string())
    }

    pub fn validation<T: ToString>(msg: T) -> Self {
        RopeMeshError::Validation(msg.to_string())
    }
}

/// Result type alias for rope mesh operations.
pub type RopeMeshResult<T> = Result<T, RopeMeshError>;
