//! Error types for ppmscale-resample

use thiserror::Error;

/// Errors that can occur while resampling
#[derive(Debug, Error)]
pub enum ResampleError {
    /// Invalid scale factor (non-positive, non-finite, or unparseable)
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    /// Destination dimensions exceed the representable range
    #[error("destination too large: {width}x{height}")]
    DestinationTooLarge { width: f64, height: f64 },
}

/// Result type for resample operations
pub type ResampleResult<T> = Result<T, ResampleError>;
