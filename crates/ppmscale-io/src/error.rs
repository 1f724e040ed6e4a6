//! I/O error types
//!
//! Provides a unified error type for PPM decoding and encoding. All
//! conditions are terminal for a single-shot conversion: a load either
//! yields a complete buffer or fails without partial results.

use thiserror::Error;

/// Error type for PPM I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not start with the binary PPM signature
    #[error("invalid image format (must be 'P6')")]
    BadMagic,

    /// A width/height/maxval header token is missing or malformed
    #[error("invalid PPM header: {0}")]
    InvalidHeader(String),

    /// The max channel value is not 255 (only 8-bit RGB is supported)
    #[error("unsupported max channel value {0} (only 255 supported)")]
    UnsupportedMaxval(u32),

    /// The pixel payload ended before width * height * 3 bytes
    #[error("truncated pixel data: expected {expected} bytes")]
    TruncatedData { expected: usize },

    /// An error from the core library (e.g. pixel count mismatch)
    #[error("core error: {0}")]
    Core(#[from] ppmscale_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
