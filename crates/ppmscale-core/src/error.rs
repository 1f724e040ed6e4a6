//! Error types for ppmscale-core
//!
//! Provides a unified error type for buffer construction. Pixel access
//! is either bounds-checked (returning `Option`) or explicitly clamped,
//! so it carries no error conditions of its own.

use thiserror::Error;

/// ppmscale-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel vector length does not match width * height
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
