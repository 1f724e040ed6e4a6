//! ppmscale-core - Basic data structures for PPM resampling
//!
//! This crate provides the fundamental data structures used throughout
//! the ppmscale tool:
//!
//! - [`Rgb`] - An 8-bit RGB pixel
//! - [`PixelBuffer`] - The in-memory image container (row-major RGB)
//!
//! Pixel access is either bounds-checked or explicitly edge-clamped;
//! the clamped accessor is what allows the bicubic sampler to probe
//! one pixel beyond each image edge.

pub mod buffer;
pub mod error;

pub use buffer::{PixelBuffer, Rgb};
pub use error::{Error, Result};
