//! ppmscale - PPM image resampling
//!
//! Resamples binary PPM (P6) images up or down by an arbitrary factor
//! using bicubic interpolation, or down by a fixed 2x with box
//! averaging.
//!
//! # Example
//!
//! ```
//! use ppmscale::{PixelBuffer, Rgb};
//! use ppmscale::resample::{ScaleSpec, ResizeOptions, resize};
//!
//! let src = PixelBuffer::from_pixels(4, 4, vec![Rgb::new(10, 20, 30); 16]).unwrap();
//! let dst = resize(&src, ScaleSpec::Factor(2.0), &ResizeOptions::default()).unwrap();
//! assert_eq!(dst.width(), 8);
//! assert_eq!(dst.height(), 8);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ppmscale_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ppmscale_io as io;
pub use ppmscale_resample as resample;
