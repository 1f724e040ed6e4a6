//! ppmscale-resample - Image resampling engine
//!
//! This crate provides the numerical core of the ppmscale tool:
//!
//! - 1D cubic Hermite interpolation ([`cubic_hermite`])
//! - 16-tap bicubic pixel sampling ([`sample_bicubic`])
//! - Fixed 2x box downsampling ([`downsample_half`])
//! - Whole-image resize orchestration ([`resize`], [`resize_by_scale`],
//!   [`resize_half`])
//!
//! All operations are single-threaded pure computation over in-memory
//! buffers; the source is read-only and every destination pixel is
//! written exactly once.

pub mod bicubic;
pub mod engine;
mod error;
pub mod kernel;
pub mod reduce;

pub use bicubic::sample_bicubic;
pub use engine::{ResizeOptions, ScaleSpec, resize, resize_by_scale, resize_half};
pub use error::{ResampleError, ResampleResult};
pub use kernel::cubic_hermite;
pub use reduce::downsample_half;
