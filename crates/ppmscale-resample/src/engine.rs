//! Whole-image resize orchestration
//!
//! Computes destination dimensions, allocates the destination buffer
//! exactly once, and fills it in a single forward pass by delegating
//! each destination pixel to the selected sampler: bicubic for an
//! arbitrary scale factor, 2x box averaging for the fixed halving mode.

use crate::bicubic::sample_bicubic;
use crate::reduce::downsample_half;
use crate::{ResampleError, ResampleResult};
use ppmscale_core::PixelBuffer;

/// How to rescale an image: an arbitrary factor or the fixed 2x reduction.
///
/// A closed two-variant choice, selected on the command line by either a
/// decimal factor or the literal `2x` token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleSpec {
    /// Resample by a positive factor with bicubic interpolation
    Factor(f64),
    /// Halve with 2x2 box averaging
    Half,
}

/// Token selecting the fixed 2x box downsample on the command line
const HALF_TOKEN: &str = "2x";

impl ScaleSpec {
    /// Parse a command-line scale token.
    ///
    /// `2x` selects the box downsample; anything else must parse as a
    /// positive, finite decimal factor.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::InvalidScaleFactor`] for unparseable,
    /// non-positive, or non-finite tokens.
    pub fn parse(token: &str) -> ResampleResult<Self> {
        if token == HALF_TOKEN {
            return Ok(ScaleSpec::Half);
        }
        let factor: f64 = token
            .parse()
            .map_err(|_| ResampleError::InvalidScaleFactor(token.to_string()))?;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ResampleError::InvalidScaleFactor(token.to_string()));
        }
        Ok(ScaleSpec::Factor(factor))
    }
}

/// Options for resize operations
#[derive(Debug, Clone, Default)]
pub struct ResizeOptions {
    /// Write a dimension trace to stderr while resampling
    pub verbose: bool,
}

/// Resize an image according to a scale specification.
///
/// Dispatches to [`resize_by_scale`] or [`resize_half`].
pub fn resize(
    src: &PixelBuffer,
    spec: ScaleSpec,
    options: &ResizeOptions,
) -> ResampleResult<PixelBuffer> {
    let dst = match spec {
        ScaleSpec::Factor(factor) => resize_by_scale(src, factor)?,
        ScaleSpec::Half => resize_half(src),
    };
    if options.verbose {
        eprintln!(
            "resampled {}x{} -> {}x{}",
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        );
    }
    Ok(dst)
}

/// Resample an image by an arbitrary positive factor, bicubically.
///
/// Destination dimensions are `floor(width * scale)` by
/// `floor(height * scale)`; the destination buffer is allocated with
/// exactly that many pixels and filled in one forward pass. Each
/// destination pixel (x, y) is sampled at normalized coordinates
/// `u = x / (dw - 1)`, `v = y / (dh - 1)`, with the denominator clamped
/// to at least 1 so that a single-column or single-row destination maps
/// to u = 0 / v = 0 instead of dividing by zero.
///
/// A destination dimension of zero yields a valid empty buffer.
///
/// # Errors
///
/// - [`ResampleError::InvalidScaleFactor`] if `scale` is non-positive
///   or non-finite
/// - [`ResampleError::DestinationTooLarge`] if a scaled dimension
///   overflows `u32`
pub fn resize_by_scale(src: &PixelBuffer, scale: f64) -> ResampleResult<PixelBuffer> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ResampleError::InvalidScaleFactor(scale.to_string()));
    }

    let dw_f = (f64::from(src.width()) * scale).floor();
    let dh_f = (f64::from(src.height()) * scale).floor();
    if dw_f > f64::from(u32::MAX) || dh_f > f64::from(u32::MAX) {
        return Err(ResampleError::DestinationTooLarge {
            width: dw_f,
            height: dh_f,
        });
    }
    let dw = dw_f as u32;
    let dh = dh_f as u32;

    let mut dst = PixelBuffer::new(dw, dh);
    let u_den = f64::from(dw.saturating_sub(1).max(1));
    let v_den = f64::from(dh.saturating_sub(1).max(1));

    for y in 0..dh {
        let v = f64::from(y) / v_den;
        for x in 0..dw {
            let u = f64::from(x) / u_den;
            dst.set_pixel_unchecked(x, y, sample_bicubic(src, u, v));
        }
    }

    Ok(dst)
}

/// Halve an image with fixed 2x box averaging.
///
/// See [`downsample_half`] for the exact quantization behavior.
pub fn resize_half(src: &PixelBuffer) -> PixelBuffer {
    downsample_half(src)
}
