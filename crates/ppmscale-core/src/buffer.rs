//! The in-memory image container
//!
//! `PixelBuffer` is the fundamental image type in ppmscale: a width, a
//! height, and a flat row-major vector of 8-bit RGB triples
//! (`index = x + width * y`).
//!
//! # Invariant
//!
//! `pixels.len() == width * height` at all times after construction.
//! Access is either bounds-checked ([`PixelBuffer::pixel`]) or explicitly
//! clamped ([`PixelBuffer::pixel_clamped`]).
//!
//! # Ownership model
//!
//! A buffer is exclusively owned by whichever component created it:
//! the decoder produces a source buffer, the resize engine produces a
//! destination buffer. There is no shared ownership and no
//! mutation-in-place across components.

use crate::error::{Error, Result};

/// An 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a pixel from its three channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Return the channels as an array, in R, G, B order.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a pixel from a channel array in R, G, B order.
    #[inline]
    pub const fn from_channels(ch: [u8; 3]) -> Self {
        Rgb {
            r: ch[0],
            g: ch[1],
            b: ch[2],
        }
    }
}

/// In-memory RGB image: width, height, and a row-major pixel array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a zero-filled (black) buffer of the given dimensions.
    ///
    /// Exactly `width * height` pixels are allocated. Zero-sized
    /// dimensions are allowed and yield an empty buffer.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` exceeds the addressable size.
    pub fn new(width: u32, height: u32) -> Self {
        let len = Self::pixel_count(width, height);
        PixelBuffer {
            width,
            height,
            pixels: vec![Rgb::default(); len],
        }
    }

    /// Build a buffer from existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelCountMismatch`] if `pixels.len()` is not
    /// exactly `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = Self::pixel_count(width, height);
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels,
        })
    }

    /// Compute the pixel count for given dimensions.
    ///
    /// Uses u64 arithmetic to prevent overflow for large dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the result would exceed `usize::MAX`.
    #[inline]
    fn pixel_count(width: u32, height: u32) -> usize {
        let count = u64::from(width) * u64::from(height);
        usize::try_from(count)
            .unwrap_or_else(|_| panic!("image too large: {width}x{height} pixels"))
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the flat row-major pixel array.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }

    /// Get the pixel at the nearest in-bounds coordinate.
    ///
    /// Coordinates may be arbitrary signed integers; each axis is clamped
    /// independently to `[0, dim - 1]` before indexing. Bicubic sampling
    /// relies on this to probe one pixel beyond each edge.
    ///
    /// # Panics
    ///
    /// Panics if the buffer has a zero-sized dimension.
    pub fn pixel_clamped(&self, x: i64, y: i64) -> Rgb {
        assert!(
            self.width > 0 && self.height > 0,
            "clamped access on an empty buffer"
        );
        let cx = x.clamp(0, i64::from(self.width) - 1) as u32;
        let cy = y.clamp(0, i64::from(self.height) - 1) as u32;
        self.pixels[self.index(cx, cy)]
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: Rgb) {
        let idx = self.index(x, y);
        self.pixels[idx] = val;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + self.width as usize * y as usize
    }
}
