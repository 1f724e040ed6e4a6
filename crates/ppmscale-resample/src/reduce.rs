//! Fixed 2x box downsampling
//!
//! Halves an image by averaging non-overlapping 2x2 blocks. Independent
//! of the bicubic path and considerably cheaper.

use ppmscale_core::{PixelBuffer, Rgb};

/// Downsample an image to half resolution with 2x2 box averaging.
///
/// The destination is (width / 2, height / 2) by integer division; a
/// leftover row or column of an odd-sized source is discarded. Each
/// destination channel is `p00/4 + p10/4 + p01/4 + p11/4` with every
/// term truncated before summation. This per-term truncation is kept
/// bit-for-bit (it biases up to 3 levels toward black versus a true
/// average) for compatibility with previously produced output.
pub fn downsample_half(src: &PixelBuffer) -> PixelBuffer {
    let dw = src.width() / 2;
    let dh = src.height() / 2;
    let mut dst = PixelBuffer::new(dw, dh);

    for y in 0..dh {
        for x in 0..dw {
            let p00 = src.pixel_unchecked(2 * x, 2 * y);
            let p10 = src.pixel_unchecked(2 * x + 1, 2 * y);
            let p01 = src.pixel_unchecked(2 * x, 2 * y + 1);
            let p11 = src.pixel_unchecked(2 * x + 1, 2 * y + 1);

            let avg = Rgb::new(
                p00.r / 4 + p10.r / 4 + p01.r / 4 + p11.r / 4,
                p00.g / 4 + p10.g / 4 + p01.g / 4 + p11.g / 4,
                p00.b / 4 + p10.b / 4 + p01.b / 4 + p11.b / 4,
            );
            dst.set_pixel_unchecked(x, y, avg);
        }
    }

    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, color: Rgb) -> PixelBuffer {
        let pixels = vec![color; (width * height) as usize];
        PixelBuffer::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_uniform_divisible_by_four_is_exact() {
        let src = uniform(4, 4, Rgb::new(100, 200, 0));
        let dst = downsample_half(&src);
        assert_eq!(dst.width(), 2);
        assert_eq!(dst.height(), 2);
        assert!(dst.pixels().iter().all(|&p| p == Rgb::new(100, 200, 0)));
    }

    #[test]
    fn test_uniform_truncation_bias() {
        // 7 / 4 = 1 per term, so four terms give 4: bias of 3 toward black
        let src = uniform(2, 2, Rgb::new(7, 103, 255));
        let dst = downsample_half(&src);
        assert_eq!(dst.pixel(0, 0), Some(Rgb::new(4, 100, 252)));
    }

    #[test]
    fn test_block_average() {
        let pixels = vec![
            Rgb::new(40, 0, 0),
            Rgb::new(80, 0, 0),
            Rgb::new(120, 0, 0),
            Rgb::new(160, 0, 0),
        ];
        let src = PixelBuffer::from_pixels(2, 2, pixels).unwrap();
        let dst = downsample_half(&src);
        // 40/4 + 80/4 + 120/4 + 160/4 = 10 + 20 + 30 + 40
        assert_eq!(dst.pixel(0, 0), Some(Rgb::new(100, 0, 0)));
    }

    #[test]
    fn test_odd_dimensions_discard_leftovers() {
        // Poison the last row and column; they must not be sampled
        let mut src = uniform(5, 3, Rgb::new(100, 100, 100));
        for x in 0..5 {
            src.set_pixel_unchecked(x, 2, Rgb::new(255, 255, 255));
        }
        for y in 0..3 {
            src.set_pixel_unchecked(4, y, Rgb::new(255, 255, 255));
        }

        let dst = downsample_half(&src);
        assert_eq!(dst.width(), 2);
        assert_eq!(dst.height(), 1);
        assert!(dst.pixels().iter().all(|&p| p == Rgb::new(100, 100, 100)));
    }

    #[test]
    fn test_single_pixel_source_is_empty() {
        let src = uniform(1, 1, Rgb::new(5, 5, 5));
        let dst = downsample_half(&src);
        assert_eq!(dst.width(), 0);
        assert_eq!(dst.height(), 0);
        assert!(dst.is_empty());
    }
}
