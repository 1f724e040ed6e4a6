//! Binary PPM (P6) format support
//!
//! Reads and writes the binary RGB pixel-map variant: a `P6` signature,
//! optional `#` comment lines, whitespace-separated width/height/maxval
//! header tokens, a single whitespace separator, then raw RGB triples in
//! row-major order (3 bytes per pixel, no padding).
//!
//! Only 8-bit channels are supported: a max channel value other than 255
//! is a load error.

use crate::{IoError, IoResult};
use ppmscale_core::{PixelBuffer, Rgb};
use std::io::{Read, Write};

/// Binary RGB pixel-map signature
const PPM_MAGIC: &[u8; 2] = b"P6";

/// The only supported max channel value (8-bit channels)
const MAX_CHANNEL_VALUE: u32 = 255;

/// Attribution written as a header comment on encode
const CREATOR: &str = "ppmscale";

/// Read a single byte from the reader.
fn read_byte<R: Read>(reader: &mut R) -> IoResult<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read the next unsigned decimal header token.
///
/// Skips whitespace and `#` comment lines (comments run to the end of
/// the line) before the token, then consumes digits. The byte that
/// terminates the token must be whitespace and is consumed; this gives
/// the single-separator semantics required before the binary payload.
fn read_header_value<R: Read>(reader: &mut R, what: &str) -> IoResult<u32> {
    let mut byte = read_byte(reader)?;

    // Skip whitespace and comment lines preceding the token
    loop {
        if byte == b'#' {
            while read_byte(reader)? != b'\n' {}
            byte = read_byte(reader)?;
        } else if byte.is_ascii_whitespace() {
            byte = read_byte(reader)?;
        } else {
            break;
        }
    }

    if !byte.is_ascii_digit() {
        return Err(IoError::InvalidHeader(format!(
            "expected {what}, found byte 0x{byte:02x}"
        )));
    }

    let mut value: u32 = 0;
    while byte.is_ascii_digit() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(byte - b'0')))
            .ok_or_else(|| IoError::InvalidHeader(format!("{what} out of range")))?;
        byte = read_byte(reader)?;
    }

    // The token terminator doubles as the separator and is consumed
    if !byte.is_ascii_whitespace() {
        return Err(IoError::InvalidHeader(format!(
            "{what} not followed by whitespace"
        )));
    }

    Ok(value)
}

/// Read a binary PPM (P6) image.
///
/// # Errors
///
/// - [`IoError::BadMagic`] if the signature is not `P6`
/// - [`IoError::InvalidHeader`] on malformed dimension/maxval tokens
/// - [`IoError::UnsupportedMaxval`] if the max channel value is not 255
/// - [`IoError::TruncatedData`] if the pixel payload is short
pub fn read_ppm<R: Read>(mut reader: R) -> IoResult<PixelBuffer> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic)?;
    if &magic != PPM_MAGIC {
        return Err(IoError::BadMagic);
    }

    let width = read_header_value(&mut reader, "width")?;
    let height = read_header_value(&mut reader, "height")?;
    let maxval = read_header_value(&mut reader, "max channel value")?;
    if maxval != MAX_CHANNEL_VALUE {
        return Err(IoError::UnsupportedMaxval(maxval));
    }

    let expected = u64::from(width) * u64::from(height) * 3;
    let expected = usize::try_from(expected)
        .map_err(|_| IoError::InvalidHeader(format!("image too large: {width}x{height}")))?;

    let mut payload = vec![0u8; expected];
    reader.read_exact(&mut payload).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            IoError::TruncatedData { expected }
        } else {
            IoError::Io(e)
        }
    })?;

    let pixels = payload
        .chunks_exact(3)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect();
    Ok(PixelBuffer::from_pixels(width, height, pixels)?)
}

/// Write a binary PPM (P6) image.
///
/// Emits the signature line, an attribution comment, the width/height
/// line, the max-value line, then the raw payload.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> IoResult<()> {
    write!(
        writer,
        "P6\n# Created by {CREATOR}\n{} {}\n{MAX_CHANNEL_VALUE}\n",
        buffer.width(),
        buffer.height()
    )?;

    let mut payload = Vec::with_capacity(buffer.pixels().len() * 3);
    for pixel in buffer.pixels() {
        payload.extend_from_slice(&pixel.channels());
    }
    writer.write_all(&payload)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ppm_bytes(header: &str, payload: &[u8]) -> Vec<u8> {
        let mut bytes = header.as_bytes().to_vec();
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn test_read_basic() {
        let data = ppm_bytes("P6\n2 1\n255\n", &[255, 0, 0, 0, 0, 255]);
        let buf = read_ppm(Cursor::new(data)).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 1);
        assert_eq!(buf.pixel(0, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(buf.pixel(1, 0), Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn test_read_with_comments() {
        let data = ppm_bytes(
            "P6\n# made by hand\n# second comment\n2 2\n# even here\n255\n",
            &[0; 12],
        );
        let buf = read_ppm(Cursor::new(data)).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 2);
    }

    #[test]
    fn test_read_extra_whitespace() {
        let data = ppm_bytes("P6\n  3\t1\r\n 255\n", &[7; 9]);
        let buf = read_ppm(Cursor::new(data)).unwrap();
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 1);
    }

    #[test]
    fn test_read_bad_magic() {
        let data = ppm_bytes("P5\n2 1\n255\n", &[0; 2]);
        assert!(matches!(
            read_ppm(Cursor::new(data)),
            Err(IoError::BadMagic)
        ));
    }

    #[test]
    fn test_read_unsupported_maxval() {
        let data = ppm_bytes("P6\n2 1\n65535\n", &[0; 12]);
        assert!(matches!(
            read_ppm(Cursor::new(data)),
            Err(IoError::UnsupportedMaxval(65535))
        ));
    }

    #[test]
    fn test_read_malformed_header() {
        let data = ppm_bytes("P6\nabc 1\n255\n", &[0; 3]);
        assert!(matches!(
            read_ppm(Cursor::new(data)),
            Err(IoError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_read_truncated_payload() {
        let data = ppm_bytes("P6\n2 2\n255\n", &[0; 7]);
        assert!(matches!(
            read_ppm(Cursor::new(data)),
            Err(IoError::TruncatedData { expected: 12 })
        ));
    }

    #[test]
    fn test_write_header_bytes() {
        let buf = PixelBuffer::from_pixels(1, 1, vec![Rgb::new(1, 2, 3)]).unwrap();
        let mut out = Vec::new();
        write_ppm(&buf, &mut out).unwrap();
        assert_eq!(out, b"P6\n# Created by ppmscale\n1 1\n255\n\x01\x02\x03");
    }

    #[test]
    fn test_roundtrip() {
        let pixels: Vec<Rgb> = (0..12u8).map(|i| Rgb::new(i, i * 2, 255 - i)).collect();
        let buf = PixelBuffer::from_pixels(4, 3, pixels).unwrap();

        let mut bytes = Vec::new();
        write_ppm(&buf, &mut bytes).unwrap();

        // The attribution comment must be skipped transparently on re-read
        let buf2 = read_ppm(Cursor::new(bytes)).unwrap();
        assert_eq!(buf2, buf);
    }

    #[test]
    fn test_roundtrip_empty() {
        let buf = PixelBuffer::new(0, 0);
        let mut bytes = Vec::new();
        write_ppm(&buf, &mut bytes).unwrap();
        let buf2 = read_ppm(Cursor::new(bytes)).unwrap();
        assert_eq!(buf2.width(), 0);
        assert_eq!(buf2.height(), 0);
    }
}
