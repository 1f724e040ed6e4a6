//! ppmscale-io - Binary PPM (P6) I/O for the ppmscale resampling tool
//!
//! This crate reads and writes the uncompressed binary RGB pixel-map
//! format over generic readers/writers, plus path-level helpers used by
//! the command-line tool. Only 8-bit-per-channel RGB (maxval 255) is
//! supported.

mod error;
pub mod ppm;

pub use error::{IoError, IoResult};
pub use ppm::{read_ppm, write_ppm};

use ppmscale_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read a binary PPM image from a file path.
pub fn read_ppm_file<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let file = File::open(path)?;
    ppm::read_ppm(BufReader::new(file))
}

/// Write a binary PPM image to a file path.
pub fn write_ppm_file<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    ppm::write_ppm(buffer, &mut writer)?;
    writer.flush()?;
    Ok(())
}
