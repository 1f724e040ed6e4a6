//! 1D cubic Hermite interpolation kernel
//!
//! The building block of bicubic resampling: a cubic polynomial through
//! four control samples, evaluated per axis and per color channel.

/// Interpolate between four control samples with a cubic Hermite polynomial.
///
/// `a`, `b`, `c`, `d` are the sample values at t = -1, 0, 1, 2 and
/// `t` in [0, 1] is the interpolation parameter between `b` and `c`.
/// The result passes exactly through `b` at t = 0 and `c` at t = 1.
///
/// No clamping is applied: intermediate values may be negative or exceed
/// the channel range, and callers clamp the final result.
pub fn cubic_hermite(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    let ca = -a / 2.0 + (3.0 * b) / 2.0 - (3.0 * c) / 2.0 + d / 2.0;
    let cb = a - (5.0 * b) / 2.0 + 2.0 * c - d / 2.0;
    let cc = -a / 2.0 + c / 2.0;
    let cd = b;

    ca * t * t * t + cb * t * t + cc * t + cd
}
