//! Complex values of the Poincaré disk.
//!
//! We use the `num-complex` type re-exported by `nalgebra` rather than a
//! bespoke pair type: arithmetic (by scalar and by complex), `conj`, `norm`,
//! `norm_sqr` and `arg` (atan2, in (−π, π]) all come for free. This module
//! only adds the few helpers the geometry needs, notably a division that
//! reports degenerate divisors instead of producing NaN/∞.

use crate::cfg::DEGENERATE_EPS;
use crate::error::TilingError;

/// A point of the complex plane; disk points satisfy `|z| < 1`.
pub type Complex = nalgebra::Complex<f64>;

pub const ORIGIN: Complex = Complex::new(0.0, 0.0);
pub const ONE: Complex = Complex::new(1.0, 0.0);

/// Shorthand constructor.
#[inline]
pub const fn c(re: f64, im: f64) -> Complex {
    Complex::new(re, im)
}

/// Point at modulus `r` and angle `theta`.
#[inline]
pub fn polar(r: f64, theta: f64) -> Complex {
    Complex::from_polar(r, theta)
}

/// `num / den`, failing when `|den|` is numerically zero.
#[inline]
pub fn checked_div(num: Complex, den: Complex) -> Result<Complex, TilingError> {
    let modulus = den.norm();
    if !(modulus > DEGENERATE_EPS) {
        return Err(TilingError::DegenerateTransform { modulus });
    }
    Ok(num / den)
}
