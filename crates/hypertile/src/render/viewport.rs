use nalgebra::Point2;

use crate::cfg::DISK_FILL;
use crate::complex::{c, Complex};

/// Disk-to-screen mapping: `screen = center + (re, −im) · radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl Viewport {
    /// Center of a `width × height` surface; the unit circle spans
    /// `0.45 · min(width, height) · zoom` pixels.
    pub fn new(width: f64, height: f64, zoom: f64) -> Self {
        Self {
            center: Point2::new(width / 2.0, height / 2.0),
            radius: width.min(height) * DISK_FILL * zoom,
        }
    }

    #[inline]
    pub fn to_screen(&self, z: Complex) -> Point2<f64> {
        Point2::new(
            self.center.x + z.re * self.radius,
            self.center.y - z.im * self.radius,
        )
    }

    #[inline]
    pub fn from_screen(&self, x: f64, y: f64) -> Complex {
        c(
            (x - self.center.x) / self.radius,
            -(y - self.center.y) / self.radius,
        )
    }
}
