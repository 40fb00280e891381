//! Schläfli parameters and the fundamental polygon of a `{p,q}` tiling.
//!
//! - `Schlafli`: validated `(p, q)` pair; construction is the only place the
//!   hyperbolic condition is checked.
//! - `fundamental_polygon`: regular p-gon centered at the origin, vertex `i`
//!   at angle `2πi/p` on the circle of Euclidean radius `tanh(R/2)`, where
//!   `cosh(R) = cos(π/q) / sin(π/p)`.

use std::f64::consts::PI;
use std::fmt;

use crate::cfg::MAX_SCHLAFLI;
use crate::complex::{polar, Complex};
use crate::error::TilingError;

/// Schläfli symbol `{p,q}` of a regular hyperbolic tiling.
///
/// Invariant: `3 ≤ p, q ≤ 65536`, `1/p + 1/q < 1/2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Schlafli {
    p: u32,
    q: u32,
}

impl Schlafli {
    /// Validate `(p, q)` before any trigonometry runs. Entries above 65536
    /// are rejected too, since each tile stores `p` vertices.
    pub fn new(p: u32, q: u32) -> Result<Self, TilingError> {
        if p <= MAX_SCHLAFLI && q <= MAX_SCHLAFLI && Self::is_hyperbolic(p, q) {
            Ok(Self { p, q })
        } else {
            Err(TilingError::InvalidParameters { p, q })
        }
    }

    /// `1/p + 1/q < 1/2` in exact integer form `2(p + q) < p q`.
    #[inline]
    pub fn is_hyperbolic(p: u32, q: u32) -> bool {
        p >= 3 && q >= 3 && 2 * (u64::from(p) + u64::from(q)) < u64::from(p) * u64::from(q)
    }

    #[inline]
    pub fn p(&self) -> u32 {
        self.p
    }

    #[inline]
    pub fn q(&self) -> u32 {
        self.q
    }

    /// Hyperbolic distance `R` from the center to each vertex.
    pub fn hyperbolic_radius(&self) -> f64 {
        let ratio = (PI / f64::from(self.q)).cos() / (PI / f64::from(self.p)).sin();
        // ratio > 1 holds for every validated pair; clamp guards rounding only.
        ratio.max(1.0).acosh()
    }

    /// Euclidean radius of the vertex circle in the disk model.
    pub fn disk_radius(&self) -> f64 {
        (self.hyperbolic_radius() / 2.0).tanh()
    }

    /// Vertices in cyclic order, vertex 0 on the positive real axis.
    pub fn fundamental_polygon(&self) -> Vec<Complex> {
        let r = self.disk_radius();
        let p = f64::from(self.p);
        (0..self.p)
            .map(|i| polar(r, 2.0 * PI * f64::from(i) / p))
            .collect()
    }
}

impl fmt::Display for Schlafli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.p, self.q)
    }
}

/// Fundamental polygon for `(p, q)`; rejects non-hyperbolic pairs up front.
pub fn generate_fundamental_region(p: u32, q: u32) -> Result<Vec<Complex>, TilingError> {
    Ok(Schlafli::new(p, q)?.fundamental_polygon())
}
