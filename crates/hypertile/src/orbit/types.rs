//! Data types for orbit enumeration.

use crate::cfg::MAX_KEY_DECIMALS;
use crate::complex::Complex;
use crate::error::TilingError;
use crate::mobius::Mobius;

use super::generators::GeneratorScheme;

/// Orbit enumeration configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitCfg {
    /// BFS layers explored beyond the identity (0 yields the fundamental tile only).
    pub max_depth: usize,
    /// Decimal places kept per coefficient component in `TransformKey`.
    pub key_decimals: u32,
    pub scheme: GeneratorScheme,
}

impl Default for OrbitCfg {
    fn default() -> Self {
        Self {
            max_depth: 3,
            key_decimals: 3,
            scheme: GeneratorScheme::EdgeMidpoint,
        }
    }
}

impl OrbitCfg {
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), TilingError> {
        if self.key_decimals > MAX_KEY_DECIMALS {
            return Err(TilingError::InvalidPrecision {
                decimals: self.key_decimals,
            });
        }
        Ok(())
    }
}

/// Canonical dedup key of a group element.
///
/// Layout: `[a.re, a.im, b.re, b.im, c.re, c.im, d.re, d.im]`, each scaled by
/// `10^decimals` and rounded, after dividing the matrix by `√det`. The sign
/// is fixed so the first non-zero entry is positive, since `M` and `−M` are
/// the same map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransformKey(pub [i64; 8]);

impl TransformKey {
    pub fn of(m: &Mobius, decimals: u32) -> Result<Self, TilingError> {
        let n = m.normalized()?;
        let scale = 10f64.powi(decimals as i32);
        let mut k = [0i64; 8];
        for (slot, z) in n.coefficients().iter().enumerate() {
            k[2 * slot] = (z.re * scale).round() as i64;
            k[2 * slot + 1] = (z.im * scale).round() as i64;
        }
        if k.iter().find(|&&v| v != 0).is_some_and(|&v| v < 0) {
            for v in &mut k {
                *v = -*v;
            }
        }
        Ok(Self(k))
    }
}

/// One image of the fundamental polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    /// Group element carrying the fundamental polygon onto this tile.
    pub transform: Mobius,
    /// Images of the fundamental vertices, same cyclic order.
    pub vertices: Vec<Complex>,
    /// BFS layer at which the element was discovered.
    pub depth: usize,
}

impl Tile {
    /// Image of the tile's vertices under an additional map (e.g. the view).
    pub fn mapped(&self, view: &Mobius) -> Vec<Complex> {
        self.vertices.iter().map(|&z| view.apply(z)).collect()
    }
}
