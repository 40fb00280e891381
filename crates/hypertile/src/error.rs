//! Error type for tiling construction and transform evaluation.

/// Errors reported by the tiling engine.
///
/// Configuration errors are raised before any floating point work; a
/// degenerate transform aborts the current orbit build as a whole.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TilingError {
    /// `(p, q)` does not describe a supported hyperbolic tiling: needs
    /// `3 ≤ p, q ≤ 65536` and `1/p + 1/q < 1/2`.
    #[error("invalid tiling parameters {{{p},{q}}}: need 3 ≤ p, q ≤ 65536 and 1/p + 1/q < 1/2")]
    InvalidParameters { p: u32, q: u32 },

    /// A Möbius denominator or determinant with numerically zero modulus.
    #[error("degenerate Möbius transform: modulus {modulus:e} is numerically zero")]
    DegenerateTransform { modulus: f64 },

    /// A point that should lie in the open unit disk does not.
    #[error("point outside the open unit disk: |z| = {modulus:.6}")]
    OutsideDisk { modulus: f64 },

    /// Dedup key precision outside the supported range.
    #[error("invalid key precision: {decimals} decimals (at most 12 supported)")]
    InvalidPrecision { decimals: u32 },
}
