//! Tolerance defaults shared across the crate (internal).
//!
//! Policy
//! - Defaults are fixed constants so call sites do not juggle tolerances.
//!   The two knobs callers legitimately tune (dedup precision and geodesic
//!   subdivision) live in `OrbitCfg` and `GeodesicCfg` instead.

/// Modulus below which a Möbius denominator (or determinant) counts as zero.
pub(crate) const DEGENERATE_EPS: f64 = 1e-12;
/// Largest accepted `key_decimals`; `10^12` times coefficient magnitudes
/// seen at practical depths still fits comfortably in an `i64`.
pub(crate) const MAX_KEY_DECIMALS: u32 = 12;
/// Largest accepted `p` or `q`; `p` is the vertex count of every tile.
pub(crate) const MAX_SCHLAFLI: u32 = 1 << 16;
/// Fraction of `min(width, height)` covered by the disk radius at zoom 1.
pub(crate) const DISK_FILL: f64 = 0.45;
/// Zoom clamp and wheel sensitivity used by `ViewportState`.
pub(crate) const ZOOM_MIN: f64 = 0.1;
pub(crate) const ZOOM_MAX: f64 = 50.0;
pub(crate) const WHEEL_SPEED: f64 = 0.001;
