//! Generating sets for the symmetry group of a `{p,q}` tiling.
//!
//! Each generator is a conjugated rotation `T_x ∘ R(θ) ∘ T_x⁻¹` about a
//! distinguished point `x` of the fundamental polygon:
//! - `EdgeMidpoint`: half-turn (θ = π) about the hyperbolic midpoint of each
//!   edge. It swaps the edge's endpoints, so the image tile shares that edge.
//! - `Vertex`: rotation by 2π/q about each vertex. Its images overlap the
//!   parent tile, so it is a comparison scheme only.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::complex::Complex;
use crate::error::TilingError;
use crate::mobius::{hyperbolic_midpoint, Mobius};
use crate::region::Schlafli;

/// Which conjugated rotations generate the group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeneratorScheme {
    #[default]
    EdgeMidpoint,
    /// Rotation by 2π/q about each polygon vertex. The polygon's interior
    /// angle exceeds 2π/q, so each image overlaps its parent tile instead of
    /// sharing an edge with it; kept for comparison with `EdgeMidpoint`.
    Vertex,
}

impl fmt::Display for GeneratorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorScheme::EdgeMidpoint => f.pad("edge"),
            GeneratorScheme::Vertex => f.pad("vertex"),
        }
    }
}

impl FromStr for GeneratorScheme {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "edge" | "edge-midpoint" => Ok(GeneratorScheme::EdgeMidpoint),
            "vertex" => Ok(GeneratorScheme::Vertex),
            other => Err(format!(
                "unknown generator scheme `{other}` (expected `edge` or `vertex`)"
            )),
        }
    }
}

/// Hyperbolic midpoints of the edges `(v_i, v_{i+1 mod p})`.
pub fn edge_midpoints(polygon: &[Complex]) -> Result<Vec<Complex>, TilingError> {
    let n = polygon.len();
    (0..n)
        .map(|i| hyperbolic_midpoint(polygon[i], polygon[(i + 1) % n]))
        .collect()
}

/// One generator per edge (or vertex) of `polygon`, in polygon order.
pub fn generators(
    schlafli: &Schlafli,
    polygon: &[Complex],
    scheme: GeneratorScheme,
) -> Result<Vec<Mobius>, TilingError> {
    match scheme {
        GeneratorScheme::EdgeMidpoint => Ok(edge_midpoints(polygon)?
            .into_iter()
            .map(Mobius::half_turn_about)
            .collect()),
        GeneratorScheme::Vertex => {
            let theta = 2.0 * PI / f64::from(schlafli.q());
            Ok(polygon
                .iter()
                .map(|&v| Mobius::rotation_about(v, theta))
                .collect())
        }
    }
}
