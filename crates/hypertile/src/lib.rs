//! Regular `{p,q}` tilings of the hyperbolic plane in the Poincaré disk.
//!
//! Layers (leaf first)
//! - `complex`: disk points (`nalgebra::Complex<f64>`) and checked division.
//! - `mobius`: disk isometries as 2×2 complex matrices, hyperbolic midpoint.
//! - `region`: validated Schläfli pairs and the fundamental polygon.
//! - `orbit`: generating sets and bounded BFS over the group orbit.
//! - `render`: disk ↔ screen mapping and geodesic polygons on a `Surface`.
//! - `view`: pan/rotate/zoom state owned by an embedding application.
//!
//! Everything is synchronous and deterministic. A tiling is computed once per
//! `(p, q, depth)`; per frame only the tile vertices are re-mapped through the
//! view transform and redrawn.

mod cfg;
pub mod complex;
pub mod error;
pub mod mobius;
pub mod orbit;
pub mod region;
pub mod render;
pub mod view;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use complex::Complex;
pub use error::TilingError;
pub use mobius::Mobius;
pub use orbit::{enumerate_tiles, OrbitCfg, Tile, Tiling};
pub use region::{generate_fundamental_region, Schlafli};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::complex::{c, polar, Complex};
    pub use crate::error::TilingError;
    pub use crate::mobius::{hyperbolic_distance, hyperbolic_midpoint, Mobius};
    pub use crate::orbit::{
        enumerate_orbit, enumerate_tiles, generators, GeneratorScheme, OrbitCfg, Tile, Tiling,
        TransformKey,
    };
    pub use crate::region::{generate_fundamental_region, Schlafli};
    pub use crate::render::{
        draw_polygon, geodesic_polyline, GeodesicCfg, PathRecorder, Rgba, Surface, Viewport,
    };
    pub use crate::view::{render_frame, FrameStyle, PointerButton, ViewportState};
}
