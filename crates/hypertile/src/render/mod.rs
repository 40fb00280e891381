//! Rendering of disk geometry onto an abstract drawing surface.
//!
//! - `Viewport`: affine disk ↔ screen mapping (y axis flipped).
//! - `Surface`: the drawing primitives the embedding application provides;
//!   `PathRecorder` is an in-memory implementation.
//! - `geodesic`: hyperbolic segments as adaptively bisected polylines, and
//!   polygons whose edges are such segments.

mod geodesic;
mod surface;
mod viewport;

pub use geodesic::{
    draw_geodesic, draw_polygon, geodesic_points, geodesic_polyline, GeodesicCfg,
};
pub use surface::{PathCmd, PathRecorder, Rgba, Surface};
pub use viewport::Viewport;
