//! Hyperbolic segments as adaptively bisected polylines.
//!
//! A segment `[u, v]` is split at its exact hyperbolic midpoint (not the
//! Euclidean one) until the disk-space chord is shorter than `min_chord` or
//! `max_depth` bisections have been applied, so at most `2^max_depth` screen
//! segments are produced per geodesic. We use an explicit work stack of
//! `(u, v, depth)` entries; popping the left half first keeps the output in
//! path order.

use nalgebra::Point2;

use crate::complex::Complex;
use crate::mobius::hyperbolic_midpoint;

use super::surface::{Rgba, Surface};
use super::viewport::Viewport;

/// Subdivision bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicCfg {
    /// Maximum number of bisection levels.
    pub max_depth: u32,
    /// Disk-space chord below which a piece is drawn straight.
    pub min_chord: f64,
}

impl Default for GeodesicCfg {
    fn default() -> Self {
        Self {
            max_depth: 5,
            min_chord: 0.01,
        }
    }
}

/// Disk points after `u` along the geodesic to `v`; the last one is `v`.
pub fn geodesic_points(u: Complex, v: Complex, cfg: GeodesicCfg) -> Vec<Complex> {
    let mut out = Vec::new();
    let mut stack = vec![(u, v, 0u32)];
    while let Some((a, b, depth)) = stack.pop() {
        if depth >= cfg.max_depth || (a - b).norm() < cfg.min_chord {
            out.push(b);
            continue;
        }
        match hyperbolic_midpoint(a, b) {
            Ok(mid) => {
                stack.push((mid, b, depth + 1));
                stack.push((a, mid, depth + 1));
            }
            Err(err) => {
                tracing::trace!(%err, "geodesic piece drawn straight");
                out.push(b);
            }
        }
    }
    out
}

/// Screen polyline from `to_screen(u)` to `to_screen(v)` inclusive.
pub fn geodesic_polyline(
    viewport: &Viewport,
    u: Complex,
    v: Complex,
    cfg: GeodesicCfg,
) -> Vec<Point2<f64>> {
    std::iter::once(u)
        .chain(geodesic_points(u, v, cfg))
        .map(|z| viewport.to_screen(z))
        .collect()
}

/// Extend the current path along the geodesic; assumes the pen is at `u`.
pub fn draw_geodesic<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: &Viewport,
    u: Complex,
    v: Complex,
    cfg: GeodesicCfg,
) {
    for z in geodesic_points(u, v, cfg) {
        surface.line_to(viewport.to_screen(z));
    }
}

/// Closed polygon with geodesic edges, filled with `fill` and stroked white.
/// No-op for an empty vertex list.
pub fn draw_polygon<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: &Viewport,
    vertices: &[Complex],
    fill: Rgba,
    cfg: GeodesicCfg,
) {
    let Some(&first) = vertices.first() else {
        return;
    };
    surface.begin_path();
    surface.move_to(viewport.to_screen(first));
    let n = vertices.len();
    for i in 0..n {
        draw_geodesic(surface, viewport, vertices[i], vertices[(i + 1) % n], cfg);
    }
    surface.close_path();
    surface.fill(fill);
    surface.stroke(Rgba::WHITE, 1.0);
}
