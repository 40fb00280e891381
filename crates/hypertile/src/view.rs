//! Viewer state owned by the embedding application.
//!
//! Purpose
//! - Hold the current view transform, zoom and drag state as one value that
//!   input handlers and the per-frame renderer receive by reference. The core
//!   tiling code stays stateless.
//!
//! Gestures
//! - Primary-button drag: hyperbolic translation carrying the previous pointer
//!   position (in disk coordinates) onto the current one.
//! - Secondary-button drag: rotation about the origin by the change in pointer
//!   angle.
//! - Wheel: multiplicative zoom, clamped to `[0.1, 50]`.
//!
//! Drags that start or pass outside the unit disk only update the pointer.

use nalgebra::Point2;

use crate::cfg::{WHEEL_SPEED, ZOOM_MAX, ZOOM_MIN};
use crate::complex::Complex;
use crate::mobius::Mobius;
use crate::orbit::Tile;
use crate::render::{draw_polygon, GeodesicCfg, Rgba, Surface, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Drag {
    button: PointerButton,
    last: Complex,
}

/// Current pan/rotate/zoom state.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    pub view: Mobius,
    pub zoom: f64,
    pub viewport: Viewport,
    width: f64,
    height: f64,
    drag: Option<Drag>,
}

impl ViewportState {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            view: Mobius::identity(),
            zoom: 1.0,
            viewport: Viewport::new(width, height, 1.0),
            width,
            height,
            drag: None,
        }
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.viewport = Viewport::new(width, height, self.zoom);
    }

    /// Clamped to `[0.1, 50]`; non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        self.viewport = Viewport::new(self.width, self.height, self.zoom);
    }

    /// Wheel step; positive `delta_y` zooms out.
    pub fn wheel(&mut self, delta_y: f64) {
        self.set_zoom(self.zoom - delta_y * WHEEL_SPEED * self.zoom);
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn pointer_down(&mut self, button: PointerButton, x: f64, y: f64) {
        self.drag = Some(Drag {
            button,
            last: self.viewport.from_screen(x, y),
        });
    }

    /// Returns whether the view transform changed (i.e. a redraw is due).
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let current = self.viewport.from_screen(x, y);
        let last = std::mem::replace(&mut drag.last, current);
        if current.norm() >= 1.0 || last.norm() >= 1.0 {
            return false;
        }
        let step = match drag.button {
            PointerButton::Primary => {
                Mobius::translation(current) * Mobius::translation(-last)
            }
            PointerButton::Secondary => Mobius::rotation(current.arg() - last.arg()),
            PointerButton::Other => return false,
        };
        // Translation steps have det `1 − |z|²`; without rescaling the
        // coefficients underflow over a long drag.
        match (step * self.view).normalized() {
            Ok(view) => {
                self.view = view;
                true
            }
            Err(err) => {
                tracing::warn!(%err, "drag step dropped");
                false
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Disk point under the current view.
    #[inline]
    pub fn map(&self, z: Complex) -> Complex {
        self.view.apply(z)
    }
}

/// Colours and widths for `render_frame`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    pub background: Rgba,
    pub boundary: Rgba,
    pub boundary_width: f64,
    pub tile_fill: Rgba,
    pub point: Rgba,
    /// Marker radius in screen pixels, independent of zoom.
    pub point_radius: f64,
    pub geodesic: GeodesicCfg,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(0x24, 0x24, 0x24),
            boundary: Rgba::WHITE,
            boundary_width: 2.0,
            tile_fill: Rgba::rgba(100, 200, 255, 0.2),
            point: Rgba::rgb(0xff, 0xc4, 0x44),
            point_radius: 3.0,
            geodesic: GeodesicCfg::default(),
        }
    }
}

/// Full redraw: background, disk boundary, tiles and data points, all
/// mapped through the current view.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    state: &ViewportState,
    tiles: &[Tile],
    points: &[Complex],
    style: &FrameStyle,
) {
    let vp = &state.viewport;
    let (width, height) = state.size();
    surface.fill_rect(Point2::origin(), width, height, style.background);

    surface.begin_path();
    surface.arc(vp.center, vp.radius, 0.0, std::f64::consts::TAU);
    surface.stroke(style.boundary, style.boundary_width);

    for tile in tiles {
        let mapped = tile.mapped(&state.view);
        draw_polygon(surface, vp, &mapped, style.tile_fill, style.geodesic);
    }

    let mut drawn = 0usize;
    for &p in points {
        let z = state.map(p);
        if z.norm_sqr() < 1.0 {
            surface.begin_path();
            surface.arc(vp.to_screen(z), style.point_radius, 0.0, std::f64::consts::TAU);
            surface.fill(style.point);
            drawn += 1;
        }
    }
    tracing::trace!(tiles = tiles.len(), points = drawn, "frame rendered");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{c, polar, ORIGIN};
    use crate::orbit::enumerate_tiles;
    use crate::render::{PathCmd, PathRecorder};

    #[test]
    fn primary_drag_moves_grabbed_point_under_pointer() {
        let mut st = ViewportState::new(400.0, 400.0);
        let grab = st.viewport.to_screen(ORIGIN);
        let target = st.viewport.to_screen(c(0.3, 0.2));
        st.pointer_down(PointerButton::Primary, grab.x, grab.y);
        assert!(st.pointer_move(target.x, target.y));
        assert!((st.map(ORIGIN) - c(0.3, 0.2)).norm() < 1e-9);
        st.pointer_up();
        assert!(!st.is_dragging());
        assert!(!st.pointer_move(0.0, 0.0));
    }

    #[test]
    fn secondary_drag_rotates_by_pointer_angle() {
        let mut st = ViewportState::new(400.0, 400.0);
        let a = st.viewport.to_screen(c(0.5, 0.0));
        let b = st.viewport.to_screen(c(0.0, 0.5));
        st.pointer_down(PointerButton::Secondary, a.x, a.y);
        assert!(st.pointer_move(b.x, b.y));
        assert!((st.map(c(0.2, 0.0)) - c(0.0, 0.2)).norm() < 1e-9);
    }

    #[test]
    fn drags_outside_disk_are_ignored() {
        let mut st = ViewportState::new(400.0, 400.0);
        st.pointer_down(PointerButton::Primary, 0.0, 0.0);
        let inside = st.viewport.to_screen(c(0.1, 0.1));
        assert!(!st.pointer_move(inside.x, inside.y));
        assert_eq!(st.view, Mobius::identity());
        // The pointer was still tracked, so the next move inside applies.
        let next = st.viewport.to_screen(c(0.2, 0.1));
        assert!(st.pointer_move(next.x, next.y));
    }

    #[test]
    fn long_drag_near_rim_keeps_view_finite() {
        let mut st = ViewportState::new(400.0, 400.0);
        let a = st.viewport.to_screen(c(0.9, 0.0));
        let b = st.viewport.to_screen(c(0.9, 0.001));
        st.pointer_down(PointerButton::Primary, a.x, a.y);
        for i in 0..2000 {
            let p = if i % 2 == 0 { b } else { a };
            assert!(st.pointer_move(p.x, p.y));
        }
        // Back-and-forth steps cancel out up to rounding.
        let z = st.map(c(0.1, 0.0));
        assert!(z.re.is_finite() && z.im.is_finite());
        assert!((z - c(0.1, 0.0)).norm() < 1e-6);
        assert!((st.view.det() - c(1.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn round_trip_drag_session_returns_view_to_start() {
        let mut st = ViewportState::new(300.0, 300.0);
        fn drag(st: &mut ViewportState, button: PointerButton, path: &[Complex]) {
            let start = st.viewport.to_screen(path[0]);
            st.pointer_down(button, start.x, start.y);
            for &z in &path[1..] {
                let p = st.viewport.to_screen(z);
                assert!(st.pointer_move(p.x, p.y));
            }
            st.pointer_up();
        }
        for round in 0..200u32 {
            let button = if round % 3 == 0 {
                PointerButton::Secondary
            } else {
                PointerButton::Primary
            };
            let t = f64::from(round) * 0.37;
            let (a, b) = (polar(0.2, t), polar(0.7, t + 1.0));
            let there: Vec<Complex> = (0..=10).map(|k| a + (b - a) * (f64::from(k) / 10.0)).collect();
            // Return along a bent path to the same pointer position.
            let back: Vec<Complex> = (0..=10)
                .map(|k| {
                    let s = f64::from(k) / 10.0;
                    b + (a - b) * s + polar(0.3 * (std::f64::consts::PI * s).sin(), t)
                })
                .collect();
            drag(&mut st, button, &there);
            drag(&mut st, button, &back);
        }
        for z in [ORIGIN, c(0.5, 0.2), c(-0.3, -0.6)] {
            let w = st.map(z);
            assert!(w.re.is_finite() && w.im.is_finite());
            assert!(w.norm() < 1.0);
            assert!((w - z).norm() < 1e-9);
        }

        let tiles = enumerate_tiles(7, 3, 2).unwrap();
        let mut rec = PathRecorder::new();
        render_frame(&mut rec, &st, &tiles, &[c(0.1, 0.1)], &FrameStyle::default());
        assert!(rec.points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn non_finite_zoom_is_ignored() {
        let mut st = ViewportState::new(200.0, 200.0);
        st.set_zoom(2.0);
        st.set_zoom(f64::NAN);
        st.set_zoom(f64::INFINITY);
        assert_eq!(st.zoom, 2.0);
    }

    #[test]
    fn wheel_zoom_is_clamped() {
        let mut st = ViewportState::new(200.0, 100.0);
        st.wheel(-100.0);
        assert!((st.zoom - 1.1).abs() < 1e-12);
        assert!((st.viewport.radius - 100.0 * 0.45 * 1.1).abs() < 1e-9);
        for _ in 0..1000 {
            st.wheel(-500.0);
        }
        assert_eq!(st.zoom, 50.0);
        for _ in 0..1000 {
            st.wheel(900.0);
        }
        assert_eq!(st.zoom, 0.1);
        st.resize(400.0, 400.0);
        assert!((st.viewport.radius - 400.0 * 0.45 * 0.1).abs() < 1e-9);
    }

    #[test]
    fn frame_draws_boundary_tiles_and_visible_points() {
        let st = ViewportState::new(300.0, 300.0);
        let tiles = enumerate_tiles(7, 3, 1).unwrap();
        let points = [c(0.1, 0.1), c(2.0, 0.0), c(-0.5, 0.3)];
        let mut rec = PathRecorder::new();
        let style = FrameStyle::default();
        render_frame(&mut rec, &st, &tiles, &points, &style);
        assert!(matches!(rec.cmds[0], PathCmd::FillRect { .. }));
        let fills = rec.count(|c| *c == PathCmd::Fill(style.tile_fill));
        assert_eq!(fills, tiles.len());
        let dots = rec.count(|c| *c == PathCmd::Fill(style.point));
        assert_eq!(dots, 2);
        let boundary = rec.count(|c| {
            matches!(c, PathCmd::Stroke { color, width } if *color == Rgba::WHITE && *width == 2.0)
        });
        assert_eq!(boundary, 1);
    }
}
