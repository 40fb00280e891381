//! Drawing surface interface and an in-memory recorder.

use std::fmt;

use nalgebra::Point2;

/// 8-bit RGB with floating point alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// CSS form, e.g. `rgba(100, 200, 255, 0.2)`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Path-based drawing primitives, modeled on a 2D canvas context.
///
/// `fill` and `stroke` act on the current path and leave it in place, so a
/// path can be filled and then stroked.
pub trait Surface {
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point2<f64>);
    fn line_to(&mut self, p: Point2<f64>);
    fn close_path(&mut self);
    /// Circular arc from angle `start` to `end` (radians, screen orientation).
    fn arc(&mut self, center: Point2<f64>, radius: f64, start: f64, end: f64);
    fn fill(&mut self, color: Rgba);
    fn stroke(&mut self, color: Rgba, width: f64);
    fn fill_rect(&mut self, origin: Point2<f64>, width: f64, height: f64, color: Rgba);
}

/// Recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum PathCmd {
    BeginPath,
    MoveTo(Point2<f64>),
    LineTo(Point2<f64>),
    ClosePath,
    Arc {
        center: Point2<f64>,
        radius: f64,
        start: f64,
        end: f64,
    },
    Fill(Rgba),
    Stroke { color: Rgba, width: f64 },
    FillRect {
        origin: Point2<f64>,
        width: f64,
        height: f64,
        color: Rgba,
    },
}

/// `Surface` that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct PathRecorder {
    pub cmds: Vec<PathCmd>,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points passed to `move_to`/`line_to`, in order.
    pub fn points(&self) -> Vec<Point2<f64>> {
        self.cmds
            .iter()
            .filter_map(|cmd| match cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&PathCmd) -> bool) -> usize {
        self.cmds.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for PathRecorder {
    fn begin_path(&mut self) {
        self.cmds.push(PathCmd::BeginPath);
    }
    fn move_to(&mut self, p: Point2<f64>) {
        self.cmds.push(PathCmd::MoveTo(p));
    }
    fn line_to(&mut self, p: Point2<f64>) {
        self.cmds.push(PathCmd::LineTo(p));
    }
    fn close_path(&mut self) {
        self.cmds.push(PathCmd::ClosePath);
    }
    fn arc(&mut self, center: Point2<f64>, radius: f64, start: f64, end: f64) {
        self.cmds.push(PathCmd::Arc {
            center,
            radius,
            start,
            end,
        });
    }
    fn fill(&mut self, color: Rgba) {
        self.cmds.push(PathCmd::Fill(color));
    }
    fn stroke(&mut self, color: Rgba, width: f64) {
        self.cmds.push(PathCmd::Stroke { color, width });
    }
    fn fill_rect(&mut self, origin: Point2<f64>, width: f64, height: f64, color: Rgba) {
        self.cmds.push(PathCmd::FillRect {
            origin,
            width,
            height,
            color,
        });
    }
}
