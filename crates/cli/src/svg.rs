//! SVG implementation of the drawing surface.
//!
//! Each `fill`/`stroke` emits one `<path>` element for the current path, so
//! a filled-then-stroked polygon becomes two elements in paint order.

use std::f64::consts::{PI, TAU};

use hypertile::render::{Rgba, Surface};
use nalgebra::Point2;

pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
    path: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            path: String::new(),
        }
    }

    /// Complete SVG document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    fn push_cmd(&mut self, cmd: char, p: Point2<f64>) {
        self.path.push_str(&format!("{cmd}{:.2} {:.2} ", p.x, p.y));
    }
}

/// `fill="rgb(..)" fill-opacity=".."` (or the `stroke` pair).
fn paint(kind: &str, color: Rgba) -> String {
    format!(
        "{kind}=\"rgb({},{},{})\" {kind}-opacity=\"{}\"",
        color.r, color.g, color.b, color.a
    )
}

impl Surface for SvgSurface {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Point2<f64>) {
        self.push_cmd('M', p);
    }

    fn line_to(&mut self, p: Point2<f64>) {
        self.push_cmd('L', p);
    }

    fn close_path(&mut self) {
        self.path.push_str("Z ");
    }

    fn arc(&mut self, center: Point2<f64>, radius: f64, start: f64, end: f64) {
        let sweep = end - start;
        let at = |angle: f64| {
            Point2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        };
        let first = at(start);
        let lead = if self.path.is_empty() { 'M' } else { 'L' };
        self.push_cmd(lead, first);
        if sweep.abs() >= TAU - 1e-9 {
            // A single SVG arc cannot close on itself; use two half circles.
            let opposite = at(start + PI);
            self.path.push_str(&format!(
                "A{radius:.2} {radius:.2} 0 1 1 {:.2} {:.2} A{radius:.2} {radius:.2} 0 1 1 {:.2} {:.2} ",
                opposite.x, opposite.y, first.x, first.y
            ));
            return;
        }
        let last = at(end);
        let large = u8::from(sweep.abs() > PI);
        let positive = u8::from(sweep > 0.0);
        self.path.push_str(&format!(
            "A{radius:.2} {radius:.2} 0 {large} {positive} {:.2} {:.2} ",
            last.x, last.y
        ));
    }

    fn fill(&mut self, color: Rgba) {
        self.body.push_str(&format!(
            "<path d=\"{}\" {} stroke=\"none\"/>\n",
            self.path.trim_end(),
            paint("fill", color)
        ));
    }

    fn stroke(&mut self, color: Rgba, width: f64) {
        self.body.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" {} stroke-width=\"{width}\"/>\n",
            self.path.trim_end(),
            paint("stroke", color)
        ));
    }

    fn fill_rect(&mut self, origin: Point2<f64>, width: f64, height: f64, color: Rgba) {
        self.body.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{width}\" height=\"{height}\" {}/>\n",
            origin.x,
            origin.y,
            paint("fill", color)
        ));
    }
}
