use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hypertile::orbit::{GeneratorScheme, OrbitCfg, Tiling};
use hypertile::view::{render_frame, FrameStyle, ViewportState};
use hypertile::{Complex, Mobius, Schlafli};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;
mod svg;

use provenance::{ensure_parent, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "hypertile-cli")]
#[command(about = "Build and render regular hyperbolic tilings")]
struct Cmd {
    /// Optional run label; propagated to provenance sidecars and logs
    #[arg(long)]
    label: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate tiles and write them as JSON
    Tiles {
        #[command(flatten)]
        tiling: TilingArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Render one frame of the tiling (and optional data points) to SVG
    Render {
        #[command(flatten)]
        tiling: TilingArgs,
        #[command(flatten)]
        frame: FrameArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug, Serialize)]
struct TilingArgs {
    /// Sides per polygon
    #[arg(long, default_value_t = 7)]
    p: u32,
    /// Polygons meeting at each vertex
    #[arg(long, default_value_t = 3)]
    q: u32,
    /// BFS depth bound
    #[arg(long, default_value_t = 3)]
    depth: usize,
    /// Decimal places kept in dedup keys
    #[arg(long, default_value_t = 3)]
    decimals: u32,
    /// Generator scheme: `edge` (half-turns about edge midpoints) or `vertex`
    /// (rotations about vertices; overlapping images, for comparison only)
    #[arg(long, default_value_t = GeneratorScheme::EdgeMidpoint)]
    #[serde(serialize_with = "serialize_display")]
    scheme: GeneratorScheme,
}

#[derive(Args, Clone, Debug, Serialize)]
struct FrameArgs {
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 800.0)]
    height: f64,
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,
    /// CSV (no header) or Parquet file with two numeric columns
    #[arg(long)]
    points: Option<PathBuf>,
    /// View translation: disk point the origin is carried to
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_x: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pan_y: f64,
    /// View rotation in radians, applied before the translation
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    rotate: f64,
}

fn serialize_display<S: serde::Serializer>(
    v: &GeneratorScheme,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    s.collect_str(v)
}

impl TilingArgs {
    fn build(&self) -> Result<Tiling> {
        let schlafli = Schlafli::new(self.p, self.q)?;
        let cfg = OrbitCfg {
            max_depth: self.depth,
            key_decimals: self.decimals,
            scheme: self.scheme,
        };
        Ok(Tiling::generate(schlafli, cfg)?)
    }
}

#[derive(Serialize)]
struct TileRecord {
    depth: usize,
    vertices: Vec<[f64; 2]>,
}

#[derive(Serialize)]
struct TilesDoc {
    tiling: String,
    layers: Vec<usize>,
    tiles: Vec<TileRecord>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Tiles { tiling, out } => tiles(&tiling, &out, cmd.label),
        Action::Render { tiling, frame, out } => render(&tiling, &frame, &out, cmd.label),
        Action::Report => report(cmd.label),
    }
}

fn tiles(args: &TilingArgs, out: &Path, label: Option<String>) -> Result<()> {
    tracing::info!(p = args.p, q = args.q, depth = args.depth, out = %out.display(), label = ?label, "tiles");
    let tiling = args.build()?;
    let doc = TilesDoc {
        tiling: tiling.schlafli.to_string(),
        layers: tiling.layer_sizes(),
        tiles: tiling
            .tiles
            .iter()
            .map(|t| TileRecord {
                depth: t.depth,
                vertices: t.vertices.iter().map(|z| [z.re, z.im]).collect(),
            })
            .collect(),
    };
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(out, Payload::new(serde_json::to_value(args)?).with_label(label))?;
    Ok(())
}

fn render(args: &TilingArgs, frame: &FrameArgs, out: &Path, label: Option<String>) -> Result<()> {
    tracing::info!(p = args.p, q = args.q, depth = args.depth, out = %out.display(), label = ?label, "render");
    let pan = Complex::new(frame.pan_x, frame.pan_y);
    if !(pan.norm() < 1.0) {
        bail!("pan point ({}, {}) must lie inside the unit disk", frame.pan_x, frame.pan_y);
    }
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !positive(frame.width) || !positive(frame.height) {
        bail!("frame size {}x{} must be positive and finite", frame.width, frame.height);
    }
    if !positive(frame.zoom) {
        bail!("zoom {} must be positive and finite", frame.zoom);
    }
    let tiling = args.build()?;
    let points = match &frame.points {
        Some(path) => points::load_points(path)?,
        None => Vec::new(),
    };

    let mut state = ViewportState::new(frame.width, frame.height);
    state.set_zoom(frame.zoom);
    if state.zoom != frame.zoom {
        tracing::warn!(requested = frame.zoom, used = state.zoom, "zoom clamped");
    }
    state.view = Mobius::translation(pan) * Mobius::rotation(frame.rotate);

    let mut surface = svg::SvgSurface::new(frame.width, frame.height);
    render_frame(&mut surface, &state, &tiling.tiles, &points, &FrameStyle::default());

    ensure_parent(out)?;
    fs::write(out, surface.finish()).with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({ "tiling": args, "frame": frame });
    write_sidecar(out, Payload::new(params).with_label(label))?;
    Ok(())
}

fn report(label: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "hypertile_version": hypertile::VERSION,
        "label": label,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
