//! Orbit growth and timing probe.
//!
//! Purpose
//! - Print tiles per BFS layer and wall-clock build time for a few `{p,q}`
//!   tilings under both generator schemes, to pick a depth that fits the
//!   frame budget of an interactive viewer.
//!
//! Usage: `cargo run -p hypertile --example orbit_growth --release`

use std::time::Instant;

use hypertile::orbit::{GeneratorScheme, OrbitCfg, Tiling};
use hypertile::Schlafli;

fn main() {
    for (p, q) in [(7, 3), (3, 7), (5, 4), (4, 5), (8, 3)] {
        let schlafli = Schlafli::new(p, q).expect("hyperbolic pair");
        for scheme in [GeneratorScheme::EdgeMidpoint, GeneratorScheme::Vertex] {
            let cfg = OrbitCfg {
                max_depth: 4,
                key_decimals: 3,
                scheme,
            };
            let start = Instant::now();
            let tiling = Tiling::generate(schlafli, cfg).expect("tiling");
            let elapsed = start.elapsed().as_secs_f64() * 1e3;
            println!(
                "{schlafli} {scheme:>6}: layers={:?} total={} ({elapsed:.2} ms)",
                tiling.layer_sizes(),
                tiling.tiles.len()
            );
        }
    }
}
