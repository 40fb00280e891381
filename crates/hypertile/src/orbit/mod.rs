//! Orbit of the fundamental polygon: generators and bounded BFS.
//!
//! Purpose
//! - Build a generating set of disk isometries for a `{p,q}` tiling and
//!   enumerate the images of the fundamental polygon, one tile per distinct
//!   group element, up to a BFS depth bound.
//!
//! Numerics
//! - Group elements are deduplicated through `TransformKey`, a quantized,
//!   scale- and sign-canonical encoding of the four coefficients. Distinct but
//!   numerically close elements are merged; identical elements whose
//!   coefficients drifted apart over long composition chains are split. Both
//!   are accepted approximations for small depths (≤ 4 or so).
//!
//! Layout
//! - `types.rs` (config, keys, tiles), `generators.rs` (generating sets),
//!   `bfs.rs` (the enumeration itself and the `Tiling` bundle).

mod bfs;
mod generators;
mod types;

pub use bfs::{enumerate_orbit, enumerate_tiles, Tiling};
pub use generators::{edge_midpoints, generators, GeneratorScheme};
pub use types::{OrbitCfg, Tile, TransformKey};
