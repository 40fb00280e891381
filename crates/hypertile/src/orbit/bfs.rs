//! Bounded breadth‑first enumeration of the group orbit.

use std::collections::{HashSet, VecDeque};

use crate::complex::Complex;
use crate::error::TilingError;
use crate::mobius::Mobius;
use crate::region::Schlafli;

use super::generators::generators;
use super::types::{OrbitCfg, Tile, TransformKey};

/// Enumerate one tile per distinct group element within `cfg.max_depth`
/// BFS layers of the identity.
///
/// Tiles come out in BFS order: depth is non-decreasing, and within a layer
/// the order is discovery order. Any degenerate transform aborts the build;
/// no partial orbit is returned.
pub fn enumerate_orbit(
    fundamental: &[Complex],
    generators: &[Mobius],
    cfg: OrbitCfg,
) -> Result<Vec<Tile>, TilingError> {
    cfg.validate()?;
    BfsRunner::new(fundamental, generators, cfg).run()
}

/// Convenience: validate `(p, q)` and enumerate with default key precision
/// and the edge-midpoint generators.
pub fn enumerate_tiles(p: u32, q: u32, depth: usize) -> Result<Vec<Tile>, TilingError> {
    let schlafli = Schlafli::new(p, q)?;
    Ok(Tiling::generate(schlafli, OrbitCfg::with_depth(depth))?.tiles)
}

/// A computed tiling: parameters, fundamental polygon, generators and tiles.
///
/// Built once per `(p, q, cfg)`; per-frame work only maps `tiles` through a
/// view transform.
#[derive(Clone, Debug)]
pub struct Tiling {
    pub schlafli: Schlafli,
    pub cfg: OrbitCfg,
    pub fundamental: Vec<Complex>,
    pub generators: Vec<Mobius>,
    pub tiles: Vec<Tile>,
}

impl Tiling {
    pub fn generate(schlafli: Schlafli, cfg: OrbitCfg) -> Result<Self, TilingError> {
        cfg.validate()?;
        let fundamental = schlafli.fundamental_polygon();
        let gens = generators(&schlafli, &fundamental, cfg.scheme)?;
        let tiles = enumerate_orbit(&fundamental, &gens, cfg)?;
        tracing::info!(
            tiling = %schlafli,
            depth = cfg.max_depth,
            scheme = %cfg.scheme,
            tiles = tiles.len(),
            "tiling generated"
        );
        Ok(Self {
            schlafli,
            cfg,
            fundamental,
            generators: gens,
            tiles,
        })
    }

    /// Number of tiles discovered at each depth `0..=max_depth`.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.cfg.max_depth + 1];
        for t in &self.tiles {
            sizes[t.depth] += 1;
        }
        sizes
    }
}

/// BFS runner carrying the frontier and the visited set.
struct BfsRunner<'a> {
    fundamental: &'a [Complex],
    gens: &'a [Mobius],
    cfg: OrbitCfg,
    seen: HashSet<TransformKey>,
    queue: VecDeque<(Mobius, usize)>,
    tiles: Vec<Tile>,
}

impl<'a> BfsRunner<'a> {
    fn new(fundamental: &'a [Complex], gens: &'a [Mobius], cfg: OrbitCfg) -> Self {
        Self {
            fundamental,
            gens,
            cfg,
            seen: HashSet::new(),
            queue: VecDeque::new(),
            tiles: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Tile>, TilingError> {
        let id = Mobius::identity();
        self.seen.insert(TransformKey::of(&id, self.cfg.key_decimals)?);
        self.queue.push_back((id, 0));
        let mut layer = 0;
        let mut layer_len = 0usize;
        while let Some((transform, depth)) = self.queue.pop_front() {
            if depth != layer {
                tracing::debug!(depth = layer, tiles = layer_len, "orbit layer done");
                layer = depth;
                layer_len = 0;
            }
            layer_len += 1;
            self.emit(transform, depth)?;
            if depth < self.cfg.max_depth {
                self.expand(&transform, depth)?;
            }
        }
        tracing::debug!(depth = layer, tiles = layer_len, "orbit layer done");
        Ok(self.tiles)
    }

    fn emit(&mut self, transform: Mobius, depth: usize) -> Result<(), TilingError> {
        let vertices = self
            .fundamental
            .iter()
            .map(|&v| transform.try_apply(v))
            .collect::<Result<Vec<_>, _>>()?;
        self.tiles.push(Tile {
            transform,
            vertices,
            depth,
        });
        Ok(())
    }

    fn expand(&mut self, transform: &Mobius, depth: usize) -> Result<(), TilingError> {
        for g in self.gens {
            let next = transform.compose(g);
            // Mark on enqueue so later paths to the same element in this
            // layer are dropped.
            if self
                .seen
                .insert(TransformKey::of(&next, self.cfg.key_decimals)?)
            {
                self.queue.push_back((next, depth + 1));
            }
        }
        Ok(())
    }
}
