//! Criterion benchmarks for orbit enumeration.
//! Focus: `{7,3}` and `{4,5}` at depths 1–4, both generator schemes.
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hypertile::orbit::{GeneratorScheme, OrbitCfg, Tiling};
use hypertile::Schlafli;

fn bench_orbit(c: &mut Criterion) {
    let mut group = c.benchmark_group("orbit");
    for (p, q) in [(7u32, 3u32), (4, 5)] {
        let s = Schlafli::new(p, q).unwrap();
        for scheme in [GeneratorScheme::EdgeMidpoint, GeneratorScheme::Vertex] {
            for depth in 1..=4usize {
                let cfg = OrbitCfg {
                    max_depth: depth,
                    key_decimals: 3,
                    scheme,
                };
                group.bench_with_input(
                    BenchmarkId::new(format!("{s}/{scheme}"), depth),
                    &cfg,
                    |b, &cfg| {
                        b.iter(|| {
                            let _t = Tiling::generate(s, cfg).unwrap();
                        })
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_orbit);
criterion_main!(benches);
