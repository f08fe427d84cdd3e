//! Benchmarks for the sGVI pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use sgvi_algorithms::sgvi::{run, tessellate, SgviParams};
use sgvi_core::{BoundaryRegion, LinearFeature, SamplePoint};
use sgvi_parallel::ProcessingMode;

const CELL: f64 = 100.0;

fn square(x0: f64, y0: f64, size: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![
            (x0, y0),
            (x0 + size, y0),
            (x0 + size, y0 + size),
            (x0, y0 + size),
            (x0, y0),
        ]),
        vec![],
    )
}

/// `n x n` block grid with `per_region` scattered points per block and a
/// road along every block edge plus one diagonal per block.
fn create_layout(n: usize, per_region: usize) -> (Vec<BoundaryRegion>, Vec<SamplePoint>, Vec<LinearFeature>) {
    let mut boundaries = Vec::with_capacity(n * n);
    let mut points = Vec::with_capacity(n * n * per_region);
    let mut roads = Vec::new();

    for row in 0..n {
        for col in 0..n {
            let x0 = col as f64 * CELL;
            let y0 = row as f64 * CELL;
            boundaries.push(BoundaryRegion::new(format!("{}-{}", row, col), square(x0, y0, CELL)));

            for k in 0..per_region {
                let dx = ((k * 37 + row * 11 + col * 7) % 97) as f64 + 1.5;
                let dy = ((k * 53 + row * 5 + col * 13) % 89) as f64 + 4.25;
                let score = ((k * 7 + row * 3 + col) % 100) as f64 / 100.0;
                points.push(SamplePoint::new(x0 + dx, y0 + dy, score));
            }

            roads.push(LinearFeature::new(LineString::from(vec![
                (x0 + 1.0, y0 + 1.0),
                (x0 + CELL - 1.0, y0 + CELL - 1.0),
            ])));
        }
    }

    let extent = n as f64 * CELL;
    for i in 0..=n {
        let t = i as f64 * CELL;
        roads.push(LinearFeature::new(LineString::from(vec![(0.0, t), (extent, t)])));
        roads.push(LinearFeature::new(LineString::from(vec![(t, 0.0), (t, extent)])));
    }

    (boundaries, points, roads)
}

fn bench_tessellate(c: &mut Criterion) {
    let mut group = c.benchmark_group("sgvi/tessellate");
    let shape = MultiPolygon::new(vec![square(0.0, 0.0, CELL)]);
    for count in [16, 64, 256] {
        let generators: Vec<Coord<f64>> = (0..count)
            .map(|k| Coord {
                x: ((k * 37) % 97) as f64 + 0.5 + k as f64 * 1e-3,
                y: ((k * 53) % 89) as f64 + 3.25,
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| tessellate(black_box(&generators), &shape, 20.0).unwrap())
        });
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("sgvi/run");
    group.sample_size(10);
    for n in [4, 8, 16] {
        let (boundaries, points, roads) = create_layout(n, 20);
        for (label, mode) in [
            ("sequential", ProcessingMode::Sequential),
            ("parallel", ProcessingMode::Parallel),
        ] {
            let params = SgviParams { mode, ..Default::default() };
            group.bench_with_input(BenchmarkId::new(label, n * n), &n, |b, _| {
                b.iter(|| run(black_box(&boundaries), &points, &roads, &params).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_tessellate, bench_run);
criterion_main!(benches);
