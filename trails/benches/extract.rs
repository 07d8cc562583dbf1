use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trails::{extract, LocationPoint};

/// Create a synthetic trail of `n` points heading north-east, with every
/// tenth point commented.
fn create_points(n: usize) -> Vec<LocationPoint> {
    (0..n)
        .map(|i| {
            let frac = i as f64 / n as f64;
            let comment = if i % 10 == 0 {
                format!("C{}", i)
            } else {
                "NC".to_string()
            };
            LocationPoint::new(50.4 + frac * 0.1, -4.1 + frac * 0.1)
                .with_elevation(100.0 + (i % 200) as f64)
                .with_comment_id(comment)
                .with_trail_name("Benchmark Loop")
        })
        .collect()
}

fn bench_coordinates(c: &mut Criterion) {
    let points = create_points(10_000);

    c.bench_function("coordinates_10000", |b| {
        b.iter(|| {
            black_box(extract::coordinates(black_box(&points)));
        });
    });
}

fn bench_lat_longs(c: &mut Criterion) {
    let points = create_points(10_000);

    c.bench_function("lat_longs_10000", |b| {
        b.iter(|| {
            black_box(extract::lat_longs(black_box(&points)));
        });
    });
}

fn bench_comment_count(c: &mut Criterion) {
    let points = create_points(10_000);

    c.bench_function("comment_count_10000", |b| {
        b.iter(|| {
            black_box(extract::comment_count(black_box(&points)));
        });
    });
}

fn bench_plot_trail(c: &mut Criterion) {
    let points = create_points(1_000);

    c.bench_function("plot_trail_1000", |b| {
        b.iter(|| {
            black_box(trails::plot_trail(black_box(&points)).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_coordinates,
    bench_lat_longs,
    bench_comment_count,
    bench_plot_trail,
);
criterion_main!(benches);
