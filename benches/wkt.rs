use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simple_features_wkt::io::wkt::{read_geometry, write_geometry};

/// A multi polygon of `n` square polygons, each with a single hole.
fn multi_polygon_text(n: usize) -> String {
    let polygons: Vec<String> = (0..n)
        .map(|i| {
            let x = i as f64 * 10.0;
            format!(
                "(({x} 0, {} 0, {} 8.5, {x} 8.5, {x} 0), ({} 1, {} 1, {} 2, {} 1))",
                x + 8.5,
                x + 8.5,
                x + 1.0,
                x + 2.0,
                x + 2.0,
                x + 1.0
            )
        })
        .collect();
    format!("MULTIPOLYGON ({})", polygons.join(", "))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let text = multi_polygon_text(1_000);
    let geometry = read_geometry(&text).unwrap();

    c.bench_function("read WKT multi polygon", |b| {
        b.iter(|| read_geometry(black_box(&text)).unwrap())
    });

    c.bench_function("write WKT multi polygon", |b| {
        b.iter(|| write_geometry(black_box(&geometry)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
