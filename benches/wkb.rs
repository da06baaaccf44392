use criterion::{criterion_group, criterion_main, Criterion};
use geokit::geometry::{Geometry, LinearRing, MultiPolygon, Point, Polygon};
use geokit::io::wkb::{from_wkb, WkbTransformer};

/// A multipolygon of `n` squares, each with a 64-vertex exterior ring.
fn multi_polygon(n: usize) -> Geometry {
    let polygons = (0..n)
        .map(|i| {
            let offset = i as f64 * 10.;
            let points = (0..64)
                .map(|j| {
                    let angle = j as f64 / 64. * std::f64::consts::TAU;
                    Point::new(offset + angle.cos(), offset + angle.sin())
                })
                .collect();
            Polygon::new(LinearRing::closed(points), vec![])
        })
        .collect();
    Geometry::MultiPolygon(MultiPolygon::new(polygons))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let geom = multi_polygon(1000);
    let wkb = geom.as_binary().unwrap();
    let ewkb_transformer = WkbTransformer::ewkb(Some(4326));
    let ewkb = ewkb_transformer.encode(&geom).unwrap();

    c.bench_function("encode MultiPolygon to WKB", |b| {
        b.iter(|| {
            let _buf = geom.as_binary().unwrap();
        })
    });
    c.bench_function("parse WKB to MultiPolygon", |b| {
        b.iter(|| {
            let _geom = from_wkb(&wkb).unwrap();
        })
    });
    c.bench_function("parse EWKB with SRID to MultiPolygon", |b| {
        b.iter(|| {
            let _geom = ewkb_transformer.decode_with_srid(&ewkb).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
