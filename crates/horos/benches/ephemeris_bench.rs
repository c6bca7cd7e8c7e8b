use criterion::{black_box, criterion_group, criterion_main, Criterion};
use horos::series::Axis;
use horos::time::to_julian_day;
use horos::{
    Body, BundledSeries, ChartBuilder, EphemerisBackend, GeoLocation, HouseSystem,
    SeriesEphemeris, SeriesStore,
};
use std::sync::Arc;

fn bench_series_load(c: &mut Criterion) {
    c.bench_function("series_store_load", |b| {
        b.iter(|| SeriesStore::load(black_box(&BundledSeries)))
    });
}

fn bench_series_evaluate(c: &mut Criterion) {
    let store = SeriesStore::load(&BundledSeries);
    let jd = to_julian_day(1990, 6, 15, 14, 30, 0.0);

    c.bench_function("series_evaluate_mars_x", |b| {
        b.iter(|| store.evaluate(black_box(Body::Mars), black_box(Axis::X), black_box(jd)))
    });
}

fn bench_geocentric_positions(c: &mut Criterion) {
    let backend = SeriesEphemeris::new(Arc::new(SeriesStore::load(&BundledSeries)));
    let jd = to_julian_day(1990, 6, 15, 14, 30, 0.0);

    c.bench_function("geocentric_with_speed_all_bodies", |b| {
        b.iter(|| {
            for body in Body::CHART_BODIES {
                let _ = backend.geocentric_with_speed(black_box(body), black_box(jd));
            }
        })
    });
}

fn bench_build_chart(c: &mut Criterion) {
    let store = Arc::new(SeriesStore::load(&BundledSeries));
    let builder = ChartBuilder::new(Arc::new(SeriesEphemeris::new(store)));
    let jd = to_julian_day(1990, 6, 15, 14, 30, 0.0);
    let location = GeoLocation::new(51.5, -0.12);

    c.bench_function("build_chart_placidus", |b| {
        b.iter(|| {
            builder.build_chart(black_box(jd), black_box(location), HouseSystem::Placidus)
        })
    });
}

criterion_group!(
    benches,
    bench_series_load,
    bench_series_evaluate,
    bench_geocentric_positions,
    bench_build_chart
);
criterion_main!(benches);
