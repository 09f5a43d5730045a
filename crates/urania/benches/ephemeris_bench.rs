use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::ephemeris::{SwissEphemeris, AstroTime, Body, EphemerisAdapter};
use urania::{calculate_chart, render_svg, WheelStyle};

fn bench_calc_longitudes(c: &mut Criterion) {
    let adapter = EphemerisAdapter::new(SwissEphemeris);
    let time = AstroTime::from_datetime(Utc.with_ymd_and_hms(1990, 6, 15, 18, 30, 0).unwrap());

    c.bench_function("calc_longitudes", |b| {
        b.iter(|| adapter.calc_longitudes(black_box(&time), black_box(&Body::ALL)))
    });
}

fn bench_calculate_chart(c: &mut Criterion) {
    c.bench_function("calculate_chart", |b| {
        b.iter(|| {
            calculate_chart(
                black_box(Some("1990-06-15")),
                black_box(Some("14:30")),
                black_box(Some(40.7128)),
                black_box(Some(-74.0060)),
                black_box(Some("America/New_York")),
            )
        })
    });
}

fn bench_render_svg(c: &mut Criterion) {
    let chart = calculate_chart(Some("1990-06-15"), Some("14:30"), Some(40.7128), Some(-74.0060), Some("America/New_York"))
        .unwrap()
        .unwrap();
    let style = WheelStyle::default();

    c.bench_function("render_svg", |b| b.iter(|| render_svg(black_box(&chart), &style)));
}

criterion_group!(benches, bench_calc_longitudes, bench_calculate_chart, bench_render_svg);
criterion_main!(benches);
