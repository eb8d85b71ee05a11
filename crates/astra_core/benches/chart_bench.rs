use criterion::{Criterion, black_box, criterion_group, criterion_main};

use astra_core::{
    BirthData, Body, aspects, calculate_natal_chart, position_of, positions_at,
};
use astra_time::{CalendarDate, J2000_JD};

fn birth() -> BirthData {
    BirthData {
        date: CalendarDate::parse("2000-01-01").unwrap(),
        time: "12:00".to_string(),
        latitude_deg: 40.7128,
        longitude_deg: -74.006,
        timezone: "America/New_York".to_string(),
    }
}

fn chart_bench(c: &mut Criterion) {
    let birth = birth();

    let mut group = c.benchmark_group("chart");
    group.bench_function("calculate_natal_chart", |b| {
        b.iter(|| calculate_natal_chart(black_box(&birth)))
    });
    group.bench_function("position_of_sun", |b| {
        b.iter(|| position_of(Body::Sun, black_box(J2000_JD + 9131.5)))
    });
    group.finish();
}

fn aspect_bench(c: &mut Criterion) {
    let positions = positions_at(J2000_JD + 9131.5);

    let mut group = c.benchmark_group("aspects");
    group.bench_function("scan_66_pairs", |b| {
        b.iter(|| aspects(black_box(&positions)))
    });
    group.finish();
}

criterion_group!(benches, chart_bench, aspect_bench);
criterion_main!(benches);
