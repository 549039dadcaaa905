//! Benchmarks for the calendar conversion hot path

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use loreline_calendar::{date_to_seconds, format, seconds_to_date};
use loreline_core::{CalendarDefinition, Timestamp};

fn bench_seconds_to_date(c: &mut Criterion) {
    let def = CalendarDefinition::default();
    let ts = Timestamp(-3_110_400_000);

    c.bench_function("seconds_to_date", |b| {
        b.iter(|| black_box(seconds_to_date(black_box(ts), &def)))
    });
}

fn bench_date_to_seconds(c: &mut Criterion) {
    let def = CalendarDefinition::default();
    let date = seconds_to_date(Timestamp(-3_110_400_000), &def);

    c.bench_function("date_to_seconds", |b| {
        b.iter(|| black_box(date_to_seconds(black_box(&date), &def)))
    });
}

fn bench_format(c: &mut Criterion) {
    let def = CalendarDefinition::default();
    let ts = Timestamp(466_560_000);

    c.bench_function("format_date_text", |b| {
        b.iter(|| black_box(format(black_box(ts), &def)))
    });
}

criterion_group!(
    benches,
    bench_seconds_to_date,
    bench_date_to_seconds,
    bench_format
);
criterion_main!(benches);
