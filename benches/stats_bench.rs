//! Benchmarks for the Mood Tracker statistics layer
//!
//! Run with: cargo bench

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use moodtrack::stats::{best_streak, last7_bars, time_series_points, Summary};
use moodtrack::store::MoodEntry;

fn today() -> NaiveDate {
    "2024-06-15".parse().unwrap()
}

fn create_test_entries(count: usize) -> Vec<MoodEntry> {
    // Roughly two entries per day, moods cycling through the scale
    (0..count)
        .map(|i| {
            let date = today()
                .checked_sub_days(Days::new((i / 2) as u64))
                .unwrap();
            MoodEntry::new(format!("bench-{}", i), date, (i % 5 + 1) as u8).tag("bench")
        })
        .collect()
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for size in [100, 1000, 10000] {
        let entries = create_test_entries(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("compute_{}", size), |b| {
            b.iter(|| Summary::compute(black_box(&entries), today()))
        });
    }

    group.finish();
}

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");

    let entries = create_test_entries(1000);

    group.bench_function("best_streak_1000", |b| {
        b.iter(|| best_streak(black_box(&entries)))
    });

    group.bench_function("time_series_points_1000", |b| {
        b.iter(|| time_series_points(black_box(&entries)))
    });

    group.bench_function("last7_bars_1000", |b| {
        b.iter(|| last7_bars(black_box(&entries), today()))
    });

    group.finish();
}

criterion_group!(benches, bench_summary, bench_series);
criterion_main!(benches);
