//! Benchmarks for the dataset views.
//!
//! Run with: cargo bench -p kiloton-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use kiloton_analytics::prelude::*;
use kiloton_core::{Coordinates, Country, TestDate, TestRecord};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_records(n: usize) -> Vec<TestRecord> {
    let countries = ["USA", "USSR", "UK", "FRANCE", "CHINA", "INDIA", "PAKIST"];

    (0..n)
        .map(|i| {
            let lower = (i % 997) as f64 * 1.5 - 3.0;
            let upper = lower + (i % 13) as f64;
            TestRecord::new(
                format!("TEST_{:05}", i),
                Country::new(countries[i % countries.len()]).unwrap(),
                lower,
                upper,
            )
            .with_date(TestDate::from_ymd(1945 + (i % 54) as i32, 1 + (i % 12) as u32, 1).unwrap())
            .with_location(Coordinates::new((i % 90) as f64, (i % 180) as f64).unwrap())
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_extremes(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_extremes");

    // The full historical dataset is a little over 2,000 rows.
    for size in [100, 2_046, 100_000] {
        let records = create_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| find_yield_extremes(black_box(records)))
        });
    }

    group.finish();
}

fn bench_views(c: &mut Criterion) {
    let records = create_records(2_046);
    let dataset = prepare(records.clone());
    let ussr: CountryFilter = "USSR".parse().unwrap();

    c.bench_function("prepare_2046", |b| b.iter(|| prepare(black_box(records.clone()))));
    c.bench_function("timeline_ussr_2046", |b| {
        b.iter(|| explosions_per_year(black_box(dataset.records()), &ussr))
    });
    c.bench_function("by_country_2046", |b| {
        b.iter(|| by_country(black_box(dataset.records())))
    });
    c.bench_function("map_view_2046", |b| {
        b.iter(|| MapView::from_records(black_box(dataset.records()), DEFAULT_ZOOM))
    });
}

criterion_group!(benches, bench_extremes, bench_views);
criterion_main!(benches);
