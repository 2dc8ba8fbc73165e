use criterion::{black_box, criterion_group, criterion_main, Criterion};
use yield_curve_analytics::analytics::forward::calculate_forward_rates;
use yield_curve_analytics::analytics::spread::calculate_spreads;
use yield_curve_analytics::simulation::stress_test::StressTestEngine;
use yield_curve_analytics::simulation::synthetic::{generate_random_series, SeriesConfig};

fn bench_forwards_one_year(c: &mut Criterion) {
    let config = SeriesConfig {
        days: 252,
        ..Default::default()
    };
    let series = generate_random_series(&config).unwrap();

    c.bench_function("forwards_252_days", |b| {
        b.iter(|| calculate_forward_rates(black_box(&series)))
    });
}

fn bench_spreads_ten_years(c: &mut Criterion) {
    let config = SeriesConfig {
        days: 2_520,
        ..Default::default()
    };
    let series = generate_random_series(&config).unwrap();

    c.bench_function("spreads_2520_days", |b| {
        b.iter(|| calculate_spreads(black_box(&series)))
    });
}

fn bench_stress_ten_years(c: &mut Criterion) {
    let config = SeriesConfig {
        days: 2_520,
        ..Default::default()
    };
    let series = generate_random_series(&config).unwrap();
    let engine = StressTestEngine::default();

    c.bench_function("stress_2520_days", |b| {
        b.iter(|| engine.stress_test_yields(black_box(&series)))
    });
}

criterion_group!(
    benches,
    bench_forwards_one_year,
    bench_spreads_ten_years,
    bench_stress_ten_years
);
criterion_main!(benches);
