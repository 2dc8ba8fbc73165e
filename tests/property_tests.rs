use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use std::collections::BTreeMap;
use yield_curve_analytics::analytics::forward::{forward_rate, implied_forward};
use yield_curve_analytics::analytics::spread::calculate_spreads;
use yield_curve_analytics::core::series::RateSeries;
use yield_curve_analytics::core::tenor::Tenor;
use yield_curve_analytics::simulation::historical::HistoricalMoveAnalyzer;
use yield_curve_analytics::simulation::scenario::HistoricalScenario;
use yield_curve_analytics::simulation::stress_test::StressTestEngine;

const CURVE_TENORS: [Tenor; 7] = [
    Tenor::M3,
    Tenor::Y1,
    Tenor::Y2,
    Tenor::Y3,
    Tenor::Y5,
    Tenor::Y10,
    Tenor::Y30,
];

/// Generate a random yield in percent (0% to 10%).
fn arb_yield() -> impl Strategy<Value = f64> {
    0.0f64..10.0
}

/// Generate a rate series of 3..60 rows over the tenors the analytics use.
fn arb_series() -> impl Strategy<Value = RateSeries> {
    (3usize..60).prop_flat_map(|rows| {
        prop::collection::vec(prop::collection::vec(arb_yield(), rows), CURVE_TENORS.len())
            .prop_map(move |columns| {
                let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
                let dates = (0..rows).map(|i| start + Duration::days(i as i64)).collect();
                let columns: BTreeMap<Tenor, Vec<f64>> =
                    CURVE_TENORS.iter().copied().zip(columns).collect();
                RateSeries::new(dates, columns).unwrap()
            })
    })
}

proptest! {
    // ===================================================================
    // Spreads are a pure function of the series.
    // ===================================================================
    #[test]
    fn spreads_are_idempotent(series in arb_series()) {
        let first = calculate_spreads(&series).unwrap();
        let second = calculate_spreads(&series).unwrap();
        prop_assert_eq!(first, second);
    }

    // ===================================================================
    // Stress testing never mutates the series it is given.
    // ===================================================================
    #[test]
    fn stress_does_not_mutate_series(series in arb_series(), lookback in 2usize..100) {
        let before = series.clone();
        let rows = StressTestEngine::new(lookback).stress_test_yields(&series).unwrap();
        prop_assert_eq!(rows.len(), 4);
        prop_assert_eq!(series.column(Tenor::Y2).unwrap(), before.column(Tenor::Y2).unwrap());
        prop_assert_eq!(series.column(Tenor::Y10).unwrap(), before.column(Tenor::Y10).unwrap());
        prop_assert_eq!(series, before);
    }

    // ===================================================================
    // Every stress row is measured against the same baseline spread,
    // and each delta is the difference it reports.
    // ===================================================================
    #[test]
    fn stress_rows_share_baseline(series in arb_series(), lookback in 2usize..100) {
        let rows = StressTestEngine::new(lookback).stress_test_yields(&series).unwrap();
        prop_assert_eq!(rows.len(), 4);
        for row in &rows {
            prop_assert_eq!(row.original_spread, rows[0].original_spread);
            prop_assert!((row.delta - (row.shocked_spread - row.original_spread)).abs() < 1e-12);
        }
    }

    // ===================================================================
    // The crisis scenario always flattens: short end up, long end down.
    // ===================================================================
    #[test]
    fn crisis_scenario_flattens(series in arb_series(), lookback in 2usize..100) {
        let analyzer = HistoricalMoveAnalyzer::with_lookback(lookback);
        let two = analyzer.statistics(&series, Tenor::Y2).unwrap();
        let ten = analyzer.statistics(&series, Tenor::Y10).unwrap();
        let (short, long) = HistoricalScenario::Crisis.shocks(&two, &ten);

        if two.volatility > 0.0 {
            prop_assert!(short > 0.0);
        }
        if ten.volatility > 0.0 {
            prop_assert!(long < 0.0);
        }
    }

    // ===================================================================
    // Percentiles sit inside the observed range and stay ordered.
    // ===================================================================
    #[test]
    fn move_statistics_are_ordered(series in arb_series(), lookback in 2usize..100) {
        let moves = HistoricalMoveAnalyzer::with_lookback(lookback)
            .calculate_historical_moves(&series)
            .unwrap();
        for stats in moves.values() {
            prop_assert!(stats.min <= stats.p05 + 1e-12);
            prop_assert!(stats.p05 <= stats.p95 + 1e-12);
            prop_assert!(stats.p95 <= stats.max + 1e-12);
            prop_assert!(stats.volatility >= 0.0);
            prop_assert!(stats.volatility.is_finite());
            prop_assert!(stats.observations <= lookback);
        }
    }

    // ===================================================================
    // Every forward row matches the closed-form formula.
    // ===================================================================
    #[test]
    fn forward_matches_formula(series in arb_series()) {
        let fwd = forward_rate(&series, Tenor::Y5, Tenor::Y10).unwrap();
        let near = series.column(Tenor::Y5).unwrap();
        let far = series.column(Tenor::Y10).unwrap();
        for i in 0..series.len() {
            let expected = ((1.0 + far[i] / 100.0 * 10.0) / (1.0 + near[i] / 100.0 * 5.0))
                .powf(1.0 / 5.0) - 1.0;
            prop_assert!((fwd[i] - expected * 100.0).abs() < 1e-9);
        }
    }

    // ===================================================================
    // Equal starting and ending yields over one year forward give a
    // forward below the spot rate under simple interest.
    // ===================================================================
    #[test]
    fn flat_forward_below_spot(rate in 0.01f64..10.0) {
        let fwd = implied_forward(rate, 1.0, rate, 2.0);
        prop_assert!(fwd < rate);
        prop_assert!(fwd > 0.0);
    }
}
