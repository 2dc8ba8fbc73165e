//! Synthetic rate series for benchmarks and testing.
//!
//! Yields follow independent uniform random walks around a starting
//! curve. Output is reproducible for a given seed.

use crate::core::error::Result;
use crate::core::series::RateSeries;
use crate::core::tenor::Tenor;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Configuration for generating a random rate series.
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// Number of trading days to generate.
    pub days: usize,
    /// First date; weekends are skipped.
    pub start_date: NaiveDate,
    /// Starting yield per tenor, in percent.
    pub initial_curve: BTreeMap<Tenor, f64>,
    /// Largest absolute daily move, in percentage points.
    pub max_daily_move: f64,
    /// Yields never go below this.
    pub floor: f64,
    pub seed: u64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        let initial_curve = [
            (Tenor::M1, 5.30),
            (Tenor::M3, 5.25),
            (Tenor::M6, 5.10),
            (Tenor::Y1, 4.80),
            (Tenor::Y2, 4.40),
            (Tenor::Y3, 4.20),
            (Tenor::Y5, 4.05),
            (Tenor::Y7, 4.10),
            (Tenor::Y10, 4.15),
            (Tenor::Y20, 4.45),
            (Tenor::Y30, 4.35),
        ]
        .into_iter()
        .collect();

        Self {
            days: 500,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 3).unwrap_or_default(),
            initial_curve,
            max_daily_move: 0.10,
            floor: 0.0,
            seed: 42,
        }
    }
}

fn trading_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(count);
    let mut date = start;
    while dates.len() < count {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(date);
        }
        date += Duration::days(1);
    }
    dates
}

/// Generate a random-walk rate series for testing.
pub fn generate_random_series(config: &SeriesConfig) -> Result<RateSeries> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let dates = trading_days(config.start_date, config.days);

    let mut columns = BTreeMap::new();
    for (&tenor, &initial) in &config.initial_curve {
        let mut level = initial;
        let mut values = Vec::with_capacity(config.days);
        for _ in 0..config.days {
            values.push(level);
            let step = if config.max_daily_move > 0.0 {
                rng.gen_range(-config.max_daily_move..=config.max_daily_move)
            } else {
                0.0
            };
            level = (level + step).max(config.floor);
        }
        columns.insert(tenor, values);
    }

    RateSeries::new(dates, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::spread::calculate_spreads;
    use crate::simulation::stress_test::StressTestEngine;

    #[test]
    fn test_random_series_generation() {
        let config = SeriesConfig {
            days: 30,
            ..Default::default()
        };
        let series = generate_random_series(&config).unwrap();
        assert_eq!(series.len(), 30);
        assert_eq!(series.tenors(), Tenor::ALL.to_vec());
        assert!(series
            .dates()
            .iter()
            .all(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn test_same_seed_same_series() {
        let config = SeriesConfig::default();
        assert_eq!(
            generate_random_series(&config).unwrap(),
            generate_random_series(&config).unwrap()
        );
    }

    #[test]
    fn test_random_series_stress() {
        let series = generate_random_series(&SeriesConfig::default()).unwrap();
        calculate_spreads(&series).unwrap();
        let rows = StressTestEngine::default().stress_test_yields(&series).unwrap();
        assert_eq!(rows.len(), 4);
    }
}
