//! Distribution of day-over-day yield moves.
//!
//! Moves are plain first differences in percentage points between
//! consecutive rows. Calendar gaps between rows are ignored.
//!
//! Percentiles use linear interpolation between order statistics with
//! rank `p·(n−1)`, so the 95th percentile of `[0.1, 0.2]` is `0.195`.
//! A nearest-rank method would return `0.2` there.
//!
//! Volatility is the sample standard deviation (divisor `n−1`). With
//! fewer than two moves in the window it is undefined, and the analyzer
//! fails with `DegenerateStatistics` instead of returning NaN.

use crate::core::error::{AnalyticsError, Result};
use crate::core::series::RateSeries;
use crate::core::tenor::Tenor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Trading days in a year; the default lookback.
pub const DEFAULT_LOOKBACK: usize = 252;

/// Summary of one tenor's daily moves over the lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveStatistics {
    pub max: f64,
    pub min: f64,
    pub p95: f64,
    pub p05: f64,
    pub volatility: f64,
    /// Number of moves the figures were computed from.
    pub observations: usize,
}

impl MoveStatistics {
    /// Statistics of `moves`, which must hold at least two values.
    fn from_moves(tenor: Tenor, moves: &[f64]) -> Result<Self> {
        if moves.len() < 2 {
            return Err(AnalyticsError::DegenerateStatistics {
                tenor,
                observations: moves.len(),
            });
        }

        let mut sorted = moves.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let degenerate = || AnalyticsError::DegenerateStatistics {
            tenor,
            observations: moves.len(),
        };

        Ok(Self {
            max: sorted[sorted.len() - 1],
            min: sorted[0],
            p95: percentile(&sorted, 0.95).ok_or_else(degenerate)?,
            p05: percentile(&sorted, 0.05).ok_or_else(degenerate)?,
            volatility: sample_std_dev(moves),
            observations: moves.len(),
        })
    }
}

impl fmt::Display for MoveStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max {:+.4}  min {:+.4}  p95 {:+.4}  p05 {:+.4}  vol {:.4}  (n={})",
            self.max, self.min, self.p95, self.p05, self.volatility, self.observations
        )
    }
}

/// Linear-interpolation percentile of an ascending slice.
///
/// `None` for an empty slice. `p` is clamped to `[0, 1]`.
fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    if last == 0 {
        return Some(sorted[0]);
    }
    let rank = p.clamp(0.0, 1.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let weight = rank - lo as f64;
    Some(sorted[lo] + weight * (sorted[hi] - sorted[lo]))
}

/// Sample standard deviation. Callers guarantee at least two values.
fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (n - 1.0)).sqrt()
}

/// First differences of `values`, without the undefined leading entry.
pub fn daily_moves(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Computes [`MoveStatistics`] for a set of tenors.
///
/// # Examples
///
/// ```
/// use yield_curve_analytics::core::series::{CurveSnapshot, RateSeries};
/// use yield_curve_analytics::core::tenor::Tenor;
/// use yield_curve_analytics::simulation::historical::HistoricalMoveAnalyzer;
/// use chrono::NaiveDate;
///
/// let rows = [(2, 3.80), (3, 3.90), (4, 4.10)];
/// let series = RateSeries::from_snapshots(
///     rows.iter()
///         .map(|(d, y)| {
///             CurveSnapshot::new(NaiveDate::from_ymd_opt(2024, 1, *d).unwrap())
///                 .with_yield(Tenor::Y2, *y)
///         })
///         .collect(),
/// )
/// .unwrap();
///
/// let analyzer = HistoricalMoveAnalyzer::new(2, vec![Tenor::Y2]);
/// let stats = analyzer.statistics(&series, Tenor::Y2).unwrap();
/// assert!((stats.max - 0.20).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalMoveAnalyzer {
    /// Number of most recent moves considered.
    pub lookback: usize,
    /// Tenors reported by [`calculate_historical_moves`](Self::calculate_historical_moves).
    pub tenors: Vec<Tenor>,
}

impl Default for HistoricalMoveAnalyzer {
    fn default() -> Self {
        Self {
            lookback: DEFAULT_LOOKBACK,
            tenors: vec![Tenor::Y2, Tenor::Y10],
        }
    }
}

impl HistoricalMoveAnalyzer {
    pub fn new(lookback: usize, tenors: Vec<Tenor>) -> Self {
        Self { lookback, tenors }
    }

    /// Default tenors with a custom lookback.
    pub fn with_lookback(lookback: usize) -> Self {
        Self {
            lookback,
            ..Default::default()
        }
    }

    /// The moves for `tenor` that fall inside the lookback window.
    pub fn window(&self, series: &RateSeries, tenor: Tenor) -> Result<Vec<f64>> {
        let moves = daily_moves(series.column(tenor)?);
        let skip = moves.len().saturating_sub(self.lookback);
        Ok(moves[skip..].to_vec())
    }

    /// Statistics for a single tenor.
    pub fn statistics(&self, series: &RateSeries, tenor: Tenor) -> Result<MoveStatistics> {
        let window = self.window(series, tenor)?;
        let stats = MoveStatistics::from_moves(tenor, &window)?;
        debug!("{} moves over {} days: {}", tenor, self.lookback, stats);
        Ok(stats)
    }

    /// Statistics for every configured tenor, recomputed on each call.
    pub fn calculate_historical_moves(
        &self,
        series: &RateSeries,
    ) -> Result<BTreeMap<Tenor, MoveStatistics>> {
        series.require(&self.tenors)?;
        let mut moves = BTreeMap::new();
        for tenor in &self.tenors {
            moves.insert(*tenor, self.statistics(series, *tenor)?);
        }
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    fn series_of(two_year: &[f64], ten_year: &[f64]) -> RateSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = (0..two_year.len())
            .map(|i| start + chrono::Duration::days(i as i64))
            .collect();
        let mut columns = BTreeMap::new();
        columns.insert(Tenor::Y2, two_year.to_vec());
        columns.insert(Tenor::Y10, ten_year.to_vec());
        RateSeries::new(dates, columns).unwrap()
    }

    #[test]
    fn test_daily_moves_drop_leading_entry() {
        let moves = daily_moves(&[1.0, 1.5, 1.25]);
        assert_eq!(moves, vec![0.5, -0.25]);
        assert!(daily_moves(&[1.0]).is_empty());
    }

    #[test]
    fn test_percentile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(percentile(&sorted, 0.5).unwrap(), 3.0);
        assert_abs_diff_eq!(percentile(&sorted, 0.95).unwrap(), 4.8, epsilon = 1e-12);
        assert_abs_diff_eq!(percentile(&sorted, 0.05).unwrap(), 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(percentile(&sorted, 1.0).unwrap(), 5.0);
    }

    #[test]
    fn test_percentile_edges_do_not_panic() {
        assert_eq!(percentile(&[], 0.95), None);
        assert_eq!(percentile(&[0.3], 0.05), Some(0.3));

        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(percentile(&sorted, 1.5), Some(3.0));
        assert_eq!(percentile(&sorted, -0.5), Some(1.0));
    }

    #[test]
    fn test_empty_moves_are_degenerate() {
        assert_eq!(
            MoveStatistics::from_moves(Tenor::Y2, &[]).unwrap_err(),
            AnalyticsError::DegenerateStatistics {
                tenor: Tenor::Y2,
                observations: 0
            }
        );
    }

    #[test]
    fn test_two_observation_window() {
        let series = series_of(&[3.80, 3.90, 4.10], &[4.00, 3.95, 3.90]);
        let analyzer = HistoricalMoveAnalyzer::with_lookback(2);
        let moves = analyzer.calculate_historical_moves(&series).unwrap();

        let two = moves[&Tenor::Y2];
        assert_eq!(two.observations, 2);
        assert_abs_diff_eq!(two.max, 0.20, epsilon = 1e-9);
        assert_abs_diff_eq!(two.min, 0.10, epsilon = 1e-9);
        assert_abs_diff_eq!(two.p95, 0.195, epsilon = 1e-9);
        assert_abs_diff_eq!(two.p05, 0.105, epsilon = 1e-9);
        assert_abs_diff_eq!(two.volatility, 0.05_f64 * 2.0_f64.sqrt(), epsilon = 1e-9);

        let ten = moves[&Tenor::Y10];
        assert_abs_diff_eq!(ten.min, -0.05, epsilon = 1e-9);
        assert_abs_diff_eq!(ten.volatility, 0.0, epsilon = 1e-9);
        assert!(ten.volatility.is_finite());
    }

    #[test]
    fn test_lookback_keeps_most_recent_moves() {
        let series = series_of(&[1.0, 3.0, 3.1, 3.3], &[2.0, 2.0, 2.0, 2.0]);
        let analyzer = HistoricalMoveAnalyzer::new(2, vec![Tenor::Y2]);
        let window = analyzer.window(&series, Tenor::Y2).unwrap();
        assert_eq!(window.len(), 2);

        // The 2.0 jump is outside the window.
        let stats = analyzer.statistics(&series, Tenor::Y2).unwrap();
        assert!(stats.max < 1.0);
    }

    #[test]
    fn test_lookback_longer_than_history_uses_all() {
        let series = series_of(&[1.0, 1.1, 1.3, 1.0], &[2.0, 2.0, 2.0, 2.0]);
        let stats = HistoricalMoveAnalyzer::default()
            .statistics(&series, Tenor::Y2)
            .unwrap();
        assert_eq!(stats.observations, 3);
    }

    #[test]
    fn test_single_move_is_degenerate() {
        let series = series_of(&[3.8, 3.9], &[4.0, 3.95]);
        let err = HistoricalMoveAnalyzer::default()
            .calculate_historical_moves(&series)
            .unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::DegenerateStatistics {
                tenor: Tenor::Y2,
                observations: 1
            }
        );
    }

    #[test]
    fn test_zero_lookback_is_degenerate() {
        let series = series_of(&[3.8, 3.9, 4.0], &[4.0, 3.95, 3.9]);
        let err = HistoricalMoveAnalyzer::with_lookback(0)
            .statistics(&series, Tenor::Y10)
            .unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::DegenerateStatistics {
                tenor: Tenor::Y10,
                observations: 0
            }
        );
    }

    #[test]
    fn test_missing_tenor() {
        let series = series_of(&[3.8, 3.9, 4.0], &[4.0, 3.95, 3.9]);
        let analyzer = HistoricalMoveAnalyzer::new(10, vec![Tenor::Y2, Tenor::Y5]);
        assert_eq!(
            analyzer.calculate_historical_moves(&series).unwrap_err(),
            AnalyticsError::MissingTenor(Tenor::Y5)
        );
    }
}
