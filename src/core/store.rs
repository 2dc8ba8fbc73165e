use crate::core::error::{AnalyticsError, Result};
use crate::core::series::{CurveSnapshot, RateSeries};
use crate::core::tenor::Tenor;
use chrono::NaiveDate;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Settings fixed when the store is constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreConfig {
    /// Rows dated before this are dropped on load. `None` keeps everything.
    pub start_date: Option<NaiveDate>,
}

/// Owner of the canonical rate series.
///
/// Every read fails with `EmptyStore` until a non-empty series is
/// loaded. Consumers get borrowed views or owned snapshots; nothing
/// handed out can mutate the stored series.
///
/// # Examples
///
/// ```
/// use yield_curve_analytics::core::series::{CurveSnapshot, RateSeries};
/// use yield_curve_analytics::core::store::{CurveStore, StoreConfig};
/// use yield_curve_analytics::core::tenor::Tenor;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let series = RateSeries::from_snapshots(vec![
///     CurveSnapshot::new(date).with_yield(Tenor::Y2, 4.0),
/// ]).unwrap();
///
/// let mut store = CurveStore::new(StoreConfig::default());
/// assert!(store.latest().is_err());
///
/// store.load(series);
/// assert_eq!(store.latest().unwrap().yield_at(Tenor::Y2).unwrap(), 4.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurveStore {
    config: StoreConfig,
    series: Option<RateSeries>,
}

impl CurveStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            series: None,
        }
    }

    /// Replace the stored series, applying the configured start date.
    pub fn load(&mut self, series: RateSeries) {
        let series = match self.config.start_date {
            Some(start) => {
                let filtered = series.since(start);
                let dropped = series.len() - filtered.len();
                if dropped > 0 {
                    warn!("dropped {} rows dated before {}", dropped, start);
                }
                filtered
            }
            None => series,
        };
        debug!(
            "loaded {} rows across {} tenors",
            series.len(),
            series.tenors().len()
        );
        self.series = if series.is_empty() { None } else { Some(series) };
    }

    pub fn is_loaded(&self) -> bool {
        self.series.is_some()
    }

    /// Read-only view of the canonical series.
    pub fn series(&self) -> Result<&RateSeries> {
        self.series.as_ref().ok_or(AnalyticsError::EmptyStore)
    }

    pub fn dates(&self) -> Result<&[NaiveDate]> {
        Ok(self.series()?.dates())
    }

    pub fn len(&self) -> usize {
        self.series.as_ref().map_or(0, RateSeries::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Yields for `tenor`, keyed by date.
    pub fn get(&self, tenor: Tenor) -> Result<BTreeMap<NaiveDate, f64>> {
        let series = self.series()?;
        let values = series.column(tenor)?;
        Ok(series
            .dates()
            .iter()
            .copied()
            .zip(values.iter().copied())
            .collect())
    }

    /// Snapshot at the most recent date.
    pub fn latest(&self) -> Result<CurveSnapshot> {
        self.series()?.last().ok_or(AnalyticsError::EmptyStore)
    }

    /// Snapshot at exactly `date`. No interpolation between dates.
    pub fn at(&self, date: NaiveDate) -> Result<CurveSnapshot> {
        let series = self.series()?;
        series
            .position(date)
            .and_then(|i| series.snapshot(i))
            .ok_or(AnalyticsError::Lookup { date })
    }
}
