use crate::core::error::{AnalyticsError, Result};
use crate::core::tenor::Tenor;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// All tenor yields for one date, in percent.
///
/// # Examples
///
/// ```
/// use yield_curve_analytics::core::series::CurveSnapshot;
/// use yield_curve_analytics::core::tenor::Tenor;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let snapshot = CurveSnapshot::new(date)
///     .with_yield(Tenor::Y2, 4.00)
///     .with_yield(Tenor::Y10, 4.30);
///
/// assert_eq!(snapshot.yield_at(Tenor::Y10).unwrap(), 4.30);
/// assert!(snapshot.yield_at(Tenor::Y5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSnapshot {
    pub date: NaiveDate,
    pub yields: BTreeMap<Tenor, f64>,
}

impl CurveSnapshot {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            yields: BTreeMap::new(),
        }
    }

    pub fn with_yield(mut self, tenor: Tenor, value: f64) -> Self {
        self.yields.insert(tenor, value);
        self
    }

    /// Yield at `tenor`, or `MissingTenor` if the snapshot has none.
    pub fn yield_at(&self, tenor: Tenor) -> Result<f64> {
        self.yields
            .get(&tenor)
            .copied()
            .ok_or(AnalyticsError::MissingTenor(tenor))
    }

    pub fn tenors(&self) -> impl Iterator<Item = Tenor> + '_ {
        self.yields.keys().copied()
    }
}

impl fmt::Display for CurveSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;
        for (tenor, value) in &self.yields {
            write!(f, "  {}={:.3}", tenor, value)?;
        }
        Ok(())
    }
}

/// A date-ordered table of yields, one column per tenor.
///
/// Dates are unique and strictly increasing, and every column has one
/// value per date. Both are checked on construction, so downstream
/// computations only ever have to ask whether a column exists.
///
/// Values are percentages (4.25 means 4.25%).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateSeries {
    dates: Vec<NaiveDate>,
    columns: BTreeMap<Tenor, Vec<f64>>,
}

impl RateSeries {
    /// Build a series from a date index and per-tenor columns.
    pub fn new(dates: Vec<NaiveDate>, columns: BTreeMap<Tenor, Vec<f64>>) -> Result<Self> {
        for pair in dates.windows(2) {
            if pair[1] <= pair[0] {
                return Err(AnalyticsError::NonIncreasingDates {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        for (tenor, values) in &columns {
            if values.len() != dates.len() {
                return Err(AnalyticsError::ColumnLength {
                    tenor: *tenor,
                    expected: dates.len(),
                    found: values.len(),
                });
            }
        }
        Ok(Self { dates, columns })
    }

    /// Build a series from row snapshots.
    ///
    /// The first snapshot fixes the tenor set; every other snapshot must
    /// carry exactly those tenors. Gaps are rejected, never filled, and the
    /// error names the date of the offending snapshot.
    pub fn from_snapshots(snapshots: Vec<CurveSnapshot>) -> Result<Self> {
        let tenors: Vec<Tenor> = match snapshots.first() {
            Some(first) => first.tenors().collect(),
            None => return Self::new(Vec::new(), BTreeMap::new()),
        };

        let mut dates = Vec::with_capacity(snapshots.len());
        let mut columns: BTreeMap<Tenor, Vec<f64>> = tenors
            .iter()
            .map(|t| (*t, Vec::with_capacity(snapshots.len())))
            .collect();

        for snapshot in &snapshots {
            if let Some(extra) = snapshot.tenors().find(|t| !columns.contains_key(t)) {
                return Err(AnalyticsError::IncompleteSnapshot {
                    date: snapshot.date,
                    tenor: extra,
                });
            }
            for (tenor, column) in columns.iter_mut() {
                let value = snapshot.yields.get(tenor).copied().ok_or(
                    AnalyticsError::IncompleteSnapshot {
                        date: snapshot.date,
                        tenor: *tenor,
                    },
                )?;
                column.push(value);
            }
            dates.push(snapshot.date);
        }

        Self::new(dates, columns)
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn has_tenor(&self, tenor: Tenor) -> bool {
        self.columns.contains_key(&tenor)
    }

    /// Tenors present in the series, shortest first.
    pub fn tenors(&self) -> Vec<Tenor> {
        self.columns.keys().copied().collect()
    }

    /// The full column for `tenor`.
    pub fn column(&self, tenor: Tenor) -> Result<&[f64]> {
        self.columns
            .get(&tenor)
            .map(Vec::as_slice)
            .ok_or(AnalyticsError::MissingTenor(tenor))
    }

    /// Fail with `MissingTenor` on the first required tenor that is absent.
    pub fn require(&self, tenors: &[Tenor]) -> Result<()> {
        match tenors.iter().find(|t| !self.has_tenor(**t)) {
            Some(missing) => Err(AnalyticsError::MissingTenor(*missing)),
            None => Ok(()),
        }
    }

    /// Row `index` as a snapshot.
    pub fn snapshot(&self, index: usize) -> Option<CurveSnapshot> {
        let date = *self.dates.get(index)?;
        let yields = self
            .columns
            .iter()
            .map(|(tenor, values)| (*tenor, values[index]))
            .collect();
        Some(CurveSnapshot { date, yields })
    }

    /// The most recent row.
    pub fn last(&self) -> Option<CurveSnapshot> {
        self.len().checked_sub(1).and_then(|i| self.snapshot(i))
    }

    /// Row position of `date`, if present.
    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.dates.binary_search(&date).ok()
    }

    /// Rows dated on or after `start`.
    pub fn since(&self, start: NaiveDate) -> RateSeries {
        let skip = self.dates.partition_point(|d| *d < start);
        RateSeries {
            dates: self.dates[skip..].to_vec(),
            columns: self
                .columns
                .iter()
                .map(|(tenor, values)| (*tenor, values[skip..].to_vec()))
                .collect(),
        }
    }

    /// A copy of the series with each listed tenor shifted by a constant
    /// number of percentage points on every row.
    ///
    /// `self` is untouched; the shift lands on an owned clone.
    pub fn shifted(&self, shocks: &BTreeMap<Tenor, f64>) -> Result<RateSeries> {
        self.require(&shocks.keys().copied().collect::<Vec<_>>())?;
        let mut shocked = self.clone();
        for (tenor, shock) in shocks {
            if let Some(values) = shocked.columns.get_mut(tenor) {
                values.iter_mut().for_each(|v| *v += shock);
            }
        }
        Ok(shocked)
    }
}
