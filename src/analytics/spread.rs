use crate::core::error::Result;
use crate::core::series::RateSeries;
use crate::core::table::DatedTable;
use crate::core::tenor::Tenor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A curve-shape indicator: long leg minus short leg, in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpreadKind {
    /// 10Y − 2Y
    #[serde(rename = "2s10s")]
    TwosTens,
    /// 10Y − 3M
    #[serde(rename = "3m10y")]
    ThreeMonthTenYear,
    /// 30Y − 5Y
    #[serde(rename = "5s30s")]
    FivesThirties,
}

impl SpreadKind {
    pub const ALL: [SpreadKind; 3] = [
        SpreadKind::TwosTens,
        SpreadKind::ThreeMonthTenYear,
        SpreadKind::FivesThirties,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SpreadKind::TwosTens => "2s10s",
            SpreadKind::ThreeMonthTenYear => "3m10y",
            SpreadKind::FivesThirties => "5s30s",
        }
    }

    /// `(short, long)` legs.
    pub fn legs(self) -> (Tenor, Tenor) {
        match self {
            SpreadKind::TwosTens => (Tenor::Y2, Tenor::Y10),
            SpreadKind::ThreeMonthTenYear => (Tenor::M3, Tenor::Y10),
            SpreadKind::FivesThirties => (Tenor::Y5, Tenor::Y30),
        }
    }
}

impl fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tenors needed by [`calculate_spreads`].
pub const SPREAD_TENORS: [Tenor; 5] = [Tenor::M3, Tenor::Y2, Tenor::Y5, Tenor::Y10, Tenor::Y30];

/// One spread for every date. Needs only the spread's two legs.
pub fn spread(series: &RateSeries, kind: SpreadKind) -> Result<Vec<f64>> {
    let (short, long) = kind.legs();
    let short = series.column(short)?;
    let long = series.column(long)?;
    Ok(long.iter().zip(short).map(|(l, s)| l - s).collect())
}

/// The `2s10s`, `3m10y` and `5s30s` spreads for every date.
///
/// Works the same on the canonical series or on a shocked copy. Fails
/// with `MissingTenor` unless 3M, 2Y, 5Y, 10Y and 30Y are all present.
///
/// # Examples
///
/// ```
/// use yield_curve_analytics::analytics::spread::calculate_spreads;
/// use yield_curve_analytics::core::series::{CurveSnapshot, RateSeries};
/// use yield_curve_analytics::core::tenor::Tenor;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let series = RateSeries::from_snapshots(vec![CurveSnapshot::new(date)
///     .with_yield(Tenor::M3, 5.00)
///     .with_yield(Tenor::Y2, 4.00)
///     .with_yield(Tenor::Y5, 4.00)
///     .with_yield(Tenor::Y10, 4.30)
///     .with_yield(Tenor::Y30, 4.50)])
/// .unwrap();
///
/// let spreads = calculate_spreads(&series).unwrap();
/// assert!((spreads.last_value("2s10s").unwrap() - 0.30).abs() < 1e-12);
/// ```
pub fn calculate_spreads(series: &RateSeries) -> Result<DatedTable> {
    series.require(&SPREAD_TENORS)?;
    debug!("spreads over {} rows", series.len());

    let mut table = DatedTable::new(series.dates().to_vec());
    for kind in SpreadKind::ALL {
        table.push_column(kind.label(), spread(series, kind)?);
    }
    Ok(table)
}
