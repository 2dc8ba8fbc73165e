//! Implied forward rates between two points of the curve.
//!
//! Forwards are bootstrapped with simple interest:
//!
//! ```text
//! forward = ((1 + r2·t2) / (1 + r1·t1))^(1 / (t2 − t1)) − 1
//! ```
//!
//! where `r1`, `r2` are the decimal yields at maturities `t1 < t2` years.
//! This is not continuous compounding; the result is not a log-return.

use crate::core::error::{AnalyticsError, Result};
use crate::core::series::RateSeries;
use crate::core::table::DatedTable;
use crate::core::tenor::Tenor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The named forwards reported for every curve.
///
/// The label-to-tenor mapping is a fixed alias table: `1y1y` is the
/// 1Y→2Y forward, `2y1y` is 2Y→3Y and `5y5y` is 5Y→10Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForwardKind {
    #[serde(rename = "1y1y")]
    OneYearOneYear,
    #[serde(rename = "2y1y")]
    TwoYearOneYear,
    #[serde(rename = "5y5y")]
    FiveYearFiveYear,
}

impl ForwardKind {
    /// Reporting order.
    pub const ALL: [ForwardKind; 3] = [
        ForwardKind::OneYearOneYear,
        ForwardKind::TwoYearOneYear,
        ForwardKind::FiveYearFiveYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ForwardKind::OneYearOneYear => "1y1y",
            ForwardKind::TwoYearOneYear => "2y1y",
            ForwardKind::FiveYearFiveYear => "5y5y",
        }
    }

    /// `(start, end)` tenors of the forward.
    pub fn tenors(self) -> (Tenor, Tenor) {
        match self {
            ForwardKind::OneYearOneYear => (Tenor::Y1, Tenor::Y2),
            ForwardKind::TwoYearOneYear => (Tenor::Y2, Tenor::Y3),
            ForwardKind::FiveYearFiveYear => (Tenor::Y5, Tenor::Y10),
        }
    }
}

impl fmt::Display for ForwardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Forward rate in percent implied by two yields in percent.
///
/// # Examples
///
/// ```
/// use yield_curve_analytics::analytics::forward::implied_forward;
///
/// let fwd = implied_forward(4.50, 1.0, 4.00, 2.0);
/// let expected = ((1.0 + 0.04 * 2.0) / (1.0 + 0.045 * 1.0) - 1.0) * 100.0;
/// assert!((fwd - expected).abs() < 1e-12);
/// ```
pub fn implied_forward(r1: f64, t1: f64, r2: f64, t2: f64) -> f64 {
    let growth_near = 1.0 + r1 / 100.0 * t1;
    let growth_far = 1.0 + r2 / 100.0 * t2;
    ((growth_far / growth_near).powf(1.0 / (t2 - t1)) - 1.0) * 100.0
}

/// Forward rate from `start` to `end` for every date in the series.
///
/// Fails with `InvalidTenorPair` unless `end` is strictly longer than
/// `start`, and with `MissingTenor` if either column is absent.
pub fn forward_rate(series: &RateSeries, start: Tenor, end: Tenor) -> Result<Vec<f64>> {
    let (t1, t2) = (start.years(), end.years());
    if t2 <= t1 {
        return Err(AnalyticsError::InvalidTenorPair { start, end });
    }
    let near = series.column(start)?;
    let far = series.column(end)?;
    debug!("forward {}->{} over {} rows", start, end, series.len());

    Ok(near
        .iter()
        .zip(far)
        .map(|(&r1, &r2)| implied_forward(r1, t1, r2, t2))
        .collect())
}

/// [`forward_rate`] with tenors given as labels such as `"5Y"`.
///
/// Unrecognized labels fail with `InvalidTenor`.
pub fn forward_rate_by_label(series: &RateSeries, start: &str, end: &str) -> Result<Vec<f64>> {
    let start: Tenor = start.parse()?;
    let end: Tenor = end.parse()?;
    forward_rate(series, start, end)
}

/// The `1y1y`, `2y1y` and `5y5y` forwards, one column each.
pub fn calculate_forward_rates(series: &RateSeries) -> Result<DatedTable> {
    let mut table = DatedTable::new(series.dates().to_vec());
    for kind in ForwardKind::ALL {
        let (start, end) = kind.tenors();
        table.push_column(kind.label(), forward_rate(series, start, end)?);
    }
    Ok(table)
}
