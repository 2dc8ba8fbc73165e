use crate::core::error::AnalyticsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A labelled point on the maturity axis.
///
/// Variants are declared shortest to longest, so the derived ordering
/// is maturity order.
///
/// # Examples
///
/// ```
/// use yield_curve_analytics::core::tenor::Tenor;
///
/// let two_year: Tenor = "2Y".parse().unwrap();
/// assert_eq!(two_year, Tenor::Y2);
/// assert_eq!(two_year.years(), 2.0);
/// assert!(Tenor::M3 < Tenor::Y10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tenor {
    M1,
    M3,
    M6,
    Y1,
    Y2,
    Y3,
    Y5,
    Y7,
    Y10,
    Y20,
    Y30,
}

impl Tenor {
    /// Every tenor, shortest first.
    pub const ALL: [Tenor; 11] = [
        Tenor::M1,
        Tenor::M3,
        Tenor::M6,
        Tenor::Y1,
        Tenor::Y2,
        Tenor::Y3,
        Tenor::Y5,
        Tenor::Y7,
        Tenor::Y10,
        Tenor::Y20,
        Tenor::Y30,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tenor::M1 => "1M",
            Tenor::M3 => "3M",
            Tenor::M6 => "6M",
            Tenor::Y1 => "1Y",
            Tenor::Y2 => "2Y",
            Tenor::Y3 => "3Y",
            Tenor::Y5 => "5Y",
            Tenor::Y7 => "7Y",
            Tenor::Y10 => "10Y",
            Tenor::Y20 => "20Y",
            Tenor::Y30 => "30Y",
        }
    }

    /// Maturity in years.
    pub fn years(self) -> f64 {
        match self {
            Tenor::M1 => 1.0 / 12.0,
            Tenor::M3 => 3.0 / 12.0,
            Tenor::M6 => 6.0 / 12.0,
            Tenor::Y1 => 1.0,
            Tenor::Y2 => 2.0,
            Tenor::Y3 => 3.0,
            Tenor::Y5 => 5.0,
            Tenor::Y7 => 7.0,
            Tenor::Y10 => 10.0,
            Tenor::Y20 => 20.0,
            Tenor::Y30 => 30.0,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tenor {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tenor::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AnalyticsError::InvalidTenor(s.to_string()))
    }
}

impl TryFrom<String> for Tenor {
    type Error = AnalyticsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.label().to_string()
    }
}
