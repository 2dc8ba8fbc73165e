use crate::core::tenor::Tenor;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the curve store and the analytics built on it.
///
/// Every computation fails fast with one of these rather than
/// substituting a default for missing data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("no rate series has been loaded")]
    EmptyStore,

    #[error("rate series has no rows")]
    EmptySeries,

    #[error("no curve snapshot for {date}")]
    Lookup { date: NaiveDate },

    #[error("unrecognized tenor label '{0}'")]
    InvalidTenor(String),

    #[error("forward from {start} to {end} requires a strictly later end tenor")]
    InvalidTenorPair { start: Tenor, end: Tenor },

    #[error("tenor {0} is not present in the rate series")]
    MissingTenor(Tenor),

    #[error("{observations} daily moves for {tenor} in the lookback window, need at least 2")]
    DegenerateStatistics { tenor: Tenor, observations: usize },

    #[error("dates must be strictly increasing, got {next} after {previous}")]
    NonIncreasingDates {
        previous: NaiveDate,
        next: NaiveDate,
    },

    #[error("column {tenor} has {found} values, expected {expected}")]
    ColumnLength {
        tenor: Tenor,
        expected: usize,
        found: usize,
    },

    #[error("snapshot for {date} has no {tenor} yield")]
    IncompleteSnapshot { date: NaiveDate, tenor: Tenor },
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
