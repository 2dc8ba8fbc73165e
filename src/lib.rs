//! # yield-curve-analytics
//!
//! Forward rates, curve spreads and historical stress tests for an
//! interest rate term structure.
//!
//! Given a date-indexed series of yields by tenor, this crate derives
//! implied forwards, named spreads, the distribution of daily moves and
//! the response of the 2s10s spread to historical shock scenarios.
//!
//! ## Architecture
//!
//! - **core** — Tenors, rate series, the curve store, errors, output tables
//! - **analytics** — Forward rate and spread calculators
//! - **simulation** — Historical move statistics, stress scenarios, synthetic series
//! - **report** — Every computation bundled for one store

pub mod analytics;
pub mod core;
pub mod report;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::analytics::forward::{calculate_forward_rates, forward_rate, ForwardKind};
    pub use crate::analytics::spread::{calculate_spreads, SpreadKind};
    pub use crate::core::error::{AnalyticsError, Result};
    pub use crate::core::series::{CurveSnapshot, RateSeries};
    pub use crate::core::store::{CurveStore, StoreConfig};
    pub use crate::core::table::DatedTable;
    pub use crate::core::tenor::Tenor;
    pub use crate::report::AnalyticsReport;
    pub use crate::simulation::historical::{HistoricalMoveAnalyzer, MoveStatistics};
    pub use crate::simulation::scenario::{StressResultRow, StressScenario};
    pub use crate::simulation::stress_test::StressTestEngine;
}
