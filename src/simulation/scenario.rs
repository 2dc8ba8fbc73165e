//! Named yield shocks and their repricing results.

use crate::core::tenor::Tenor;
use crate::simulation::historical::MoveStatistics;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A named set of additive yield shocks, in percentage points.
///
/// A shock of `0.25` on 2Y moves a 4.00% yield to 4.25%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressScenario {
    pub name: String,
    pub shocks: BTreeMap<Tenor, f64>,
}

impl StressScenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shocks: BTreeMap::new(),
        }
    }

    pub fn with_shock(mut self, tenor: Tenor, shock: f64) -> Self {
        self.shocks.insert(tenor, shock);
        self
    }

    /// Shock applied to `tenor`; zero if the scenario leaves it alone.
    pub fn shock(&self, tenor: Tenor) -> f64 {
        self.shocks.get(&tenor).copied().unwrap_or(0.0)
    }
}

/// The four historical scenarios, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoricalScenario {
    /// Largest 2Y rise with the largest 10Y fall.
    #[serde(rename = "Historical_Max_Stress")]
    HistoricalMax,
    /// 95th percentile 2Y move with 5th percentile 10Y move.
    #[serde(rename = "Historical_95_Stress")]
    Historical95,
    /// Two standard deviations, short end up, long end down.
    #[serde(rename = "Vol_Based_Stress")]
    VolBased,
    /// Three standard deviations, short end up, long end down.
    #[serde(rename = "Crisis_Scenario")]
    Crisis,
}

impl HistoricalScenario {
    pub const ALL: [HistoricalScenario; 4] = [
        HistoricalScenario::HistoricalMax,
        HistoricalScenario::Historical95,
        HistoricalScenario::VolBased,
        HistoricalScenario::Crisis,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HistoricalScenario::HistoricalMax => "Historical_Max_Stress",
            HistoricalScenario::Historical95 => "Historical_95_Stress",
            HistoricalScenario::VolBased => "Vol_Based_Stress",
            HistoricalScenario::Crisis => "Crisis_Scenario",
        }
    }

    /// `(2Y shock, 10Y shock)` derived from each tenor's move statistics.
    pub fn shocks(self, two_year: &MoveStatistics, ten_year: &MoveStatistics) -> (f64, f64) {
        match self {
            HistoricalScenario::HistoricalMax => (two_year.max, ten_year.min),
            HistoricalScenario::Historical95 => (two_year.p95, ten_year.p05),
            HistoricalScenario::VolBased => (2.0 * two_year.volatility, -2.0 * ten_year.volatility),
            HistoricalScenario::Crisis => (3.0 * two_year.volatility, -3.0 * ten_year.volatility),
        }
    }

    pub fn build(self, two_year: &MoveStatistics, ten_year: &MoveStatistics) -> StressScenario {
        let (short, long) = self.shocks(two_year, ten_year);
        StressScenario::new(self.name())
            .with_shock(Tenor::Y2, short)
            .with_shock(Tenor::Y10, long)
    }
}

impl fmt::Display for HistoricalScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All four historical scenarios from 2Y and 10Y statistics, in order.
pub fn historical_scenarios(
    two_year: &MoveStatistics,
    ten_year: &MoveStatistics,
) -> Vec<StressScenario> {
    HistoricalScenario::ALL
        .iter()
        .map(|s| s.build(two_year, ten_year))
        .collect()
}

/// Reference spread before and after one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressResultRow {
    #[serde(rename = "Scenario")]
    pub scenario: String,
    #[serde(rename = "Original_Spread")]
    pub original_spread: f64,
    #[serde(rename = "Shocked_Spread")]
    pub shocked_spread: f64,
    /// `shocked_spread − original_spread`.
    #[serde(rename = "Delta")]
    pub delta: f64,
}

impl fmt::Display for StressResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<24}{:>16.4}{:>16.4}{:>12.4}",
            self.scenario, self.original_spread, self.shocked_spread, self.delta
        )
    }
}
