use crate::analytics::forward::calculate_forward_rates;
use crate::analytics::spread::calculate_spreads;
use crate::core::error::Result;
use crate::core::series::CurveSnapshot;
use crate::core::store::CurveStore;
use crate::core::table::DatedTable;
use crate::core::tenor::Tenor;
use crate::simulation::historical::{HistoricalMoveAnalyzer, MoveStatistics};
use crate::simulation::scenario::StressResultRow;
use crate::simulation::stress_test::StressTestEngine;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Everything the analytics compute for one loaded curve history.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub latest: CurveSnapshot,
    pub forwards: DatedTable,
    pub spreads: DatedTable,
    pub historical_moves: BTreeMap<Tenor, MoveStatistics>,
    pub stress: Vec<StressResultRow>,
}

impl AnalyticsReport {
    /// Run every computation against the store's canonical series.
    pub fn build(store: &CurveStore, lookback: usize) -> Result<Self> {
        let series = store.series()?;
        Ok(Self {
            latest: store.latest()?,
            forwards: calculate_forward_rates(series)?,
            spreads: calculate_spreads(series)?,
            historical_moves: HistoricalMoveAnalyzer::with_lookback(lookback)
                .calculate_historical_moves(series)?,
            stress: StressTestEngine::new(lookback).stress_test_yields(series)?,
        })
    }
}

fn write_latest_row(f: &mut fmt::Formatter<'_>, table: &DatedTable) -> fmt::Result {
    for label in table.labels() {
        if let Some(value) = table.last_value(label) {
            writeln!(f, "  {:<8}{:>10.4}", label, value)?;
        }
    }
    Ok(())
}

impl fmt::Display for AnalyticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Yield Curve Analytics ===")?;
        writeln!(f, "Latest curve: {}", self.latest)?;

        writeln!(f, "\nForward Rates (%):")?;
        write_latest_row(f, &self.forwards)?;

        writeln!(f, "\nSpreads (pp):")?;
        write_latest_row(f, &self.spreads)?;

        writeln!(f, "\nHistorical Daily Moves:")?;
        for (tenor, stats) in &self.historical_moves {
            writeln!(f, "  {:<5}{}", tenor.label(), stats)?;
        }

        writeln!(f, "\nStress Test (2s10s):")?;
        writeln!(
            f,
            "{:<24}{:>16}{:>16}{:>12}",
            "Scenario", "Original_Spread", "Shocked_Spread", "Delta"
        )?;
        for row in &self.stress {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
