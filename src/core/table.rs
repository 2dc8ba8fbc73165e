use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Date-indexed table of labelled numeric columns.
///
/// This is the export shape for forward rates and spreads. Columns keep
/// insertion order so output is reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedTable {
    dates: Vec<NaiveDate>,
    columns: Vec<(String, Vec<f64>)>,
}

impl DatedTable {
    pub fn new(dates: Vec<NaiveDate>) -> Self {
        Self {
            dates,
            columns: Vec::new(),
        }
    }

    /// Append a column. Its length must match the date index.
    pub(crate) fn push_column(&mut self, label: impl Into<String>, values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.dates.len());
        self.columns.push((label.into(), values));
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

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|(l, _)| l.as_str()).collect()
    }

    pub fn column(&self, label: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_slice())
    }

    /// Value of `label` on the most recent date.
    pub fn last_value(&self, label: &str) -> Option<f64> {
        self.column(label).and_then(|v| v.last().copied())
    }

    /// Row-wise view: one record per date.
    pub fn records(&self) -> impl Iterator<Item = TableRecord<'_>> {
        (0..self.dates.len()).map(move |row| TableRecord { table: self, row })
    }
}

/// One row of a [`DatedTable`].
#[derive(Debug, Clone, Copy)]
pub struct TableRecord<'a> {
    table: &'a DatedTable,
    row: usize,
}

impl TableRecord<'_> {
    pub fn date(&self) -> NaiveDate {
        self.table.dates[self.row]
    }
}

impl Serialize for TableRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.table.columns.len() + 1))?;
        map.serialize_entry("date", &self.date())?;
        for (label, values) in &self.table.columns {
            map.serialize_entry(label, &values[self.row])?;
        }
        map.end()
    }
}

impl Serialize for DatedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records())
    }
}

impl fmt::Display for DatedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12}", "date")?;
        for (label, _) in &self.columns {
            write!(f, "{:>10}", label)?;
        }
        writeln!(f)?;
        for record in self.records() {
            write!(f, "{:<12}", record.date().to_string())?;
            for (_, values) in &self.columns {
                write!(f, "{:>10.4}", values[record.row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
