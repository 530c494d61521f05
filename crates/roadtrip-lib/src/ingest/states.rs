use std::collections::HashSet;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;

use super::strip_parentheses;
use crate::error::{DataSource, Error, Result};

/// Validity end date marking rows that describe currently existing states.
pub const SNAPSHOT_END_DATE: &str = "2020-12-31";

/// One row of the state identifier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateRecord {
    pub number: u32,
    pub identifier: String,
    pub name: String,
    pub start: String,
    pub end: String,
}

/// State identifiers with validity ranges, parsed from a tab-delimited table.
///
/// Every row is kept because historical names may still appear in the border
/// list; rows whose end date equals the snapshot date are flagged current.
#[derive(Debug, Clone)]
pub struct StateTable {
    records: Vec<StateRecord>,
    current: HashSet<String>,
    snapshot_end_date: String,
}

impl StateTable {
    /// Parse the tab-delimited table. The header row is discarded.
    ///
    /// Columns: `statenum, stateid, countryname, start, end`. Parenthesised
    /// qualifiers in the country name are removed.
    pub fn parse(text: &str, snapshot_end_date: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes(), snapshot_end_date)
    }

    /// Parse the table from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R, snapshot_end_date: &str) -> Result<Self> {
        let mut tsv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for record in tsv_reader.records() {
            let record = record?;
            records.push(parse_record(&record)?);
        }

        Ok(Self::from_records(records, snapshot_end_date))
    }

    /// Build a table from already-typed records.
    pub fn from_records(records: Vec<StateRecord>, snapshot_end_date: &str) -> Self {
        let current = records
            .iter()
            .filter(|record| record.end == snapshot_end_date)
            .map(|record| record.identifier.clone())
            .collect();

        Self {
            records,
            current,
            snapshot_end_date: snapshot_end_date.to_string(),
        }
    }

    /// Every row in source order.
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    /// Rows valid as of the snapshot date.
    pub fn current(&self) -> impl Iterator<Item = &StateRecord> {
        self.records
            .iter()
            .filter(|record| record.end == self.snapshot_end_date)
    }

    /// Whether `record` is valid as of the snapshot date.
    pub fn is_current_record(&self, record: &StateRecord) -> bool {
        record.end == self.snapshot_end_date
    }

    /// Whether the identifier has at least one row valid as of the snapshot date.
    pub fn is_current(&self, identifier: &str) -> bool {
        self.current.contains(identifier)
    }

    pub fn snapshot_end_date(&self) -> &str {
        &self.snapshot_end_date
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_record(record: &StringRecord) -> Result<StateRecord> {
    let line = record.position().map(|pos| pos.line()).unwrap_or(0);
    if record.len() < 5 {
        return Err(Error::MalformedRecord {
            dataset: DataSource::StateNames,
            line,
            message: format!("expected 5 tab-separated columns, found {}", record.len()),
        });
    }

    let number = record[0].parse().map_err(|_| Error::InvalidNumber {
        dataset: DataSource::StateNames,
        line,
        field: "statenum",
        value: record[0].to_string(),
    })?;

    Ok(StateRecord {
        number,
        identifier: record[1].to_string(),
        name: strip_parentheses(&record[2]).trim().to_string(),
        start: record[3].to_string(),
        end: record[4].to_string(),
    })
}
