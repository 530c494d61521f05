use std::collections::HashMap;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{DataSource, Error, Result};

/// One row of the capital distance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapitalDistanceRecord {
    pub state_a: u32,
    pub code_a: String,
    pub state_b: u32,
    pub code_b: String,
    pub km: u32,
}

/// Capital-to-capital distances keyed by the ordered pair of state codes.
///
/// The source is directionally sparse: `(A, B)` may be present while
/// `(B, A)` is not, so [`CapitalDistances::lookup`] tries both orderings.
#[derive(Debug, Clone, Default)]
pub struct CapitalDistances {
    pairs: HashMap<String, HashMap<String, u32>>,
    records: usize,
}

impl CapitalDistances {
    /// Parse the comma-delimited table. The header row is discarded.
    ///
    /// Columns: `numa, ida, numb, idb, kmdist`; trailing columns are ignored.
    /// Any unparsable numeric column fails the whole load.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// Parse the table from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut table = Self::default();
        for record in csv_reader.records() {
            let record = record?;
            table.insert(parse_record(&record)?);
        }

        Ok(table)
    }

    /// Build a table from already-typed records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CapitalDistanceRecord>,
    {
        let mut table = Self::default();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// Record a distance for the ordered pair; a repeated pair overwrites.
    pub fn insert(&mut self, record: CapitalDistanceRecord) {
        self.pairs
            .entry(record.code_a)
            .or_default()
            .insert(record.code_b, record.km);
        self.records += 1;
    }

    /// Distance between two state codes, trying `(a, b)` first and then `(b, a)`.
    pub fn lookup(&self, a: &str, b: &str) -> Option<u32> {
        self.directed(a, b).or_else(|| self.directed(b, a))
    }

    fn directed(&self, a: &str, b: &str) -> Option<u32> {
        self.pairs.get(a).and_then(|targets| targets.get(b)).copied()
    }

    /// Number of rows that were inserted, duplicates included.
    pub fn record_count(&self) -> usize {
        self.records
    }
}

fn parse_record(record: &StringRecord) -> Result<CapitalDistanceRecord> {
    let line = record.position().map(|pos| pos.line()).unwrap_or(0);
    if record.len() < 5 {
        return Err(Error::MalformedRecord {
            dataset: DataSource::CapitalDistances,
            line,
            message: format!("expected at least 5 columns, found {}", record.len()),
        });
    }

    let number = |index: usize, field: &'static str| -> Result<u32> {
        let value = &record[index];
        value.parse().map_err(|_| Error::InvalidNumber {
            dataset: DataSource::CapitalDistances,
            line,
            field,
            value: value.to_string(),
        })
    };

    Ok(CapitalDistanceRecord {
        state_a: number(0, "numa")?,
        code_a: record[1].to_string(),
        state_b: number(2, "numb")?,
        code_b: record[3].to_string(),
        km: number(4, "kmdist")?,
    })
}
