//! Manual edge corrections for borders the distance table cannot cover.
//!
//! The border list and the state table spell several countries differently,
//! so some declared borders never find a capital distance. The corrections
//! live in `data/edge_patches.csv` and are compiled into the library.

use std::io::Read;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const BUILTIN_PATCHES_CSV: &str = include_str!("../data/edge_patches.csv");

/// A directed edge weight to force into the graph after automatic construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgePatch {
    pub source: String,
    pub target: String,
    pub km: u32,
}

impl EdgePatch {
    pub fn new(source: impl Into<String>, target: impl Into<String>, km: u32) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            km,
        }
    }

    /// The correction table shipped with the library.
    pub fn builtin() -> Result<Vec<EdgePatch>> {
        Self::from_reader(BUILTIN_PATCHES_CSV.as_bytes())
    }

    /// Load a correction table with a `source,target,km` header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Self>> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        csv_reader
            .deserialize::<EdgePatch>()
            .map(|row| {
                row.map_err(|err| Error::EdgePatchTable {
                    message: err.to_string(),
                })
            })
            .collect()
    }

    /// Whether the patch points a country at itself.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
