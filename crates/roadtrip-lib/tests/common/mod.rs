//! Common test utilities and fixture helpers.
//!
//! The fixture triple under `docs/fixtures` covers western Europe, the
//! British Isles, Iceland, and three South-East Asian countries whose state
//! table spelling (Myanmar) differs from the border list (Burma).

use std::path::PathBuf;

use roadtrip_lib::{
    Atlas, BorderTable, CapitalDistanceRecord, CapitalDistances, DatasetPaths, EdgePatch,
    LoadOptions, StateRecord, StateTable, SNAPSHOT_END_DATE,
};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fixture_paths() -> DatasetPaths {
    DatasetPaths::in_dir(&fixtures_dir())
}

/// Fixture atlas with the built-in edge patches applied.
#[allow(dead_code)]
pub fn patched_atlas() -> Atlas {
    Atlas::load(&fixture_paths(), &LoadOptions::default()).expect("fixture loads")
}

/// Fixture atlas built from the distance table alone.
#[allow(dead_code)]
pub fn unpatched_atlas() -> Atlas {
    let options = LoadOptions {
        apply_patches: false,
        ..LoadOptions::default()
    };
    Atlas::load(&fixture_paths(), &options).expect("fixture loads")
}

/// Builder for small hand-made atlases.
#[allow(dead_code)]
#[derive(Default)]
pub struct AtlasBuilder {
    borders: Vec<(String, Vec<String>)>,
    distances: Vec<CapitalDistanceRecord>,
    states: Vec<StateRecord>,
    patches: Vec<EdgePatch>,
}

#[allow(dead_code)]
impl AtlasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a country, its state code, and its neighbours.
    pub fn country(mut self, name: &str, code: &str, neighbours: &[&str]) -> Self {
        self.borders.push((
            name.to_string(),
            neighbours.iter().map(|n| n.to_string()).collect(),
        ));
        self.state(name, code)
    }

    /// Add a state table row without a border list entry.
    pub fn state(mut self, name: &str, code: &str) -> Self {
        self.states.push(StateRecord {
            number: self.states.len() as u32 + 1,
            identifier: code.to_string(),
            name: name.to_string(),
            start: "1816-01-01".to_string(),
            end: SNAPSHOT_END_DATE.to_string(),
        });
        self
    }

    /// Record a capital distance for the ordered code pair.
    pub fn distance(mut self, a: &str, b: &str, km: u32) -> Self {
        self.distances.push(CapitalDistanceRecord {
            state_a: 0,
            code_a: a.to_string(),
            state_b: 0,
            code_b: b.to_string(),
            km,
        });
        self
    }

    pub fn patch(mut self, source: &str, target: &str, km: u32) -> Self {
        self.patches.push(EdgePatch::new(source, target, km));
        self
    }

    pub fn build(self) -> Atlas {
        Atlas::from_tables(
            BorderTable::from_entries(self.borders),
            CapitalDistances::from_records(self.distances),
            StateTable::from_records(self.states, SNAPSHOT_END_DATE),
            &self.patches,
        )
    }
}
