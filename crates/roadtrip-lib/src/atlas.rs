//! The graph service: the three reference tables, the name indexes built on
//! them, and the border graph, assembled once and read by every query.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::dataset::DatasetPaths;
use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph};
use crate::ingest::{BorderTable, CapitalDistances, StateTable, SNAPSHOT_END_DATE};
use crate::names::{fuzzy_matches, normalize, NameResolver};
use crate::patches::EdgePatch;
use crate::path::{shortest_path, ShortestPath};

/// Maximum number of suggestions attached to an unknown country error.
const MAX_SUGGESTIONS: usize = 3;

/// Options applied while loading the reference data.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Rows of the state table ending on this date count as currently valid.
    pub snapshot_end_date: String,
    /// Apply the built-in edge patch table after automatic construction.
    pub apply_patches: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            snapshot_end_date: SNAPSHOT_END_DATE.to_string(),
            apply_patches: true,
        }
    }
}

/// A border list country joined against the identifier table and the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: String,
    pub neighbours: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// The identifier has a row valid at the snapshot date.
    pub valid: bool,
    /// Number of weighted edges leaving this country.
    pub edges: usize,
}

/// Reference tables plus the border graph built from them.
#[derive(Debug, Clone)]
pub struct Atlas {
    borders: BorderTable,
    distances: CapitalDistances,
    states: StateTable,
    names: NameResolver,
    canonical: HashMap<String, String>,
    graph: Graph,
}

impl Atlas {
    /// Read the three inputs from disk and build the graph.
    ///
    /// Any unreadable file or malformed numeric column fails the whole load.
    pub fn load(paths: &DatasetPaths, options: &LoadOptions) -> Result<Self> {
        let borders = read_input(&paths.borders)?;
        let capdist = read_input(&paths.capital_distances)?;
        let states = read_input(&paths.state_names)?;
        Self::from_text(&borders, &capdist, &states, options)
    }

    /// Parse in-memory copies of the three inputs and build the graph.
    pub fn from_text(
        borders: &str,
        capdist: &str,
        states: &str,
        options: &LoadOptions,
    ) -> Result<Self> {
        let borders = BorderTable::parse(borders);
        debug!(countries = borders.len(), "parsed border list");

        let distances = CapitalDistances::parse(capdist)?;
        debug!(
            records = distances.record_count(),
            "parsed capital distances"
        );

        let states = StateTable::parse(states, &options.snapshot_end_date)?;
        debug!(
            records = states.len(),
            current = states.current().count(),
            snapshot = states.snapshot_end_date(),
            "parsed state names"
        );

        let patches = if options.apply_patches {
            EdgePatch::builtin()?
        } else {
            Vec::new()
        };

        Ok(Self::from_tables(borders, distances, states, &patches))
    }

    /// Assemble the service from already-parsed tables.
    pub fn from_tables(
        borders: BorderTable,
        distances: CapitalDistances,
        states: StateTable,
        patches: &[EdgePatch],
    ) -> Self {
        let names = NameResolver::from_states(&states);
        let graph = build_graph(&borders, &distances, &names, patches);
        let canonical = borders
            .countries()
            .map(|country| (country.to_lowercase(), country.to_string()))
            .collect();

        info!(
            countries = borders.len(),
            islands = borders
                .countries()
                .filter(|country| graph.is_island(country))
                .count(),
            "atlas ready"
        );

        Self {
            borders,
            distances,
            states,
            names,
            canonical,
            graph,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn borders(&self) -> &BorderTable {
        &self.borders
    }

    pub fn distances(&self) -> &CapitalDistances {
        &self.distances
    }

    pub fn states(&self) -> &StateTable {
        &self.states
    }

    pub fn names(&self) -> &NameResolver {
        &self.names
    }

    /// Map user input onto a border list country.
    ///
    /// The input is passed through the alias table first, then matched
    /// exactly and finally ignoring case.
    pub fn resolve_country(&self, input: &str) -> Result<String> {
        let normalized = normalize(input);
        if self.borders.contains(&normalized) {
            return Ok(normalized);
        }

        if let Some(canonical) = self.canonical.get(&normalized.to_lowercase()) {
            return Ok(canonical.clone());
        }

        Err(Error::UnknownCountry {
            name: input.trim().to_string(),
            suggestions: self.fuzzy_country_matches(&normalized, MAX_SUGGESTIONS),
        })
    }

    /// Border list countries whose names resemble `name`, best match first.
    pub fn fuzzy_country_matches(&self, name: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.borders.countries(), name, limit)
    }

    /// Joined record for a canonical country name.
    pub fn country(&self, name: &str) -> Option<Country> {
        let neighbours = self.borders.neighbours(name)?;
        let identifier = self.names.resolve(name).map(str::to_string);
        let valid = identifier
            .as_deref()
            .is_some_and(|id| self.states.is_current(id));
        let edges = self.graph.neighbours(name).map_or(0, |edges| edges.len());

        Some(Country {
            name: name.to_string(),
            neighbours: neighbours.to_vec(),
            identifier,
            valid,
            edges,
        })
    }

    /// Every border list country, sorted by name.
    pub fn countries(&self) -> Vec<Country> {
        let mut names: Vec<&str> = self.borders.countries().collect();
        names.sort_unstable();
        names
            .into_iter()
            .filter_map(|name| self.country(name))
            .collect()
    }

    /// Shortest path between two canonical country names.
    pub fn shortest_path(&self, from: &str, to: &str) -> Option<ShortestPath> {
        shortest_path(&self.graph, from, to)
    }

    /// Shortest path distance in kilometres, or `None` when no path exists.
    pub fn get_distance(&self, from: &str, to: &str) -> Option<u64> {
        self.shortest_path(from, to).map(|path| path.distance)
    }

    /// Countries along the shortest path, empty when no path exists.
    pub fn find_path(&self, from: &str, to: &str) -> Vec<String> {
        self.shortest_path(from, to)
            .map(|path| path.steps)
            .unwrap_or_default()
    }
}

fn read_input(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "reading input");
    Ok(fs::read_to_string(path)?)
}
