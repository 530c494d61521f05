//! Roadtrip library entry points.
//!
//! This crate parses the border list, capital distance table and state
//! identifier table, builds a weighted border graph from them, and answers
//! shortest-path queries between countries. Higher-level consumers (the CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod atlas;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod names;
pub mod output;
pub mod patches;
pub mod path;
pub mod routing;

pub use atlas::{Atlas, Country, LoadOptions};
pub use dataset::{default_data_dir, resolve_dataset, DatasetOverrides, DatasetPaths};
pub use error::{DataSource, Error, Result};
pub use graph::{build_graph, Graph, Neighbours};
pub use ingest::{
    BorderTable, CapitalDistanceRecord, CapitalDistances, StateRecord, StateTable,
    SNAPSHOT_END_DATE,
};
pub use names::{normalize, NameResolver};
pub use output::RouteRenderMode;
pub use patches::EdgePatch;
pub use path::{shortest_distances, shortest_path, PathLeg, ShortestPath};
pub use routing::{plan_route, RoutePlan, RouteRequest};
