//! Route planning on top of the [`Atlas`].
//!
//! This module provides:
//! - [`RouteRequest`] - a pair of user-supplied country names
//! - [`RoutePlan`] - the resolved route with per-leg distances
//! - [`plan_route`] - main entry point resolving names and running the search
//!
//! # Example
//!
//! ```ignore
//! use roadtrip_lib::{plan_route, Atlas, LoadOptions, RouteRequest};
//!
//! let atlas = Atlas::load(&paths, &LoadOptions::default())?;
//! let plan = plan_route(&atlas, &RouteRequest::new("France", "Poland"))?;
//! println!("{} km over {} borders", plan.total_distance, plan.hop_count());
//! ```

use serde::Serialize;
use tracing::debug;

use crate::atlas::Atlas;
use crate::error::{Error, Result};
use crate::path::{PathLeg, ShortestPath};

/// High-level route planning request with raw user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    pub legs: Vec<PathLeg>,
    pub total_distance: u64,
}

impl RoutePlan {
    /// Convert a search result into a plan.
    pub fn from_path(path: ShortestPath) -> Result<Self> {
        let (Some(start), Some(goal)) = (path.steps.first(), path.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        Ok(Self {
            start: start.clone(),
            goal: goal.clone(),
            legs: path.legs(),
            total_distance: path.distance,
            steps: path.steps,
        })
    }

    /// Number of border crossings in the route.
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }
}

/// Resolve both names and compute the shortest route between them.
///
/// Unknown names yield [`Error::UnknownCountry`]; islands and disconnected
/// pairs yield [`Error::RouteNotFound`]. Neither affects the atlas.
pub fn plan_route(atlas: &Atlas, request: &RouteRequest) -> Result<RoutePlan> {
    let start = atlas.resolve_country(&request.start)?;
    let goal = atlas.resolve_country(&request.goal)?;
    debug!(%start, %goal, "planning route");

    let path = atlas
        .shortest_path(&start, &goal)
        .ok_or_else(|| Error::RouteNotFound {
            start: start.clone(),
            goal: goal.clone(),
        })?;

    RoutePlan::from_path(path)
}
