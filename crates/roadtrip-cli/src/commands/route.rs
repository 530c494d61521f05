//! One-shot route and distance queries.

use std::io::{self, Write};

use anyhow::{Context, Result};

use roadtrip_lib::{plan_route, Atlas, RouteRequest};
use roadtrip_cli::output::{DistanceSummary, OutputFormat};
use roadtrip_cli::terminal::ColorPalette;

/// Arguments shared by the route and distance commands.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting country name.
    pub from: String,
    /// Destination country name.
    pub to: String,
}

impl RouteCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(&self.from, &self.to)
    }
}

/// Handle the route subcommand.
///
/// Unknown names and unreachable destinations are returned as errors so the
/// process exits with a non-zero status.
pub fn handle_route_command(
    atlas: &Atlas,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let plan = plan_route(atlas, &args.to_request())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    format.render_route(&plan, &mut out)?;
    out.flush().context("failed to write route")?;
    Ok(())
}

/// Handle the distance subcommand.
pub fn handle_distance_command(
    atlas: &Atlas,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let plan = plan_route(atlas, &args.to_request())?;
    let summary = DistanceSummary {
        start: &plan.start,
        goal: &plan.goal,
        distance: plan.total_distance,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    format.render_distance(&summary, ColorPalette::detect(), &mut out)?;
    out.flush().context("failed to write distance")?;
    Ok(())
}
