use std::io::{self, Write};

use anyhow::{Context, Result};

use roadtrip_lib::Atlas;
use roadtrip_cli::output::{CountryListing, OutputFormat};
use roadtrip_cli::terminal::ColorPalette;

/// List border list countries with their identifier, validity and edge count.
pub fn handle_countries_command(
    atlas: &Atlas,
    islands_only: bool,
    format: OutputFormat,
) -> Result<()> {
    let listings: Vec<CountryListing> = atlas
        .countries()
        .into_iter()
        .map(|country| CountryListing {
            island: atlas.graph().is_island(&country.name),
            country,
        })
        .filter(|listing| !islands_only || listing.island)
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    format.render_countries(&listings, ColorPalette::detect(), &mut out)?;
    out.flush().context("failed to write country listing")?;
    Ok(())
}
