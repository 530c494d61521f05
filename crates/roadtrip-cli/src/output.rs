//! Output formatting for one-shot queries.
//!
//! Route plans reuse the library's textual renderers; distances and country
//! listings are formatted here. JSON output is pretty-printed with
//! `serde_json` so it can be piped into other tools.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use roadtrip_lib::{Country, RoutePlan, RouteRenderMode};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable legs and totals.
    #[default]
    Text,
    /// Country names only, one per line.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

/// JSON shape of a `distance` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceSummary<'a> {
    pub start: &'a str,
    pub goal: &'a str,
    pub distance: u64,
}

/// A country row with its island flag, for the `countries` listing.
#[derive(Debug, Clone, Serialize)]
pub struct CountryListing {
    #[serde(flatten)]
    pub country: Country,
    pub island: bool,
}

impl OutputFormat {
    pub fn render_route<W: Write>(self, plan: &RoutePlan, out: &mut W) -> Result<()> {
        match self {
            OutputFormat::Text => write!(out, "{}", plan.render(RouteRenderMode::PlainText))?,
            OutputFormat::Basic => write!(out, "{}", plan.render(RouteRenderMode::Basic))?,
            OutputFormat::Json => write_json(plan, out)?,
        }
        Ok(())
    }

    pub fn render_distance<W: Write>(
        self,
        summary: &DistanceSummary<'_>,
        palette: ColorPalette,
        out: &mut W,
    ) -> Result<()> {
        match self {
            OutputFormat::Text => writeln!(
                out,
                "{} -> {}: {}{} km{}",
                summary.start,
                summary.goal,
                palette.green,
                format_with_separators(summary.distance),
                palette.reset
            )?,
            OutputFormat::Basic => writeln!(out, "{}", summary.distance)?,
            OutputFormat::Json => write_json(summary, out)?,
        }
        Ok(())
    }

    pub fn render_countries<W: Write>(
        self,
        countries: &[CountryListing],
        palette: ColorPalette,
        out: &mut W,
    ) -> Result<()> {
        match self {
            OutputFormat::Text => {
                let width = countries
                    .iter()
                    .map(|listing| listing.country.name.len())
                    .max()
                    .unwrap_or(0);
                for listing in countries {
                    write_country_line(listing, width, palette, out)?;
                }
                writeln!(out, "{} countries", countries.len())?;
            }
            OutputFormat::Basic => {
                for listing in countries {
                    writeln!(out, "{}", listing.country.name)?;
                }
            }
            OutputFormat::Json => write_json(countries, out)?,
        }
        Ok(())
    }
}

fn write_country_line<W: Write>(
    listing: &CountryListing,
    width: usize,
    palette: ColorPalette,
    out: &mut W,
) -> Result<()> {
    let country = &listing.country;
    let identifier = country.identifier.as_deref().unwrap_or("---");
    let status = if country.valid { "current" } else { "unmatched" };
    write!(
        out,
        "{}{:<width$}{}  {}{} {:<9} {:>2} edges{}",
        palette.white_bold,
        country.name,
        palette.reset,
        palette.gray,
        identifier,
        status,
        country.edges,
        palette.reset,
        width = width
    )?;
    if listing.island {
        write!(out, "  {}island{}", palette.red, palette.reset)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    writeln!(out, "{json}")?;
    Ok(())
}
