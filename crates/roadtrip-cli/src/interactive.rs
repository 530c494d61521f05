//! Prompt loop answering one country pair at a time.
//!
//! The loop is generic over its input and output so it can be driven from
//! stdin/stdout or from in-memory buffers in tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use roadtrip_lib::{Atlas, Error, RoutePlan, RouteRenderMode};

/// Typing this at either prompt (any case) ends the session.
pub const EXIT_KEYWORD: &str = "EXIT";

pub const FIRST_PROMPT: &str = "Enter the name of the first country (type EXIT to quit): ";
pub const SECOND_PROMPT: &str = "Enter the name of the second country (type EXIT to quit): ";
pub const INVALID_COUNTRY: &str = "Invalid country name. Please enter a valid country name.";
pub const NO_SHARED_BORDERS: &str = "Countries do not share borders.";

enum Answer {
    Quit,
    Retry,
    Country(String),
}

/// Run the prompt loop until `EXIT` or end of input.
///
/// An unknown name restarts the query from the first prompt. Lookups never
/// modify the atlas, so a failed query leaves the next one unaffected.
pub fn run_interactive<R: BufRead, W: Write>(atlas: &Atlas, mut input: R, mut output: W) -> Result<()> {
    loop {
        let start = match ask(atlas, &mut input, &mut output, FIRST_PROMPT)? {
            Answer::Quit => break,
            Answer::Retry => continue,
            Answer::Country(country) => country,
        };
        let goal = match ask(atlas, &mut input, &mut output, SECOND_PROMPT)? {
            Answer::Quit => break,
            Answer::Retry => continue,
            Answer::Country(country) => country,
        };

        debug!(%start, %goal, "interactive query");
        match atlas.shortest_path(&start, &goal) {
            Some(path) => {
                let plan = RoutePlan::from_path(path)?;
                write!(output, "{}", plan.render(RouteRenderMode::PlainText))?;
            }
            None => writeln!(output, "{NO_SHARED_BORDERS}")?,
        }
    }

    output.flush()?;
    Ok(())
}

fn ask<R: BufRead, W: Write>(
    atlas: &Atlas,
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Answer> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(Answer::Quit);
    }

    let line = line.trim();
    if line.eq_ignore_ascii_case(EXIT_KEYWORD) {
        return Ok(Answer::Quit);
    }

    match atlas.resolve_country(line) {
        Ok(country) => Ok(Answer::Country(country)),
        Err(Error::UnknownCountry { suggestions, .. }) => {
            writeln!(output, "{INVALID_COUNTRY}")?;
            if !suggestions.is_empty() {
                writeln!(output, "Did you mean: {}?", suggestions.join(", "))?;
            }
            Ok(Answer::Retry)
        }
        Err(err) => Err(err.into()),
    }
}
