use std::io;

use anyhow::{Context, Result};

use roadtrip_cli::interactive::run_interactive;
use roadtrip_lib::Atlas;

/// Run the prompt loop on stdin/stdout.
pub fn handle_interactive_command(atlas: &Atlas) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive(atlas, stdin.lock(), stdout.lock()).context("interactive session failed")
}
