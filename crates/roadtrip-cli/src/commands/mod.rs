// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs loads the atlas once
// and dispatches to these handlers.

pub mod countries;
pub mod interactive;
pub mod route;
