//! Roadtrip CLI library.
//!
//! Terminal styling, output formatting and the interactive prompt loop used
//! by the `roadtrip` binary.

pub mod interactive;
pub mod output;
pub mod terminal;
