//! Parsers for the three reference inputs.
//!
//! - [`BorderTable`] - country name to ordered neighbour names
//! - [`CapitalDistances`] - identifier pair to capital-to-capital kilometres
//! - [`StateTable`] - identifier rows with validity dates
//!
//! Parsers work on in-memory text so callers can feed fixtures directly;
//! [`crate::Atlas::load`] reads the files and hands the contents over.

mod borders;
mod capdist;
mod states;

pub use borders::BorderTable;
pub use capdist::{CapitalDistanceRecord, CapitalDistances};
pub use states::{StateRecord, StateTable, SNAPSHOT_END_DATE};

/// Remove every `( ... )` span from `input`.
///
/// Spans do not nest; an opening parenthesis without a closing one is kept.
pub(crate) fn strip_parentheses(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        output.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    output.push_str(rest);
    output
}
