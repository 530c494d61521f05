use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the roadtrip library.
pub type Result<T> = std::result::Result<T, Error>;

/// Identifies which of the three reference inputs produced a load error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Borders,
    CapitalDistances,
    StateNames,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            DataSource::Borders => "borders",
            DataSource::CapitalDistances => "capital distances",
            DataSource::StateNames => "state names",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// An input file could not be located at the resolved path.
    #[error("dataset file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default data location")]
    ProjectDirsUnavailable,

    /// A row did not have the shape its source requires.
    #[error("malformed {dataset} record on line {line}: {message}")]
    MalformedRecord {
        dataset: DataSource,
        line: u64,
        message: String,
    },

    /// A structured numeric column could not be parsed.
    #[error("invalid {field} '{value}' in {dataset} data on line {line}")]
    InvalidNumber {
        dataset: DataSource,
        line: u64,
        field: &'static str,
        value: String,
    },

    /// Raised when a country name could not be resolved to a graph node.
    #[error("unknown country name: {name}{}", format_suggestions(.suggestions))]
    UnknownCountry {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no path connects two countries.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any countries.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// The embedded edge patch table could not be parsed.
    #[error("invalid edge patch table: {message}")]
    EdgePatchTable { message: String },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
