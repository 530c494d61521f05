use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadtrip_cli::output::OutputFormat;
use roadtrip_lib::{
    resolve_dataset, Atlas, DatasetOverrides, DatasetPaths, LoadOptions, SNAPSHOT_END_DATE,
};

mod commands;

use commands::countries::handle_countries_command;
use commands::interactive::handle_interactive_command;
use commands::route::{handle_distance_command, handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest overland road trips between countries, measured capital to capital"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Clone)]
struct GlobalOptions {
    /// Directory containing borders.txt, capdist.csv and state_name.tsv.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Border list file, overriding the data directory.
    #[arg(long, global = true)]
    borders: Option<PathBuf>,

    /// Capital distance table, overriding the data directory.
    #[arg(long, global = true)]
    capdist: Option<PathBuf>,

    /// State identifier table, overriding the data directory.
    #[arg(long, global = true)]
    state_names: Option<PathBuf>,

    /// End date marking currently valid rows of the state identifier table.
    #[arg(long, global = true, default_value = SNAPSHOT_END_DATE)]
    snapshot_date: String,

    /// Build the graph without the built-in edge corrections.
    #[arg(long, global = true)]
    no_patches: bool,

    /// Output format for one-shot queries.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl GlobalOptions {
    fn overrides(&self) -> DatasetOverrides {
        DatasetOverrides {
            borders: self.borders.clone(),
            capital_distances: self.capdist.clone(),
            state_names: self.state_names.clone(),
        }
    }

    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            snapshot_end_date: self.snapshot_date.clone(),
            apply_patches: !self.no_patches,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prompt for country pairs until EXIT (default).
    Interactive(InteractiveArgs),
    /// Print the shortest route between two countries.
    Route {
        /// Starting country name.
        #[arg(long = "from")]
        from: String,
        /// Destination country name.
        #[arg(long = "to")]
        to: String,
    },
    /// Print only the shortest distance between two countries.
    Distance {
        /// Starting country name.
        #[arg(long = "from")]
        from: String,
        /// Destination country name.
        #[arg(long = "to")]
        to: String,
    },
    /// List every country of the border list.
    Countries {
        /// Only list countries without any usable border.
        #[arg(long)]
        islands: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct InteractiveArgs {
    /// Border list file.
    #[arg(requires_all = ["capdist_file", "state_names_file"])]
    borders_file: Option<PathBuf>,
    /// Capital distance table.
    capdist_file: Option<PathBuf>,
    /// State identifier table.
    state_names_file: Option<PathBuf>,
}

impl InteractiveArgs {
    fn dataset_paths(&self) -> Option<DatasetPaths> {
        match (&self.borders_file, &self.capdist_file, &self.state_names_file) {
            (Some(borders), Some(capdist), Some(states)) => Some(DatasetPaths {
                borders: borders.clone(),
                capital_distances: capdist.clone(),
                state_names: states.clone(),
            }),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Interactive(InteractiveArgs::default()));

    let positional = match &command {
        Command::Interactive(args) => args.dataset_paths(),
        _ => None,
    };
    let atlas = load_atlas(&cli.global, positional)?;
    let format = cli.global.format;

    match command {
        Command::Interactive(_) => handle_interactive_command(&atlas),
        Command::Route { from, to } => {
            handle_route_command(&atlas, &RouteCommandArgs { from, to }, format)
        }
        Command::Distance { from, to } => {
            handle_distance_command(&atlas, &RouteCommandArgs { from, to }, format)
        }
        Command::Countries { islands } => handle_countries_command(&atlas, islands, format),
    }
}

fn load_atlas(global: &GlobalOptions, positional: Option<DatasetPaths>) -> Result<Atlas> {
    let paths = match positional {
        Some(paths) => {
            paths.verify().context("failed to locate the reference data")?;
            paths
        }
        None => resolve_dataset(global.data_dir.as_deref(), &global.overrides())
            .context("failed to locate the reference data")?,
    };

    Atlas::load(&paths, &global.load_options()).with_context(|| {
        format!(
            "failed to load reference data (borders: {}, distances: {}, states: {})",
            paths.borders.display(),
            paths.capital_distances.display(),
            paths.state_names.display()
        )
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
