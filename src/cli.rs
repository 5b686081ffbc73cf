use crate::error::AppError;
use crate::graph::station::StationId;
use crate::routing::enumerator::RouteLimits;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "routemap",
    author,
    version,
    about = "Shows a small transport network and lists every route between two stations."
)]
pub struct Cli {
    /// JSON file describing stations and connections (default: built-in city map)
    #[arg(short, long, conflicts_with = "random")]
    pub network: Option<PathBuf>,

    /// Generate a random network from this seed instead of the city map
    #[arg(long)]
    pub random: Option<u64>,

    /// Number of stations in a random network
    #[arg(long, default_value_t = 8, requires = "random")]
    pub stations: usize,

    /// Start station id
    #[arg(long)]
    pub from: Option<u32>,

    /// Destination station id
    #[arg(long)]
    pub to: Option<u32>,

    /// Print the routes between --from and --to and exit instead of opening the map
    #[arg(short, long, requires_all = ["from", "to"])]
    pub list: bool,

    /// Stop after this many routes
    #[arg(long)]
    pub max_routes: Option<usize>,

    /// Skip routes with more than this many stations
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_depth: Option<u64>,

    /// Write log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log debug messages
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn limits(&self) -> RouteLimits {
        RouteLimits {
            max_routes: self.max_routes,
            max_depth: self.max_depth.map(|d| d as usize),
        }
    }

    pub fn from_station(&self) -> Option<StationId> {
        self.from.map(StationId)
    }

    pub fn to_station(&self) -> Option<StationId> {
        self.to.map(StationId)
    }

    /// The station pair to print in `--list` mode; clap guarantees both are set.
    pub fn list_query(&self) -> Option<(StationId, StationId)> {
        match (self.list, self.from_station(), self.to_station()) {
            (true, Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }

    /// Checks what clap cannot express on its own.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.random.is_some() && self.stations < 2 {
            return Err(AppError::Usage(format!(
                "--stations must be at least 2, got {}",
                self.stations
            )));
        }
        Ok(())
    }
}
