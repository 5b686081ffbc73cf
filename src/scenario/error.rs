use crate::graph::error::NetworkError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Cannot read network file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed network file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid network: {0}")]
    Network(#[from] NetworkError),

    #[error("Random network needs at least {min} stations, got {got}")]
    TooFewStations { min: usize, got: usize },
}
