use crate::routing::error::RouteError;
use crate::scenario::error::ScenarioError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Invalid arguments: {0}")]
    Usage(String),
}
