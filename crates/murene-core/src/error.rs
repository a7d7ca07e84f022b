//! Error types for the simulation crate.

use thiserror::Error;

use crate::config::ConfigError;
use crate::output::OutputError;

/// Top-level error for construction, configuration and output.
#[derive(Debug, Error)]
pub enum SimError {
    /// Construction arguments that cannot produce a valid state
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type SimResult<T> = Result<T, SimError>;
