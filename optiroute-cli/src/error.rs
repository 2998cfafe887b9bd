//! Error types emitted by the OptiRoute CLI.

use std::path::PathBuf;

use optiroute_core::{AlgorithmParseError, DeliveryError, OptimizeError};
use thiserror::Error;

/// Errors emitted by the OptiRoute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The requested algorithm name is not in the closed set.
    #[error(transparent)]
    UnknownAlgorithm(#[from] AlgorithmParseError),
    /// Opening an input file failed.
    #[error("failed to open {path:?}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Input JSON could not be decoded.
    #[error("failed to parse JSON in {path:?}: {source}")]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A delivery in the input failed validation.
    #[error("delivery `{id}` is invalid: {source}")]
    InvalidDelivery {
        id: String,
        #[source]
        source: DeliveryError,
    },
    /// The engine rejected the request configuration.
    #[error("optimization failed: {source}")]
    Optimize {
        #[source]
        source: OptimizeError,
    },
    /// Serializing the optimization result failed.
    #[error("failed to serialize optimization result: {0}")]
    SerializeResult(#[source] serde_json::Error),
    /// Writing the optimization output failed.
    #[error("failed to write optimization output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
