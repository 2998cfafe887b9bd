//! Command-line dispatch harness for the OptiRoute engine.
//!
//! Stands in for the dashboard backend at the engine's request/response
//! boundary: locations and deliveries load from JSON files, the route
//! configuration comes from flags, and the optimization result prints to
//! stdout as the same JSON payload the dashboard consumes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod optimize;

pub use error::CliError;
pub use optimize::OptimizeArgs;

/// Run the OptiRoute CLI with the current process arguments.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimize(args) => optimize::run_optimize(&args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "optiroute",
    about = "Route planning for fleet dispatch",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Optimize a delivery route over stored locations and deliveries.
    Optimize(OptimizeArgs),
}
