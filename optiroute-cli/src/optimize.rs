//! Optimize command implementation for the OptiRoute CLI.

use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use optiroute_core::{Algorithm, Delivery, Location, RouteConfig, RoutePlanner};
use optiroute_engine::RouteOptimizer;

use crate::CliError;

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    long_about = "Optimize a single-vehicle delivery route. The location \
                 and delivery sets load from JSON files in the dashboard's \
                 wire format; the result prints to stdout as the same JSON \
                 payload the dashboard consumes.",
    about = "Optimize a delivery route"
)]
pub struct OptimizeArgs {
    /// Path to a JSON file containing the location set.
    #[arg(long = "locations", value_name = "path")]
    pub locations: PathBuf,
    /// Path to a JSON file containing the delivery set.
    #[arg(long = "deliveries", value_name = "path")]
    pub deliveries: PathBuf,
    /// Identifier of the source location the vehicle departs from.
    #[arg(long = "source", value_name = "id")]
    pub source: String,
    /// Vehicle capacity in load units.
    #[arg(long = "capacity", value_name = "units", default_value_t = 100.0)]
    pub capacity: f64,
    /// Routing algorithm: dijkstra, astar, tsp, or bellman.
    #[arg(long = "algorithm", value_name = "name", default_value = "dijkstra")]
    pub algorithm: String,
}

pub(crate) fn run_optimize(args: &OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &mut stdout)
}

pub(crate) fn run_optimize_with(
    args: &OptimizeArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let algorithm: Algorithm = args.algorithm.parse()?;
    let locations: Vec<Location> = load_json(&args.locations)?;
    let deliveries: Vec<Delivery> = load_json(&args.deliveries)?;
    for delivery in &deliveries {
        delivery
            .validate()
            .map_err(|source| CliError::InvalidDelivery {
                id: delivery.id.clone(),
                source,
            })?;
    }

    let config = RouteConfig {
        source_location: args.source.clone(),
        vehicle_capacity: args.capacity,
        algorithm,
    };
    log::debug!(
        "optimizing {} deliveries over {} locations with {algorithm}",
        deliveries.len(),
        locations.len()
    );
    let result = RouteOptimizer::new()
        .optimize(&config, &locations, &deliveries)
        .map_err(|source| CliError::Optimize { source })?;

    let payload = serde_json::to_string_pretty(&result).map_err(CliError::SerializeResult)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Loads a JSON-encoded value from disk with path context on failure.
fn load_json<T>(path: &Path) -> Result<T, CliError>
where
    T: serde::de::DeserializeOwned,
{
    let file = std::fs::File::open(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}
