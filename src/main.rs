//! Route analysis tool
//!
//! Reads timestamped waypoints from a CSV file and analysis parameters from a
//! YAML file, then reports the farthest waypoint from the start, the most
//! frequented area and the waypoints outside a geofence as JSON.

use clap::Parser;
use log::{error, info};
use std::env;
use std::path::{Path, PathBuf};

mod analysis;
mod config;
mod error;
mod ingest;
mod report;

#[cfg(test)]
mod ingest_test;

use analysis::analyze;
use config::Config;
use error::Result;

const LOCAL_RESOURCES_DIR: &str = "resources";
const LOCAL_CONFIG_FILE: &str = "custom-parameters.yml";
const LOCAL_WAYPOINTS_FILE: &str = "waypoints.csv";
const LOCAL_OUTPUT_FILE: &str = "evaluation/output.json";

const CONTAINER_RESOURCES_DIR: &str = "/app/resources";
const CONTAINER_OUTPUT_FILE: &str = "resources/output.json";

#[derive(Parser)]
#[command(name = "route_analyzer")]
#[command(about = "Waypoint route analysis tool", long_about = None)]
struct Args {
    /// YAML file with analysis parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV file with timestamp;latitude;longitude rows
    #[arg(short, long)]
    waypoints: Option<PathBuf>,

    /// Output JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// Input and output locations of a run
#[derive(Debug, Clone, PartialEq)]
struct Paths {
    config: PathBuf,
    waypoints: PathBuf,
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let paths = resolve_paths(&args, |key| env::var(key).ok());

    match run(&paths) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Picks the config, waypoint and output files
///
/// Explicit arguments win. Otherwise, when `CONTAINER` is `true`, inputs are
/// looked up in the container resources directory under the names given by
/// `CONFIG_FILE` and `WAYPOINTS_FILE`; if not, the local defaults are used.
fn resolve_paths<F>(args: &Args, var: F) -> Paths
where
    F: Fn(&str) -> Option<String>,
{
    let is_container = var("CONTAINER").is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));

    let (config, waypoints, output) = if is_container {
        let dir = Path::new(CONTAINER_RESOURCES_DIR);
        (
            dir.join(var("CONFIG_FILE").unwrap_or_else(|| LOCAL_CONFIG_FILE.to_string())),
            dir.join(var("WAYPOINTS_FILE").unwrap_or_else(|| LOCAL_WAYPOINTS_FILE.to_string())),
            PathBuf::from(CONTAINER_OUTPUT_FILE),
        )
    } else {
        let dir = Path::new(LOCAL_RESOURCES_DIR);
        (
            dir.join(LOCAL_CONFIG_FILE),
            dir.join(LOCAL_WAYPOINTS_FILE),
            PathBuf::from(LOCAL_OUTPUT_FILE),
        )
    };

    Paths {
        config: args.config.clone().unwrap_or(config),
        waypoints: args.waypoints.clone().unwrap_or(waypoints),
        output: args.output.clone().unwrap_or(output),
    }
}

/// Loads inputs, runs the analysis and writes the report
///
/// Returns the JSON report text.
fn run(paths: &Paths) -> Result<String> {
    info!("Loading config from {:?}", paths.config);
    let config = Config::load(&paths.config)?;
    let params = config.params();

    info!("Loading waypoints from {:?}", paths.waypoints);
    let waypoints = ingest::read_waypoints(&paths.waypoints)?;
    info!("Analyzing {} waypoints", waypoints.len());

    let result = analyze(&params, &waypoints)?;
    report::write_report(&paths.output, &result)
}
