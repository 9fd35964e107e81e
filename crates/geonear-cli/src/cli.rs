use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// GeoNear - Nearest geopoint lookup
#[derive(Parser, Debug)]
#[command(name = "geonear")]
#[command(about = "Find the geopoints nearest to a location", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./geonear.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Geopoints dataset file
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Reject the whole dataset if any record is invalid
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the points closest to a reference location
    Nearest(NearestArgs),

    /// Validate the dataset and report rejected records
    Inspect,

    /// Show the effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("reference").required(true).args(["lat", "location"])))]
pub struct NearestArgs {
    /// Reference latitude in degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Reference longitude in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// JSON file holding the reference location
    #[arg(long, value_name = "FILE", conflicts_with_all = ["lat", "lon"])]
    pub location: Option<PathBuf>,

    /// Number of results to return
    #[arg(short = 'k', long = "top-k")]
    pub k: Option<usize>,
}
