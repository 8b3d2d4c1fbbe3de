pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::domain::model::{AvailabilityMode, Point};
use crate::utils::error::Result;
use crate::utils::validation::{validate_latitude, validate_longitude, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bikeshare-planner")]
#[command(about = "Find nearby bike-share stations and plan routed trips")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Optional TOML settings file (feed URLs, routing provider).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write the JSON report here instead of stdout.
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// OpenRouteService API key; falls back to the ORS_API_KEY variable.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rank the k nearest stations with a free bike or dock and route a
    /// walking leg to each.
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Number of nearest neighbors to find.
        #[arg(long, default_value = "3")]
        k: usize,
        #[arg(long, value_enum, default_value = "bikes")]
        mode: AvailabilityMode,
    },
    /// Plan a three-leg trip: walk, cycle, walk.
    Trip {
        #[arg(long, allow_negative_numbers = true)]
        source_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        source_lon: f64,
        #[arg(long, allow_negative_numbers = true)]
        dest_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        dest_lon: f64,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Nearby { lat, lon, .. } => {
                validate_latitude("lat", *lat)?;
                validate_longitude("lon", *lon)?;
            }
            Command::Trip {
                source_lat,
                source_lon,
                dest_lat,
                dest_lon,
            } => {
                validate_latitude("source-lat", *source_lat)?;
                validate_longitude("source-lon", *source_lon)?;
                validate_latitude("dest-lat", *dest_lat)?;
                validate_longitude("dest-lon", *dest_lon)?;
            }
        }
        Ok(())
    }
}

impl Command {
    /// Reference point of the request: the source location in both modes.
    pub fn origin(&self) -> Point {
        match self {
            Command::Nearby { lat, lon, .. } => Point::new(*lat, *lon),
            Command::Trip {
                source_lat,
                source_lon,
                ..
            } => Point::new(*source_lat, *source_lon),
        }
    }
}
