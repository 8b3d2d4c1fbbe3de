pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{GbfsClient, OrsClient};
pub use config::{CliConfig, Command, TomlConfig};
pub use core::planner::{ItineraryPlan, NearbyReport, Planner, TripReport};
pub use domain::model::{
    AvailabilityMode, LegSpec, Point, RankedNeighbor, RouteLeg, StationRecord, TravelProfile,
    VisualEncoding,
};
pub use domain::ports::{RoutingProvider, StationSource};
pub use utils::error::{PlannerError, Result};
