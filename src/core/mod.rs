pub mod composer;
pub mod encoding;
pub mod geo;
pub mod knn;
pub mod planner;

pub use crate::domain::model::{
    AvailabilityMode, LegSpec, Point, RankedNeighbor, RouteLeg, StationRecord, TravelProfile,
    VisualEncoding,
};
pub use crate::domain::ports::{RoutingProvider, StationSource};
pub use crate::utils::error::Result;
