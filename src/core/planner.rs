use crate::core::composer::{compose_route, fan_out_legs, itinerary_legs};
use crate::core::knn::k_nearest;
use crate::domain::model::{
    AvailabilityMode, Point, RankedNeighbor, RouteLeg, TravelProfile,
};
use crate::domain::ports::{RoutingProvider, StationSource};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Output of a fan-out search, handed as-is to the rendering collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyReport {
    pub reference: Point,
    pub mode: AvailabilityMode,
    pub neighbors: Vec<RankedNeighbor>,
    pub legs: Vec<RouteLeg>,
}

/// The resolved three-leg trip. `None` upstream when either station search
/// comes back empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryPlan {
    pub bike_station: RankedNeighbor,
    pub dock_station: RankedNeighbor,
    pub legs: Vec<RouteLeg>,
}

/// Output of a point-to-point trip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripReport {
    pub source: Point,
    pub destination: Point,
    pub plan: Option<ItineraryPlan>,
}

/// Ties the station feed and the routing provider together behind the two
/// operations the CLI exposes. Holds no state between calls; every request
/// works on a fresh feed snapshot.
pub struct Planner<S: StationSource, R: RoutingProvider> {
    stations: S,
    routing: R,
}

impl<S: StationSource, R: RoutingProvider> Planner<S, R> {
    pub fn new(stations: S, routing: R) -> Self {
        Self { stations, routing }
    }

    /// Fan-out mode: the k nearest stations satisfying `mode`, each with a
    /// walking route from `reference` styled by rank.
    pub async fn nearby(
        &self,
        reference: Point,
        k: usize,
        mode: AvailabilityMode,
    ) -> Result<NearbyReport> {
        let snapshot = self.stations.fetch_stations().await?;
        tracing::debug!("Fetched {} stations from feed", snapshot.len());

        let neighbors = k_nearest(reference, &snapshot, k, mode)?;
        tracing::info!(
            "Found {} of {} requested neighbors for {:?}",
            neighbors.len(),
            k,
            mode
        );

        let legs = if neighbors.is_empty() {
            Vec::new()
        } else {
            let specs = fan_out_legs(reference, &neighbors, TravelProfile::FootWalking)?;
            compose_route(&self.routing, &specs).await?
        };

        Ok(NearbyReport {
            reference,
            mode,
            neighbors,
            legs,
        })
    }

    /// Itinerary mode: walk to the nearest station with a bike, cycle to
    /// the nearest station with a dock by the destination, walk the rest.
    ///
    /// The two station searches are independent; either finding nothing is
    /// a valid "no station available" outcome, reported as `plan: None`.
    pub async fn trip(&self, source: Point, destination: Point) -> Result<TripReport> {
        let snapshot = self.stations.fetch_stations().await?;
        tracing::debug!("Fetched {} stations from feed", snapshot.len());

        let bike = k_nearest(source, &snapshot, 1, AvailabilityMode::Bikes)?
            .into_iter()
            .next();
        let dock = k_nearest(destination, &snapshot, 1, AvailabilityMode::Docks)?
            .into_iter()
            .next();

        let (bike_station, dock_station) = match (bike, dock) {
            (Some(b), Some(d)) => (b, d),
            (bike, _) => {
                tracing::warn!(
                    "No usable station near {}",
                    if bike.is_none() { "source" } else { "destination" }
                );
                return Ok(TripReport {
                    source,
                    destination,
                    plan: None,
                });
            }
        };

        let specs = itinerary_legs(
            source,
            destination,
            bike_station.station.location(),
            dock_station.station.location(),
        );
        let legs = compose_route(&self.routing, &specs).await?;

        Ok(TripReport {
            source,
            destination,
            plan: Some(ItineraryPlan {
                bike_station,
                dock_station,
                legs,
            }),
        })
    }
}
