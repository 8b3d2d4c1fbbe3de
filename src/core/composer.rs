use crate::core::encoding::encode;
use crate::domain::model::{
    LegSpec, Point, RankedNeighbor, RouteLeg, TravelProfile, VisualEncoding,
};
use crate::domain::ports::RoutingProvider;
use crate::utils::error::Result;
use futures::future::try_join_all;

/// Fixed role styling for the three-leg itinerary. Rank-derived encodings
/// only apply in fan-out mode.
const WALK_TO_STATION_COLOR: &str = "#1f77b4";
const CYCLE_COLOR: &str = "#ff7f0e";
const WALK_TO_DESTINATION_COLOR: &str = "#2ca02c";
const ITINERARY_WEIGHT: f64 = 5.0;
const ITINERARY_OPACITY: f64 = 1.0;

/// Route every leg in `legs` through the provider and return them in the
/// same order.
///
/// Provider calls are issued concurrently (one task per leg, no data
/// dependency between legs), but the output sequence always matches the
/// input sequence. The composition is all-or-nothing: the first failing
/// leg aborts the whole call and no partial result is returned.
pub async fn compose_route<P: RoutingProvider>(
    provider: &P,
    legs: &[LegSpec],
) -> Result<Vec<RouteLeg>> {
    let routed = try_join_all(
        legs.iter()
            .map(|leg| provider.route(leg.from, leg.to, leg.profile)),
    )
    .await?;

    Ok(legs
        .iter()
        .zip(routed)
        .map(|(leg, raw)| RouteLeg {
            from: leg.from,
            to: leg.to,
            profile: leg.profile,
            // Providers answer in (lon, lat) order; everything internal is
            // (lat, lon).
            polyline: raw
                .into_iter()
                .map(|pair| Point::new(pair[1], pair[0]))
                .collect(),
            encoding: leg.encoding.clone(),
        })
        .collect())
}

/// One leg per ranked neighbor, fanned out from the reference point, with
/// styling keyed by each neighbor's rank so all candidates can be shown at
/// once.
pub fn fan_out_legs(
    reference: Point,
    neighbors: &[RankedNeighbor],
    profile: TravelProfile,
) -> Result<Vec<LegSpec>> {
    neighbors
        .iter()
        .map(|neighbor| {
            Ok(LegSpec {
                from: reference,
                to: neighbor.station.location(),
                profile,
                encoding: encode(neighbor.rank, neighbors.len())?,
            })
        })
        .collect()
}

/// The fixed three-leg trip: walk to the bike station, cycle to the dock
/// station, walk on to the destination.
///
/// Role colors are fixed rather than rank-derived. The two stations may be
/// the same (degenerate first cycling segment); that still produces three
/// legs and is left to the provider to answer however it likes.
pub fn itinerary_legs(
    source: Point,
    destination: Point,
    bike_station: Point,
    dock_station: Point,
) -> Vec<LegSpec> {
    vec![
        LegSpec {
            from: source,
            to: bike_station,
            profile: TravelProfile::FootWalking,
            encoding: VisualEncoding::new(
                WALK_TO_STATION_COLOR,
                ITINERARY_WEIGHT,
                ITINERARY_OPACITY,
            ),
        },
        LegSpec {
            from: bike_station,
            to: dock_station,
            profile: TravelProfile::CyclingRegular,
            encoding: VisualEncoding::new(CYCLE_COLOR, ITINERARY_WEIGHT, ITINERARY_OPACITY),
        },
        LegSpec {
            from: dock_station,
            to: destination,
            profile: TravelProfile::FootWalking,
            encoding: VisualEncoding::new(
                WALK_TO_DESTINATION_COLOR,
                ITINERARY_WEIGHT,
                ITINERARY_OPACITY,
            ),
        },
    ]
}
