use crate::core::geo::haversine_km;
use crate::domain::model::{AvailabilityMode, Point, RankedNeighbor, StationRecord};
use crate::utils::error::{PlannerError, Result};

/// Keep only the stations that satisfy the availability predicate.
///
/// Bikes: at least one bike and currently renting. Docks: at least one dock
/// and currently returning. The input is untouched; an empty result is a
/// valid answer, not an error.
pub fn filter_stations(
    stations: &[StationRecord],
    mode: AvailabilityMode,
) -> Vec<&StationRecord> {
    stations
        .iter()
        .filter(|s| match mode {
            AvailabilityMode::Bikes => s.bikes_available > 0 && s.is_renting,
            AvailabilityMode::Docks => s.docks_available > 0 && s.is_returning,
        })
        .collect()
}

/// The `k` filtered stations closest to `reference`, ranked 0..n-1 by
/// ascending haversine distance.
///
/// The sort is stable, so stations at identical distance keep their input
/// order. `k == 0` yields an empty result; `k` beyond the filtered count
/// yields the whole filtered set with no padding. A non-finite reference
/// coordinate is the one caller error rejected here.
pub fn k_nearest(
    reference: Point,
    stations: &[StationRecord],
    k: usize,
    mode: AvailabilityMode,
) -> Result<Vec<RankedNeighbor>> {
    if !reference.is_finite() {
        return Err(PlannerError::invalid_argument(format!(
            "reference coordinates must be finite, got ({}, {})",
            reference.lat, reference.lon
        )));
    }

    let mut candidates: Vec<(&StationRecord, f64)> = filter_stations(stations, mode)
        .into_iter()
        .map(|s| (s, haversine_km(reference, s.location())))
        .collect();

    // Vec::sort_by is stable; total_cmp keeps the comparator total even if
    // upstream coordinates were bad enough to produce a NaN distance.
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

    Ok(candidates
        .into_iter()
        .take(k)
        .enumerate()
        .map(|(rank, (station, distance_km))| RankedNeighbor {
            station: station.clone(),
            rank,
            distance_km,
        })
        .collect())
}
