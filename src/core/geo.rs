use crate::domain::model::Point;

/// Earth mean radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers, using the
/// haversine formula:
///
/// ```text
/// a = sin²(Δφ/2) + cos φ1 ⋅ cos φ2 ⋅ sin²(Δλ/2)
/// d = 2R ⋅ atan2(√a, √(1−a))
/// ```
///
/// Symmetric, zero for identical points, and total over every finite
/// lat/lon pair including the poles and antipodal points.
pub fn haversine_km(a: Point, b: Point) -> f64 {
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
