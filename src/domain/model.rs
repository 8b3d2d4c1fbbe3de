use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate pair in degrees.
///
/// Ranges are not enforced here; callers validate before handing points to
/// the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// One merged station row from the GBFS snapshot.
///
/// Immutable once built; the ingestion adapter merges `station_information`
/// and `station_status` and drops out-of-service rows before the core ever
/// sees the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    pub station_id: u32,
    pub lat: f64,
    pub lon: f64,
    pub name: Option<String>,
    pub capacity: u32,
    pub bikes_available: u32,
    pub docks_available: u32,
    pub is_renting: bool,
    pub is_returning: bool,
    pub bikes_mechanical: u32,
    pub bikes_ebike: u32,
}

impl StationRecord {
    pub fn location(&self) -> Point {
        Point::new(self.lat, self.lon)
    }
}

/// Which availability predicate (and routing purpose) applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityMode {
    /// Stations with a free bike to pick up.
    Bikes,
    /// Stations with a free dock to drop off at.
    Docks,
}

/// A station paired with its position in the distance-sorted result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedNeighbor {
    pub station: StationRecord,
    /// 0-based rank among the filtered, distance-sorted set.
    pub rank: usize,
    pub distance_km: f64,
}

/// Travel mode passed to the routing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelProfile {
    FootWalking,
    CyclingRegular,
}

impl TravelProfile {
    /// Wire name used in the provider URL path.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelProfile::FootWalking => "foot-walking",
            TravelProfile::CyclingRegular => "cycling-regular",
        }
    }
}

impl std::fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Styling derived purely from `(rank, total)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualEncoding {
    /// `#rrggbb` hex string.
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
}

impl VisualEncoding {
    pub fn new(color: impl Into<String>, weight: f64, opacity: f64) -> Self {
        Self {
            color: color.into(),
            weight,
            opacity,
        }
    }
}

/// Composer input: one leg to route, with its styling already decided.
#[derive(Debug, Clone)]
pub struct LegSpec {
    pub from: Point,
    pub to: Point,
    pub profile: TravelProfile,
    pub encoding: VisualEncoding,
}

/// One routed segment as returned by the composer.
///
/// The polyline is in (lat, lon) order, already reversed from the
/// provider's (lon, lat) pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLeg {
    pub from: Point,
    pub to: Point,
    pub profile: TravelProfile,
    pub polyline: Vec<Point>,
    pub encoding: VisualEncoding,
}
