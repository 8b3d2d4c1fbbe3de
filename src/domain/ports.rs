use crate::domain::model::{Point, StationRecord, TravelProfile};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Raw polyline pairs as the provider sends them: (lon, lat) order.
pub type RawPolyline = Vec<[f64; 2]>;

/// Capability seam around the external directions API.
///
/// The composer only ever talks to this trait, so tests can substitute a
/// deterministic fake and never touch the network.
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Request one routed segment between two points for the given profile.
    ///
    /// Returns the provider's polyline untouched, still in (lon, lat)
    /// order; the composer owns the reversal.
    async fn route(&self, from: Point, to: Point, profile: TravelProfile) -> Result<RawPolyline>;
}

/// Capability seam around the station feed.
#[async_trait]
pub trait StationSource: Send + Sync {
    /// Fetch one merged snapshot of the feed. Snapshots are not cached;
    /// every call reflects the feed at call time.
    async fn fetch_stations(&self) -> Result<Vec<StationRecord>>;
}
