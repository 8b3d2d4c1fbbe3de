use crate::domain::model::{Point, TravelProfile};
use crate::domain::ports::{RawPolyline, RoutingProvider};
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// OpenRouteService directions client.
///
/// One POST per leg against `/v2/directions/{profile}/geojson`, with stairs
/// avoided. Every failure path (connect error, timeout, non-2xx, missing
/// geometry) maps to `UpstreamRoutingFailure` naming the offending leg; the
/// client never retries.
pub struct OrsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

impl OrsClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PlannerError::Config {
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn with_default_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        Self::new(base_url, api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }
}

#[async_trait]
impl RoutingProvider for OrsClient {
    async fn route(&self, from: Point, to: Point, profile: TravelProfile) -> Result<RawPolyline> {
        let url = format!("{}/v2/directions/{}/geojson", self.base_url, profile.as_str());
        // The provider wants (lon, lat) pairs.
        let body = json!({
            "coordinates": [[from.lon, from.lat], [to.lon, to.lat]],
            "options": {"avoid_features": ["steps"]},
        });

        tracing::debug!("Routing request: {} [{}]", url, profile);
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    format!("request failed: {}", e)
                };
                PlannerError::routing(from, to, profile, reason)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlannerError::routing(
                from,
                to,
                profile,
                format!("provider answered HTTP {}", status),
            ));
        }

        let directions: DirectionsResponse = response.json().await.map_err(|e| {
            PlannerError::routing(from, to, profile, format!("malformed response body: {}", e))
        })?;

        let feature = directions.features.into_iter().next().ok_or_else(|| {
            PlannerError::routing(from, to, profile, "response contains no route feature")
        })?;

        Ok(feature.geometry.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = OrsClient::with_default_timeout("https://api.example.com/", "key").unwrap();
        assert_eq!(client.base_url, "https://api.example.com");
    }

    #[test]
    fn parses_geojson_directions() {
        let raw = r#"{
            "features": [{
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-79.38, 43.65], [-79.39, 43.66]]
                },
                "properties": {}
            }]
        }"#;
        let parsed: DirectionsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.features[0].geometry.coordinates.len(), 2);
        assert_eq!(parsed.features[0].geometry.coordinates[0], [-79.38, 43.65]);
    }
}
