use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every field has a default, so running without a
/// file (or with a partial one) targets the Toronto feed and the public
/// OpenRouteService API.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_information_url")]
    pub information_url: String,
    #[serde(default = "default_status_url")]
    pub status_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    #[serde(default = "default_routing_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_information_url() -> String {
    "https://tor.publicbikesystem.net/ube/gbfs/v1/en/station_information".to_string()
}

fn default_status_url() -> String {
    "https://tor.publicbikesystem.net/ube/gbfs/v1/en/station_status".to_string()
}

fn default_routing_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

fn default_timeout_seconds() -> u64 {
    crate::adapters::ors::DEFAULT_TIMEOUT_SECONDS
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            information_url: default_information_url(),
            status_url: default_status_url(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: default_routing_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl TomlConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| PlannerError::Config {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("feed.information_url", &self.feed.information_url)?;
        validate_url("feed.status_url", &self.feed.status_url)?;
        validate_url("routing.base_url", &self.routing.base_url)?;
        validate_range("routing.timeout_seconds", self.routing.timeout_seconds, 1, 120)?;
        Ok(())
    }
}
