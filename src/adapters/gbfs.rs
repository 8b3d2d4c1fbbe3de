use crate::domain::model::StationRecord;
use crate::domain::ports::StationSource;
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use std::collections::HashMap;

/// Fetches and merges the two GBFS documents (`station_information` and
/// `station_status`) into the flat snapshot the core consumes.
///
/// Rows are joined on `station_id`; stations that are end-of-life, not
/// installed, or missing their information row are dropped here so the core
/// never sees them.
pub struct GbfsClient {
    client: reqwest::Client,
    information_url: String,
    status_url: String,
}

/// GBFS v1 wraps every document the same way.
#[derive(Debug, Deserialize)]
struct FeedDocument<T> {
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    last_updated: Option<DateTime<Utc>>,
    data: FeedData<T>,
}

#[derive(Debug, Deserialize)]
struct FeedData<T> {
    stations: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct InformationRow {
    #[serde(deserialize_with = "de_station_id")]
    station_id: u32,
    lat: f64,
    lon: f64,
    name: Option<String>,
    #[serde(default)]
    capacity: u32,
}

#[derive(Debug, Deserialize)]
struct StatusRow {
    #[serde(deserialize_with = "de_station_id")]
    station_id: u32,
    num_bikes_available: u32,
    num_docks_available: u32,
    #[serde(default, deserialize_with = "de_flag")]
    is_renting: bool,
    #[serde(default, deserialize_with = "de_flag")]
    is_returning: bool,
    #[serde(default = "default_installed", deserialize_with = "de_flag")]
    is_installed: bool,
    status: Option<String>,
    num_bikes_available_types: Option<BikeTypes>,
}

#[derive(Debug, Deserialize)]
struct BikeTypes {
    #[serde(default)]
    mechanical: u32,
    #[serde(default)]
    ebike: u32,
}

fn default_installed() -> bool {
    true
}

/// GBFS sends `station_id` as a string in most feeds, as a number in some.
fn de_station_id<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Text(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Num(id) => Ok(id),
        Raw::Text(s) => s
            .parse()
            .map_err(|_| D::Error::custom(format!("non-numeric station_id '{}'", s))),
    }
}

/// GBFS v1 encodes booleans as 0/1 integers; v2 uses real booleans.
fn de_flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Num(i64),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => b,
        Raw::Num(n) => n != 0,
    })
}

impl GbfsClient {
    pub fn new(information_url: impl Into<String>, status_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            information_url: information_url.into(),
            status_url: status_url.into(),
        }
    }

    async fn fetch_document<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<FeedDocument<T>> {
        tracing::debug!("Fetching GBFS document: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PlannerError::feed(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(PlannerError::feed(format!(
                "{} answered HTTP {}",
                url,
                response.status()
            )));
        }

        response
            .json::<FeedDocument<T>>()
            .await
            .map_err(|e| PlannerError::feed(format!("malformed body from {}: {}", url, e)))
    }

    /// Join the two documents by station id, dropping out-of-service rows.
    fn merge(information: Vec<InformationRow>, status: Vec<StatusRow>) -> Vec<StationRecord> {
        let info_by_id: HashMap<u32, InformationRow> = information
            .into_iter()
            .map(|row| (row.station_id, row))
            .collect();

        let mut merged = Vec::with_capacity(status.len());
        for row in status {
            if !row.is_installed || row.status.as_deref() == Some("END_OF_LIFE") {
                continue;
            }
            let Some(info) = info_by_id.get(&row.station_id) else {
                tracing::debug!("Dropping status row without information: {}", row.station_id);
                continue;
            };
            let types = row.num_bikes_available_types.unwrap_or(BikeTypes {
                mechanical: row.num_bikes_available,
                ebike: 0,
            });
            merged.push(StationRecord {
                station_id: row.station_id,
                lat: info.lat,
                lon: info.lon,
                name: info.name.clone(),
                capacity: info.capacity,
                bikes_available: row.num_bikes_available,
                docks_available: row.num_docks_available,
                is_renting: row.is_renting,
                is_returning: row.is_returning,
                bikes_mechanical: types.mechanical,
                bikes_ebike: types.ebike,
            });
        }
        merged
    }
}

#[async_trait]
impl StationSource for GbfsClient {
    async fn fetch_stations(&self) -> Result<Vec<StationRecord>> {
        let information = self
            .fetch_document::<InformationRow>(&self.information_url)
            .await?;
        let status = self.fetch_document::<StatusRow>(&self.status_url).await?;

        if let Some(updated) = status.last_updated {
            tracing::debug!("Status snapshot from {}", updated);
        }

        let merged = Self::merge(information.data.stations, status.data.stations);
        tracing::info!("Merged feed snapshot: {} stations", merged.len());
        Ok(merged)
    }
}
