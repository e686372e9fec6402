use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::json;

use super::types::GeoResponse;
use crate::sdk::mtjson::{self, Coordinate, LocationDescription, TripDescription};
use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::service::RoutingProvider;

/// Self-hosted routing instance. No API key and no throttling; the instance
/// is assumed to be ours.
pub struct LocalProvider {
    client: Client,
    base_url: String,
}

impl LocalProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap(),
            base_url,
        }
    }

    fn fetch_location(&self, url: &str, query: &str) -> Result<LocationDescription, RoutingError> {
        let response = self.client.get(url).send()?;
        let text = response.text()?;

        let resp: GeoResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse local GeoResponse. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })?;

        resp.features
            .into_iter()
            .next()
            .map(|feature| feature.into_location())
            .ok_or_else(|| RoutingError::NoResults(query.to_string()))
    }
}

impl RoutingProvider for LocalProvider {
    fn geocode(&self, query: &str) -> Result<LocationDescription, RoutingError> {
        log::debug!("[PROVIDER] Calling local geocode for query: \"{}\"", query);
        let url = format!("{}/geocode/search?text={}", self.base_url, query);
        self.fetch_location(&url, query)
    }

    fn reverse_geocode(&self, coordinate: Coordinate) -> Result<LocationDescription, RoutingError> {
        log::debug!(
            "[PROVIDER] Calling local reverse_geocode for coordinate: {:?}",
            coordinate
        );
        let url = format!(
            "{}/geocode/reverse?point.x={}&point.y={}",
            self.base_url, coordinate[0], coordinate[1]
        );
        self.fetch_location(&url, &format!("{:?}", coordinate))
    }

    fn trip(
        &self,
        start: Coordinate,
        end: Coordinate,
        waypoints: &[Coordinate],
    ) -> Result<TripDescription, RoutingError> {
        log::debug!(
            "[PROVIDER] Calling local trip for {:?} -> {:?} via {} waypoints",
            start,
            end,
            waypoints.len()
        );

        let mut coordinates = Vec::with_capacity(waypoints.len() + 2);
        coordinates.push(start);
        coordinates.extend_from_slice(waypoints);
        coordinates.push(end);

        let url = format!("{}/v1/trip", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "coordinates": coordinates }))
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            log::error!(
                "Local instance returned non-success status: {}. Body: {}",
                status,
                text
            );
            return Err(RoutingError::RawApi(text));
        }

        Ok(mtjson::read_str(&text)?)
    }
}
