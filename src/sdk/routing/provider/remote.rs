use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::json;

use super::types::GeoResponse;
use crate::sdk::mtjson::{self, Coordinate, LocationDescription, TripDescription};
use crate::sdk::routing::error::{ApiErrorPayload, RoutingError};
use crate::sdk::routing::service::RoutingProvider;
use crate::sdk::util::rate_limit::Limiter;

const DEFAULT_BASE_URL: &str = "https://api.mtroute.io";

/// Hosted routing API. Every call is authenticated with the API key and
/// throttled through the shared limiter.
pub struct RemoteProvider {
    client: Client,
    api_key: String,
    base_url: String,
    limiter: Limiter,
}

impl RemoteProvider {
    pub fn new(api_key: String, limiter: Limiter) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            limiter,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn fetch_location(&self, url: &str, query: &str) -> Result<LocationDescription, RoutingError> {
        let response = self.client.get(url).send()?;
        let text = response.text()?;

        let resp: GeoResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse GeoResponse. URL: {}\nError: {}. Body: {}",
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

impl RoutingProvider for RemoteProvider {
    fn geocode(&self, query: &str) -> Result<LocationDescription, RoutingError> {
        self.limiter.wait();
        let url = format!(
            "{}/geocode/search?api_key={}&text={}",
            self.base_url, self.api_key, query
        );
        log::debug!("[PROVIDER] Calling remote geocode for query: \"{}\"", query);
        self.fetch_location(&url, query)
    }

    fn reverse_geocode(&self, coordinate: Coordinate) -> Result<LocationDescription, RoutingError> {
        self.limiter.wait();
        let url = format!(
            "{}/geocode/reverse?point.x={}&point.y={}&api_key={}",
            self.base_url, coordinate[0], coordinate[1], self.api_key
        );
        log::debug!(
            "[PROVIDER] Calling remote reverse_geocode for coordinate: {:?}",
            coordinate
        );
        self.fetch_location(&url, &format!("{:?}", coordinate))
    }

    fn trip(
        &self,
        start: Coordinate,
        end: Coordinate,
        waypoints: &[Coordinate],
    ) -> Result<TripDescription, RoutingError> {
        self.limiter.wait();
        log::debug!(
            "[PROVIDER] Calling remote trip for {:?} -> {:?} via {} waypoints",
            start,
            end,
            waypoints.len()
        );

        let mut coordinates = Vec::with_capacity(waypoints.len() + 2);
        coordinates.push(start);
        coordinates.extend_from_slice(waypoints);
        coordinates.push(end);

        let url = format!("{}/v1/trip", self.base_url);
        let body = json!({ "coordinates": coordinates });

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            // Try to parse the structured error envelope first
            if let Ok(payload) = serde_json::from_str::<ApiErrorPayload>(&text) {
                return Err(RoutingError::Api {
                    code: payload.error.code,
                    message: payload.error.message,
                });
            }
            log::error!(
                "API returned non-success status: {}. Unparseable body: {}",
                status,
                text
            );
            return Err(RoutingError::RawApi(text));
        }

        // Trip responses travel as MTJSON
        let trip = mtjson::read_str(&text).map_err(|e| {
            log::error!(
                "Failed to decode MTJSON trip. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })?;
        Ok(trip)
    }
}
