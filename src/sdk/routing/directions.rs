use super::error::RoutingError;
use super::geocoder::Geocoder;
use super::service::RoutingProvider;
use crate::sdk::mtjson::{Coordinate, LocationDescription, TripDescription};

/// Directions control: two geocoders (start and end) plus optional
/// waypoints, driving trip requests against the routing provider.
#[derive(Debug, Default)]
pub struct Directions {
    start: Geocoder,
    end: Geocoder,
    waypoints: Vec<Coordinate>,
}

impl Directions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_start(
        &mut self,
        query: &str,
        provider: &dyn RoutingProvider,
    ) -> Result<bool, RoutingError> {
        self.start.submit(query, provider)
    }

    pub fn set_end(
        &mut self,
        query: &str,
        provider: &dyn RoutingProvider,
    ) -> Result<bool, RoutingError> {
        self.end.submit(query, provider)
    }

    pub fn add_waypoint(&mut self, coordinate: Coordinate) {
        self.waypoints.push(coordinate);
    }

    pub fn clear_waypoints(&mut self) {
        self.waypoints.clear();
    }

    pub fn start_location(&self) -> Option<&LocationDescription> {
        self.start.location()
    }

    pub fn end_location(&self) -> Option<&LocationDescription> {
        self.end.location()
    }

    /// Requests a trip between the geocoded endpoints. Both endpoints must
    /// have been set and carry coordinates.
    pub fn route(&self, provider: &dyn RoutingProvider) -> Result<TripDescription, RoutingError> {
        let start = self
            .start
            .location()
            .and_then(|location| location.coordinate)
            .ok_or_else(|| RoutingError::Generic("trip start is not set".to_string()))?;
        let end = self
            .end
            .location()
            .and_then(|location| location.coordinate)
            .ok_or_else(|| RoutingError::Generic("trip end is not set".to_string()))?;

        log::info!(
            "Requesting trip {:?} -> {:?} via {} waypoints",
            start,
            end,
            self.waypoints.len()
        );
        provider.trip(start, end, &self.waypoints)
    }
}
