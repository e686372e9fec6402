use super::error::RoutingError;
use crate::sdk::mtjson::{Coordinate, LocationDescription, TripDescription};

pub trait RoutingProvider: Send + Sync {
    /// Geocodes a free-form address query to a location.
    fn geocode(&self, query: &str) -> Result<LocationDescription, RoutingError>;

    /// Finds the nearest addressable location to a coordinate.
    fn reverse_geocode(&self, coordinate: Coordinate) -> Result<LocationDescription, RoutingError>;

    /// Requests a trip from `start` to `end`, passing through `waypoints` in
    /// order. The server answers in MTJSON; implementations return it decoded.
    fn trip(
        &self,
        start: Coordinate,
        end: Coordinate,
        waypoints: &[Coordinate],
    ) -> Result<TripDescription, RoutingError>;
}
