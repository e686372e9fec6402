use std::time::{Duration, Instant};

use super::error::RoutingError;
use super::service::RoutingProvider;
use crate::sdk::mtjson::{Coordinate, LocationDescription};

/// Source of the device's current coordinate (GPS, platform location
/// service, or a fixed test value).
pub trait PositionSource {
    fn current_coordinate(&self) -> Result<Coordinate, RoutingError>;
}

struct Fix {
    taken_at: Instant,
    location: LocationDescription,
}

/// Current-position control: resolves the device coordinate to an address
/// via reverse geocoding and caches the result until the TTL expires.
pub struct CurrentPosition {
    ttl: Duration,
    fix: Option<Fix>,
}

impl CurrentPosition {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, fix: None }
    }

    /// Returns the current position, reusing a cached fix younger than the
    /// TTL without touching the source or the provider.
    pub fn locate(
        &mut self,
        source: &dyn PositionSource,
        provider: &dyn RoutingProvider,
    ) -> Result<LocationDescription, RoutingError> {
        if let Some(location) = self.cached() {
            log::debug!("[CACHE HIT] current position fix is still fresh");
            return Ok(location.clone());
        }

        let coordinate = source.current_coordinate()?;
        let location = provider.reverse_geocode(coordinate)?;
        self.fix = Some(Fix {
            taken_at: Instant::now(),
            location: location.clone(),
        });
        Ok(location)
    }

    /// Non-expired cached location, if any.
    pub fn cached(&self) -> Option<&LocationDescription> {
        self.fix
            .as_ref()
            .filter(|fix| fix.taken_at.elapsed() < self.ttl)
            .map(|fix| &fix.location)
    }

    pub fn invalidate(&mut self) {
        self.fix = None;
    }
}
