use super::error::RoutingError;
use super::service::RoutingProvider;
use crate::sdk::mtjson::LocationDescription;

/// Address-to-location control. Holds the most recently geocoded location
/// and reports when a submitted query moved it.
#[derive(Debug, Default)]
pub struct Geocoder {
    location: Option<LocationDescription>,
}

impl Geocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geocodes `query` and stores the result as the current location.
    /// Returns `true` when the stored location changed.
    pub fn submit(
        &mut self,
        query: &str,
        provider: &dyn RoutingProvider,
    ) -> Result<bool, RoutingError> {
        let location = provider.geocode(query)?;
        let changed = self.location.as_ref() != Some(&location);
        if changed {
            log::debug!("geocoder location changed to {:?}", location);
        }
        self.location = Some(location);
        Ok(changed)
    }

    pub fn location(&self) -> Option<&LocationDescription> {
        self.location.as_ref()
    }

    pub fn clear(&mut self) {
        self.location = None;
    }
}
