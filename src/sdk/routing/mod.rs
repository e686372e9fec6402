pub mod addresses;
pub mod directions;
pub mod error;
pub mod geocoder;
pub mod layers;
pub mod panel;
pub mod position;
pub mod provider;
pub mod service;

pub use addresses::AddressBook;
pub use directions::Directions;
pub use error::RoutingError;
pub use geocoder::Geocoder;
pub use layers::LayerSwitcher;
pub use position::{CurrentPosition, PositionSource};
pub use provider::{LocalProvider, RemoteProvider};
pub use service::RoutingProvider;

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::error::RoutingError;
    use super::service::RoutingProvider;
    use crate::sdk::mtjson::{Coordinate, LocationDescription, TripDescription};

    pub fn location(address: &str, coordinate: Coordinate) -> LocationDescription {
        LocationDescription {
            formatted_address: Some(address.to_string()),
            coordinate: Some(coordinate),
        }
    }

    /// Canned provider: answers geocodes from a fixed table and trips with a
    /// fixed result, counting every call it receives.
    #[derive(Default)]
    pub struct StubProvider {
        pub geocodes: HashMap<String, LocationDescription>,
        pub trip: TripDescription,
        pub calls: AtomicUsize,
    }

    impl StubProvider {
        pub fn with_geocodes(entries: &[(&str, Coordinate)]) -> Self {
            Self {
                geocodes: entries
                    .iter()
                    .map(|(name, coordinate)| (name.to_string(), location(name, *coordinate)))
                    .collect(),
                ..Self::default()
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RoutingProvider for StubProvider {
        fn geocode(&self, query: &str) -> Result<LocationDescription, RoutingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.geocodes
                .get(query)
                .cloned()
                .ok_or_else(|| RoutingError::NoResults(query.to_string()))
        }

        fn reverse_geocode(
            &self,
            coordinate: Coordinate,
        ) -> Result<LocationDescription, RoutingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(location(&format!("near {:?}", coordinate), coordinate))
        }

        fn trip(
            &self,
            _start: Coordinate,
            _end: Coordinate,
            _waypoints: &[Coordinate],
        ) -> Result<TripDescription, RoutingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.trip.clone())
        }
    }
}
