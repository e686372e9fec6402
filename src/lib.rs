pub mod sdk;

pub use sdk::config::RoutingConfig;
pub use sdk::mtjson::{read, read_str, MtJsonError, TripDescription};
pub use sdk::routing::addresses::AddressBook;
pub use sdk::routing::directions::Directions;
pub use sdk::routing::error::RoutingError;
pub use sdk::routing::geocoder::Geocoder;
pub use sdk::routing::layers::LayerSwitcher;
pub use sdk::routing::position::{CurrentPosition, PositionSource};
pub use sdk::routing::provider::{LocalProvider, RemoteProvider};
pub use sdk::routing::service::RoutingProvider;
pub use sdk::util::rate_limit::Limiter;
