//! Reader for MTJSON, the compact single-letter-keyed JSON dialect the
//! routing server uses to ship trip results to the client.

pub mod error;
pub mod reader;
pub mod trip;

pub use error::MtJsonError;
pub use reader::{read, read_str, write};
pub use trip::{
    Coordinate, LegDescription, LocationDescription, Measure, RouteDescription, StepDescription,
    TripDescription,
};
