pub mod config;
pub mod mtjson;
pub mod routing;
pub mod util;
