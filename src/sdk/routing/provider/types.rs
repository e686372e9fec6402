use serde::Deserialize;

use crate::sdk::mtjson::LocationDescription;

// --- Data structures for parsing geocoder responses ---

#[derive(Deserialize)]
pub struct GeoResponse {
    pub features: Vec<Feature>,
}
#[derive(Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Properties,
}
#[derive(Deserialize)]
pub struct Geometry {
    pub coordinates: [f64; 2],
}
#[derive(Deserialize, Default)]
pub struct Properties {
    pub label: Option<String>,
}

impl Feature {
    pub fn into_location(self) -> LocationDescription {
        LocationDescription {
            formatted_address: self.properties.label,
            coordinate: Some(self.geometry.coordinates),
        }
    }
}
