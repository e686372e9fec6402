use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `[x, y]` pair in whatever projection the server emitted.
pub type Coordinate = [f64; 2];

/// A measured quantity with its display label, used for both distances
/// (`{value: 100, text: "100 m"}`) and durations (`{value: 60, text: "1 minute"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub value: f64,
    pub text: String,
}

/// One maneuver-level instruction within a leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_coordinate: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maneuver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Measure>,
}

/// One point-to-point segment of a route, typically between two waypoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_coordinate: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_coordinate: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepDescription>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Vec<Coordinate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<Vec<LegDescription>>,
}

/// A named place, used for trip start/end and for each waypoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

/// Top-level decoded routing result. Fields are `None` when the source
/// document lacked the corresponding key; an empty sequence means the key
/// was present and held an empty array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<RouteDescription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<LocationDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<LocationDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<LocationDescription>>,
    /// Detours are carried verbatim; the client never interprets them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detours: Option<Vec<Value>>,
}
