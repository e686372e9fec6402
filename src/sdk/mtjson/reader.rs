use serde_json::{Map, Value};

use super::error::MtJsonError;
use super::trip::{
    Coordinate, LegDescription, LocationDescription, Measure, RouteDescription, StepDescription,
    TripDescription,
};

/// The wire dictionary. The same letter means different things at different
/// nesting levels, so each constant is scoped to the level it is read at.
mod keys {
    // top level
    pub const TRIP_ROUTES: &str = "r";
    pub const TRIP_START: &str = "s";
    pub const TRIP_END: &str = "e";
    pub const TRIP_WAYPOINTS: &str = "w";
    pub const TRIP_DETOURS: &str = "d";

    // inside a route
    pub const ROUTE_GEOMETRY: &str = "c";
    pub const ROUTE_LEGS: &str = "l";
    pub const ROUTE_SUMMARY: &str = "s";

    // inside a leg
    pub const LEG_DISTANCE: &str = "d";
    pub const LEG_DURATION: &str = "r";
    pub const LEG_START: &str = "s";
    pub const LEG_END: &str = "e";
    pub const LEG_START_ADDRESS: &str = "t";
    pub const LEG_END_ADDRESS: &str = "n";
    pub const LEG_STEPS: &str = "p";

    // inside a step
    pub const STEP_START: &str = "s";
    pub const STEP_INSTRUCTIONS: &str = "i";
    pub const STEP_MANEUVER: &str = "m";
    pub const STEP_DISTANCE: &str = "d";

    // inside a distance/duration object
    pub const MEASURE_VALUE: &str = "v";
    pub const MEASURE_TEXT: &str = "t";

    // inside a location
    pub const LOCATION_ADDRESS: &str = "n";
    pub const LOCATION_COORDINATE: &str = "c";
}

/// Parses `text` as JSON and decodes it as an MTJSON trip.
///
/// Invalid JSON is fatal and yields [`MtJsonError::Malformed`] with no
/// partial result.
pub fn read_str(text: &str) -> Result<TripDescription, MtJsonError> {
    let source: Value = serde_json::from_str(text)?;
    read(&source)
}

/// Decodes an already-parsed MTJSON value into a [`TripDescription`].
///
/// Keys absent from the source are absent from the result. A key present
/// with a wrong-typed scalar or object value is skipped; a key that must
/// hold an array (`r`, `w`, `d`, route geometry/legs, leg steps) but does
/// not is fatal. The input is never mutated.
pub fn read(source: &Value) -> Result<TripDescription, MtJsonError> {
    let mut trip = TripDescription::default();
    let Some(object) = source.as_object() else {
        return Ok(trip);
    };

    if let Some(value) = object.get(keys::TRIP_ROUTES) {
        let elements = expect_array(value, "trip routes")?;
        let mut routes = Vec::with_capacity(elements.len());
        for element in elements {
            routes.push(read_route(element)?);
        }
        trip.routes = Some(routes);
    }
    if let Some(value) = object.get(keys::TRIP_START) {
        trip.start = read_location_field(value, "trip start");
    }
    if let Some(value) = object.get(keys::TRIP_END) {
        trip.end = read_location_field(value, "trip end");
    }
    if let Some(value) = object.get(keys::TRIP_WAYPOINTS) {
        let elements = expect_array(value, "trip waypoints")?;
        trip.waypoints = Some(elements.iter().map(read_location).collect());
    }
    if let Some(value) = object.get(keys::TRIP_DETOURS) {
        // Opaque pass-through: elements are copied verbatim, never decoded.
        trip.detours = Some(expect_array(value, "trip detours")?.clone());
    }

    Ok(trip)
}

/// Inverse of [`read`]. The transport is read-only on the client side, so no
/// compact encoding is defined; this stub returns an empty object and exists
/// only to mark where the inverse mapping would live.
pub fn write(_trip: &TripDescription) -> Value {
    Value::Object(Map::new())
}

fn read_route(source: &Value) -> Result<RouteDescription, MtJsonError> {
    let mut route = RouteDescription::default();
    let Some(object) = source.as_object() else {
        // A non-object element has no keys to look up; it decodes to an
        // empty description so sequence indices stay aligned with the source.
        return Ok(route);
    };

    if let Some(value) = object.get(keys::ROUTE_SUMMARY) {
        route.summary = read_string(value, "route summary");
    }
    if let Some(value) = object.get(keys::ROUTE_GEOMETRY) {
        let elements = expect_array(value, "route geometry")?;
        // Geometry points carry no per-index meaning of their own, so a
        // malformed point is dropped rather than decoded as an empty
        // placeholder; the surviving points keep their relative order.
        route.geometry = Some(
            elements
                .iter()
                .filter_map(|element| read_coordinate(element, "route geometry point"))
                .collect(),
        );
    }
    if let Some(value) = object.get(keys::ROUTE_LEGS) {
        let elements = expect_array(value, "route legs")?;
        let mut legs = Vec::with_capacity(elements.len());
        for element in elements {
            legs.push(read_leg(element)?);
        }
        route.legs = Some(legs);
    }

    Ok(route)
}

fn read_leg(source: &Value) -> Result<LegDescription, MtJsonError> {
    let mut leg = LegDescription::default();
    let Some(object) = source.as_object() else {
        return Ok(leg);
    };

    if let Some(value) = object.get(keys::LEG_DISTANCE) {
        leg.distance = read_measure(value, "leg distance");
    }
    if let Some(value) = object.get(keys::LEG_DURATION) {
        leg.duration = read_measure(value, "leg duration");
    }
    if let Some(value) = object.get(keys::LEG_START) {
        leg.start_coordinate = read_coordinate(value, "leg start coordinate");
    }
    if let Some(value) = object.get(keys::LEG_END) {
        leg.end_coordinate = read_coordinate(value, "leg end coordinate");
    }
    if let Some(value) = object.get(keys::LEG_START_ADDRESS) {
        leg.start_address = read_string(value, "leg start address");
    }
    if let Some(value) = object.get(keys::LEG_END_ADDRESS) {
        leg.end_address = read_string(value, "leg end address");
    }
    if let Some(value) = object.get(keys::LEG_STEPS) {
        let elements = expect_array(value, "leg steps")?;
        leg.steps = Some(elements.iter().map(read_step).collect());
    }

    Ok(leg)
}

fn read_step(source: &Value) -> StepDescription {
    let mut step = StepDescription::default();
    let Some(object) = source.as_object() else {
        return step;
    };

    if let Some(value) = object.get(keys::STEP_START) {
        step.start_coordinate = read_coordinate(value, "step start coordinate");
    }
    if let Some(value) = object.get(keys::STEP_INSTRUCTIONS) {
        step.instructions = read_string(value, "step instructions");
    }
    if let Some(value) = object.get(keys::STEP_MANEUVER) {
        step.maneuver = read_string(value, "step maneuver");
    }
    if let Some(value) = object.get(keys::STEP_DISTANCE) {
        step.distance = read_measure(value, "step distance");
    }

    step
}

fn read_location(source: &Value) -> LocationDescription {
    let mut location = LocationDescription::default();
    let Some(object) = source.as_object() else {
        return location;
    };

    if let Some(value) = object.get(keys::LOCATION_ADDRESS) {
        location.formatted_address = read_string(value, "location address");
    }
    if let Some(value) = object.get(keys::LOCATION_COORDINATE) {
        location.coordinate = read_coordinate(value, "location coordinate");
    }

    location
}

/// Top-level `s`/`e` must be objects; anything else is a skipped field, not
/// an empty location.
fn read_location_field(source: &Value, context: &str) -> Option<LocationDescription> {
    if source.is_object() {
        Some(read_location(source))
    } else {
        log::debug!(
            "skipping {}: expected object, found {}",
            context,
            type_name(source)
        );
        None
    }
}

fn read_measure(source: &Value, context: &str) -> Option<Measure> {
    let object = source.as_object().or_else(|| {
        log::debug!(
            "skipping {}: expected object, found {}",
            context,
            type_name(source)
        );
        None
    })?;

    let value = object.get(keys::MEASURE_VALUE).and_then(Value::as_f64);
    let text = object.get(keys::MEASURE_TEXT).and_then(Value::as_str);
    match (value, text) {
        (Some(value), Some(text)) => Some(Measure {
            value,
            text: text.to_string(),
        }),
        _ => {
            log::debug!("skipping {}: missing or wrong-typed v/t", context);
            None
        }
    }
}

fn read_coordinate(source: &Value, context: &str) -> Option<Coordinate> {
    if let Some(pair) = source.as_array() {
        if let [x, y] = pair.as_slice() {
            if let (Some(x), Some(y)) = (x.as_f64(), y.as_f64()) {
                return Some([x, y]);
            }
        }
    }
    log::debug!(
        "skipping {}: expected [x, y] number pair, found {}",
        context,
        type_name(source)
    );
    None
}

fn read_string(source: &Value, context: &str) -> Option<String> {
    match source.as_str() {
        Some(text) => Some(text.to_string()),
        None => {
            log::debug!(
                "skipping {}: expected string, found {}",
                context,
                type_name(source)
            );
            None
        }
    }
}

fn expect_array<'a>(
    value: &'a Value,
    context: &'static str,
) -> Result<&'a Vec<Value>, MtJsonError> {
    value.as_array().ok_or(MtJsonError::UnexpectedShape {
        context,
        expected: "array",
        found: type_name(value),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_document() -> Value {
        json!({
            "r": [{
                "s": "Route A",
                "c": [[1, 2], [3, 4]],
                "l": [{
                    "d": {"v": 100, "t": "100 m"},
                    "r": {"v": 60, "t": "1 minute"},
                    "s": [1, 2],
                    "e": [3, 4],
                    "t": "Start",
                    "n": "End",
                    "p": [{
                        "s": [1, 2],
                        "i": "Go straight",
                        "m": "straight",
                        "d": {"v": 50, "t": "50 m"}
                    }]
                }]
            }],
            "s": {"n": "Origin", "c": [1, 2]},
            "e": {"n": "Destination", "c": [3, 4]},
            "w": [{"n": "WP1", "c": [2, 3]}],
            "d": [[9, 9]]
        })
    }

    #[test]
    fn reads_full_document() {
        let trip = read(&full_document()).unwrap();

        let routes = trip.routes.as_ref().unwrap();
        assert_eq!(routes[0].summary.as_deref(), Some("Route A"));
        assert_eq!(routes[0].geometry, Some(vec![[1.0, 2.0], [3.0, 4.0]]));

        let leg = &routes[0].legs.as_ref().unwrap()[0];
        assert_eq!(
            leg.distance,
            Some(Measure {
                value: 100.0,
                text: "100 m".to_string()
            })
        );
        assert_eq!(
            leg.duration,
            Some(Measure {
                value: 60.0,
                text: "1 minute".to_string()
            })
        );
        assert_eq!(leg.start_coordinate, Some([1.0, 2.0]));
        assert_eq!(leg.end_coordinate, Some([3.0, 4.0]));
        assert_eq!(leg.start_address.as_deref(), Some("Start"));
        assert_eq!(leg.end_address.as_deref(), Some("End"));

        let step = &leg.steps.as_ref().unwrap()[0];
        assert_eq!(step.instructions.as_deref(), Some("Go straight"));
        assert_eq!(step.maneuver.as_deref(), Some("straight"));
        assert_eq!(step.start_coordinate, Some([1.0, 2.0]));

        let start = trip.start.as_ref().unwrap();
        assert_eq!(start.formatted_address.as_deref(), Some("Origin"));
        assert_eq!(start.coordinate, Some([1.0, 2.0]));
        assert_eq!(
            trip.end.as_ref().unwrap().formatted_address.as_deref(),
            Some("Destination")
        );

        let waypoints = trip.waypoints.as_ref().unwrap();
        assert_eq!(waypoints[0].formatted_address.as_deref(), Some("WP1"));
        assert_eq!(waypoints[0].coordinate, Some([2.0, 3.0]));

        assert_eq!(trip.detours, Some(vec![json!([9, 9])]));
    }

    #[test]
    fn absent_keys_stay_absent() {
        let trip = read(&json!({})).unwrap();
        assert_eq!(trip, TripDescription::default());
        assert!(trip.routes.is_none());
        assert!(trip.start.is_none());
        assert!(trip.end.is_none());
        assert!(trip.waypoints.is_none());
        assert!(trip.detours.is_none());
    }

    #[test]
    fn wrong_typed_scalar_is_skipped_not_fatal() {
        let trip = read(&json!({
            "r": [{"l": [{"t": 42, "n": "End"}]}]
        }))
        .unwrap();

        let routes = trip.routes.unwrap();
        let leg = &routes[0].legs.as_ref().unwrap()[0];
        assert!(leg.start_address.is_none());
        assert_eq!(leg.end_address.as_deref(), Some("End"));
    }

    #[test]
    fn wrong_typed_location_field_is_skipped() {
        let trip = read(&json!({"s": "not an object", "e": {"n": "D"}})).unwrap();
        assert!(trip.start.is_none());
        assert_eq!(
            trip.end.unwrap().formatted_address.as_deref(),
            Some("D")
        );
    }

    #[test]
    fn preserves_sequence_order() {
        let legs: Vec<Value> = (0..4)
            .map(|i| {
                let steps: Vec<Value> = (0..3).map(|j| json!({"i": format!("step {i}.{j}")})).collect();
                json!({"t": format!("leg {i}"), "p": steps})
            })
            .collect();
        let trip = read(&json!({"r": [{"l": legs}]})).unwrap();

        let decoded = &trip.routes.unwrap()[0];
        let decoded_legs = decoded.legs.as_ref().unwrap();
        assert_eq!(decoded_legs.len(), 4);
        for (i, leg) in decoded_legs.iter().enumerate() {
            assert_eq!(leg.start_address.as_deref(), Some(format!("leg {i}").as_str()));
            let steps = leg.steps.as_ref().unwrap();
            assert_eq!(steps.len(), 3);
            for (j, step) in steps.iter().enumerate() {
                assert_eq!(
                    step.instructions.as_deref(),
                    Some(format!("step {i}.{j}").as_str())
                );
            }
        }
    }

    #[test]
    fn malformed_text_is_fatal() {
        let result = read_str("{not valid json");
        assert!(matches!(result, Err(MtJsonError::Malformed(_))));
    }

    #[test]
    fn detours_pass_through_unchanged() {
        let detours = json!([[9, 9], {"free": "form"}, "text", 7, null]);
        let trip = read(&json!({"d": detours})).unwrap();
        assert_eq!(
            trip.detours,
            Some(vec![json!([9, 9]), json!({"free": "form"}), json!("text"), json!(7), json!(null)])
        );
    }

    #[test]
    fn non_array_iteration_key_is_fatal() {
        for document in [
            json!({"r": 5}),
            json!({"w": "nope"}),
            json!({"d": {}}),
            json!({"r": [{"c": 1}]}),
            json!({"r": [{"l": "legs"}]}),
            json!({"r": [{"l": [{"p": {}}]}]}),
        ] {
            let result = read(&document);
            assert!(
                matches!(result, Err(MtJsonError::UnexpectedShape { .. })),
                "expected shape error for {document}"
            );
        }
    }

    #[test]
    fn non_object_elements_decode_empty_in_place() {
        let trip = read(&json!({"r": [42, {"s": "B"}]})).unwrap();
        let routes = trip.routes.unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0], RouteDescription::default());
        assert_eq!(routes[1].summary.as_deref(), Some("B"));
    }

    #[test]
    fn partial_measure_is_skipped() {
        let trip = read(&json!({"r": [{"l": [{"d": {"v": 100}, "r": {"t": "1 min", "v": "60"}}]}]}))
            .unwrap();
        let routes = trip.routes.unwrap();
        let leg = &routes[0].legs.as_ref().unwrap()[0];
        assert!(leg.distance.is_none());
        assert!(leg.duration.is_none());
    }

    #[test]
    fn invalid_geometry_points_are_dropped_in_order() {
        let trip = read(&json!({
            "r": [{"c": [[1, 2], "bad", [3, "four"], [5, 6, 7], [8, 9]]}]
        }))
        .unwrap();
        let routes = trip.routes.unwrap();
        assert_eq!(routes[0].geometry, Some(vec![[1.0, 2.0], [8.0, 9.0]]));
    }

    #[test]
    fn bad_coordinate_is_skipped() {
        let trip = read(&json!({"s": {"c": [1, 2, 3]}, "e": {"c": [1, "two"]}})).unwrap();
        assert!(trip.start.unwrap().coordinate.is_none());
        assert!(trip.end.unwrap().coordinate.is_none());
    }

    #[test]
    fn empty_arrays_decode_to_empty_sequences() {
        let trip = read(&json!({"r": [], "w": [], "d": []})).unwrap();
        assert_eq!(trip.routes, Some(vec![]));
        assert_eq!(trip.waypoints, Some(vec![]));
        assert_eq!(trip.detours, Some(vec![]));
    }

    #[test]
    fn input_is_not_mutated() {
        let document = full_document();
        let copy = document.clone();
        let _ = read(&document).unwrap();
        assert_eq!(document, copy);
    }

    #[test]
    fn write_is_a_stub() {
        let trip = read(&full_document()).unwrap();
        assert_eq!(write(&trip), json!({}));
    }

    #[test]
    fn serializes_with_verbose_field_names() {
        let trip = read(&full_document()).unwrap();
        let out = serde_json::to_value(&trip).unwrap();
        assert_eq!(out["routes"][0]["summary"], json!("Route A"));
        assert_eq!(out["routes"][0]["legs"][0]["startAddress"], json!("Start"));
        assert_eq!(out["start"]["formattedAddress"], json!("Origin"));
        assert_eq!(out["routes"][0]["legs"][0]["distance"]["text"], json!("100 m"));
    }
}
