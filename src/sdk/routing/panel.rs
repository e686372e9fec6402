use std::fmt::Write;

use crate::sdk::mtjson::{LegDescription, LocationDescription, TripDescription};

/// Renders a decoded trip as human-readable summary text, one route per
/// block with its legs and maneuver steps indented beneath it.
pub fn format_trip(trip: &TripDescription) -> String {
    let mut out = String::new();

    if let Some(start) = &trip.start {
        let _ = writeln!(out, "From: {}", describe_location(start));
    }
    if let Some(end) = &trip.end {
        let _ = writeln!(out, "To:   {}", describe_location(end));
    }
    if let Some(waypoints) = &trip.waypoints {
        for waypoint in waypoints {
            let _ = writeln!(out, "Via:  {}", describe_location(waypoint));
        }
    }

    match &trip.routes {
        Some(routes) if !routes.is_empty() => {
            for (index, route) in routes.iter().enumerate() {
                let summary = route.summary.as_deref().unwrap_or("(unnamed)");
                let _ = writeln!(out, "Route {}: {}", index + 1, summary);
                for leg in route.legs.iter().flatten() {
                    format_leg(&mut out, leg);
                }
            }
        }
        _ => {
            let _ = writeln!(out, "No routes.");
        }
    }

    if let Some(detours) = &trip.detours {
        if !detours.is_empty() {
            let _ = writeln!(out, "({} detour(s) applied)", detours.len());
        }
    }

    out
}

fn format_leg(out: &mut String, leg: &LegDescription) {
    let from = leg.start_address.as_deref().unwrap_or("?");
    let to = leg.end_address.as_deref().unwrap_or("?");
    let _ = write!(out, "  {} -> {}", from, to);
    if let Some(distance) = &leg.distance {
        let _ = write!(out, ", {}", distance.text);
    }
    if let Some(duration) = &leg.duration {
        let _ = write!(out, ", {}", duration.text);
    }
    let _ = writeln!(out);

    for (index, step) in leg.steps.iter().flatten().enumerate() {
        let instructions = step.instructions.as_deref().unwrap_or("(no instructions)");
        let _ = write!(out, "    {}. {}", index + 1, instructions);
        if let Some(distance) = &step.distance {
            let _ = write!(out, " ({})", distance.text);
        }
        let _ = writeln!(out);
    }
}

fn describe_location(location: &LocationDescription) -> String {
    match (&location.formatted_address, &location.coordinate) {
        (Some(address), _) => address.clone(),
        (None, Some(coordinate)) => format!("[{}, {}]", coordinate[0], coordinate[1]),
        (None, None) => "(unknown)".to_string(),
    }
}
