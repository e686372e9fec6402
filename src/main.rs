use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use mtroute::sdk::config::RoutingConfig;
use mtroute::sdk::mtjson::{self, Coordinate};
use mtroute::sdk::routing::{panel, Directions};
use mtroute::sdk::util::{log::init_logging, rate_limit::Limiter};

/// Decode MTJSON trip documents and request trips from a routing provider
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to an MTJSON document to decode and print
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Address query to geocode as the trip start
    #[arg(long, requires = "end")]
    start: Option<String>,

    /// Address query to geocode as the trip end
    #[arg(long, requires = "start")]
    end: Option<String>,

    /// Waypoint coordinate as "x,y"; may be repeated
    #[arg(long = "via")]
    via: Vec<String>,
}

fn main() -> Result<()> {
    // Start with our custom logger
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if cli.input.is_none() && cli.start.is_none() {
        bail!("nothing to do: pass --input and/or --start/--end (see --help)");
    }

    if let Some(path) = &cli.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let trip = mtjson::read_str(&text)
            .with_context(|| format!("failed to decode {}", path.display()))?;

        print!("{}", panel::format_trip(&trip));
        println!("{}", serde_json::to_string_pretty(&trip)?);
    }

    if let (Some(start), Some(end)) = (&cli.start, &cli.end) {
        let config = RoutingConfig::from_env()?;
        let provider = config.build_provider(Limiter::default());

        let mut directions = Directions::new();
        directions.set_start(start, provider.as_ref())?;
        directions.set_end(end, provider.as_ref())?;
        for via in &cli.via {
            directions.add_waypoint(parse_coordinate(via)?);
        }

        log::info!("Routing \"{}\" -> \"{}\"", start, end);
        let trip = directions.route(provider.as_ref())?;
        let route_count = trip.routes.as_ref().map_or(0, Vec::len);
        log::info!("Received {} route(s)", route_count);

        print!("{}", panel::format_trip(&trip));
        println!("{}", serde_json::to_string_pretty(&trip)?);
    }

    Ok(())
}

fn parse_coordinate(text: &str) -> Result<Coordinate> {
    let (x, y) = text
        .split_once(',')
        .with_context(|| format!("invalid waypoint \"{}\": expected \"x,y\"", text))?;
    Ok([
        x.trim().parse().with_context(|| format!("invalid x in \"{}\"", text))?,
        y.trim().parse().with_context(|| format!("invalid y in \"{}\"", text))?,
    ])
}
