#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::path::PathBuf;

use itertools::Itertools;
use structopt::StructOpt;

mod airport;
mod config;
mod error;
mod estimate;
mod geo;

use config::Tuning;

#[derive(StructOpt)]
#[structopt(
    name = "seatback",
    about = "Flight block-time estimates and in-flight movie runtime picks"
)]
struct Args {
    /// Origin airport code (e.g. SFO)
    origin: Option<String>,
    /// Destination airport code (e.g. JFK)
    destination: Option<String>,
    #[structopt(
        short = "c",
        long = "config",
        parse(from_os_str),
        help = "TOML file overriding the recommendation tuning"
    )]
    config: Option<PathBuf>,
    #[structopt(
        short = "l",
        long = "list-airports",
        help = "Print the supported airports and exit"
    )]
    list_airports: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::from_args();

    if args.list_airports {
        for a in airport::all().sorted_by(|x, y| x.code.cmp(y.code)) {
            println!(
                "{:4} {:44} {}  {}",
                a.code,
                a.name,
                a.latlon.to_dms(),
                a.timezone
            );
        }
        return Ok(());
    }

    let (origin, destination) = match (args.origin, args.destination) {
        (Some(o), Some(d)) => (o.to_uppercase(), d.to_uppercase()),
        _ => {
            eprintln!("Expected an origin and a destination airport code (or --list-airports).");
            std::process::exit(2);
        }
    };

    let tuning = match args.config {
        Some(path) => Tuning::from_file(&path)?,
        None => Tuning::default(),
    };

    let est = estimate::estimate_flight_time(&origin, &destination)?;
    let range = estimate::recommend_duration(est.block_minutes, &tuning);

    println!(
        "{} ({}) -> {} ({})",
        est.origin.code, est.origin.name, est.destination.code, est.destination.name
    );
    println!("Distance:   {:.0} km", est.distance_km);
    println!(
        "Block time: {}h {:02}m ({} minutes)",
        est.block_minutes / 60,
        est.block_minutes % 60,
        est.block_minutes
    );
    println!(
        "Movies:     {} - {} minutes recommended",
        range.min_minutes, range.max_minutes
    );
    Ok(())
}
