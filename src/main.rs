use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use failure::Error;
use log::warn;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use gpx_retime::duration::parse_duration;
use gpx_retime::gpx_file::{read_gpx, write_gpx};
use gpx_retime::retime::redistribute;

/// Rewrites the timestamps of a recorded GPX loop so that the whole lap
/// takes exactly the given duration, apportioned by distance.
#[derive(Parser)]
#[command(name = "gpx-retime", version)]
struct Cli {
    /// GPX file containing exactly one track
    gpx_file: PathBuf,

    /// Start of the retimed track, e.g. 2024-10-09T11:18:00 (UTC unless an offset is given)
    start: String,

    /// Total duration of the lap as [H:[MM:]]SS, e.g. 1:53:15
    duration: String,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let start = parse_start(&cli.start)?;
    let total_duration = parse_duration(&cli.duration)?;

    let track = match File::open(&cli.gpx_file).map_err(Error::from).and_then(read_gpx) {
        Ok(track) => track,
        Err(err) => {
            warn!("cannot read GPX file {}: {}", cli.gpx_file.display(), err);
            return Err(err);
        }
    };

    let retimed = redistribute(&track.points, start, total_duration)?;

    let stdout = io::stdout();
    write_gpx(&track.name, &retimed, stdout.lock())?;

    Ok(())
}

/// Parses an RFC 3339 instant, or a bare `YYYY-MM-DDTHH:MM:SS`
/// local-style datetime which is assumed to be UTC.
fn parse_start(text: &str) -> Result<OffsetDateTime, Error> {
    if let Ok(instant) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(instant);
    }

    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let datetime = PrimitiveDateTime::parse(text, format)?;
    Ok(datetime.assume_utc())
}
