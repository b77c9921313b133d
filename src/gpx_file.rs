use std::io::{BufReader, Read, Write};

use failure::Error;
use gpx::{Gpx, GpxVersion, Metadata, Time, TrackSegment, Waypoint};
use log::debug;
use time::OffsetDateTime;

use crate::retime::TimedPoint;
use crate::Point;

/// One recorded position. The timestamp is whatever the recording
/// device wrote and is discarded during retiming.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub time: Option<OffsetDateTime>,
}

impl GeoPoint {
    fn from_waypoint(waypoint: &Waypoint) -> GeoPoint {
        GeoPoint {
            latitude: waypoint.point().y(),
            longitude: waypoint.point().x(),
            elevation: waypoint.elevation,
            time: waypoint.time.map(OffsetDateTime::from),
        }
    }
}

impl Point for GeoPoint {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
    fn elevation(&self) -> Option<f64> {
        self.elevation
    }
}

/// A single recorded track as read from a GPX document.
#[derive(Debug, Clone)]
pub struct Track {
    pub name: String,
    pub points: Vec<GeoPoint>,
}

#[derive(Debug, Fail)]
pub enum IngestionError {
    #[fail(display = "expected exactly one track, found {}", _0)]
    TrackCount(usize),
    #[fail(display = "track contains no points")]
    EmptyTrack,
}

/// Reads a GPX document containing exactly one track with at least one
/// point. Points of all segments are taken in order.
pub fn read_gpx<R: Read>(reader: R) -> Result<Track, Error> {
    let document = gpx::read(BufReader::new(reader))?;

    if document.tracks.len() != 1 {
        return Err(IngestionError::TrackCount(document.tracks.len()).into());
    }

    let track = &document.tracks[0];
    let points: Vec<GeoPoint> = track.segments.iter()
        .flat_map(|segment| &segment.points)
        .map(GeoPoint::from_waypoint)
        .collect();

    if points.is_empty() {
        return Err(IngestionError::EmptyTrack.into());
    }

    debug!("read {} points from track {:?}", points.len(), track.name);

    Ok(Track {
        name: track.name.clone().unwrap_or_default(),
        points,
    })
}

/// Writes a GPX 1.1 document with a single track and segment, one
/// `trkpt` per point, timestamps rendered as RFC 3339 instants.
pub fn write_gpx<W: Write>(name: &str, points: &[TimedPoint], writer: W) -> Result<(), Error> {
    let mut segment = TrackSegment::default();
    for point in points {
        let mut waypoint = Waypoint::new(geo_types::Point::new(point.longitude, point.latitude));
        waypoint.elevation = point.elevation;
        waypoint.time = Some(Time::from(point.time));
        segment.points.push(waypoint);
    }

    let mut track = gpx::Track::default();
    track.name = Some(name.to_string());
    track.segments.push(segment);

    let mut metadata = Metadata::default();
    metadata.name = Some(name.to_string());

    let mut document = Gpx::default();
    document.version = GpxVersion::Gpx11;
    document.creator = Some("gpx-retime".to_string());
    document.metadata = Some(metadata);
    document.tracks.push(track);

    gpx::write(&document, writer)?;

    Ok(())
}
