use time::{Duration, OffsetDateTime};

use crate::haversine::haversine_distance;
use crate::length::total_length;
use crate::Point;

/// A track point carrying a synthesized timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub time: OffsetDateTime,
}

impl TimedPoint {
    fn new(point: &dyn Point, time: OffsetDateTime) -> TimedPoint {
        TimedPoint {
            latitude: point.latitude(),
            longitude: point.longitude(),
            elevation: point.elevation(),
            time,
        }
    }
}

impl Point for TimedPoint {
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

#[derive(Debug, Fail)]
#[fail(display = "track has zero total length, cannot apportion time by distance")]
pub struct DegenerateTrackError;

/// Discards the recorded timestamps of `points` and synthesizes new ones
/// so that the whole loop, closing segment included, takes exactly
/// `total_duration` seconds, with each point's time advancing from the
/// previous one in proportion to the distance traveled.
///
/// The first input point is not re-emitted at `start`; the first output
/// element corresponds to the second input point, and the last output
/// element is a synthetic closing point at the first input point's
/// position, timestamped `start + total_duration`. The output therefore
/// has the same length as the input.
///
/// An empty input yields an empty output. A loop of zero total length
/// (single point, or all points coincident) yields a
/// `DegenerateTrackError` instead of division-by-zero timestamps.
pub fn redistribute<T: Point>(
    points: &[T],
    start: OffsetDateTime,
    total_duration: u64,
) -> Result<Vec<TimedPoint>, DegenerateTrackError> {
    let first = match points.first() {
        Some(first) => first,
        None => return Ok(Vec::new()),
    };

    let total_distance = total_length(points);
    if !(total_distance > 0.) {
        return Err(DegenerateTrackError);
    }

    let advance = |segment_distance: f64| {
        Duration::seconds_f64(total_duration as f64 * (segment_distance / total_distance))
    };

    let mut current_time = start;
    let mut result = Vec::with_capacity(points.len());

    for (previous, point) in points.iter().zip(points.iter().skip(1)) {
        current_time += advance(haversine_distance(previous, point));
        result.push(TimedPoint::new(point, current_time));
    }

    // Close the loop back to the start point.
    let last = &points[points.len() - 1];
    current_time += advance(haversine_distance(last, first));
    result.push(TimedPoint::new(first, current_time));

    Ok(result)
}
