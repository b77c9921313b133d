use crate::haversine::haversine_distance;
use crate::Point;

/// Total length of the track in meters, including the closing segment
/// from the last point back to the first (the track is assumed to be a
/// circular route).
///
/// Empty and single-point tracks have a length of 0.
pub fn total_length<T: Point>(points: &[T]) -> f64 {
    let mut distance: f64 = points.iter()
        .zip(points.iter().skip(1))
        .map(|(fix1, fix2)| haversine_distance(fix1, fix2))
        .sum();

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        distance += haversine_distance(last, first);
    }

    distance
}
