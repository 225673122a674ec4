//! Distance calculations on the Earth's surface.
//!
//! Uses the Haversine formula; coordinates are (lon, lat) in degrees. The
//! degree helpers size planar R-tree queries so they never miss a leg that
//! is within range in meters.

use geo::{Closest, ClosestPoint, HaversineDistance, Line, LineString, Point};

/// Haversine distance between two points in meters
pub fn haversine_distance(p1: Point, p2: Point) -> f64 {
    p1.haversine_distance(&p2)
}

/// Distance from a point to a line segment in meters
pub fn haversine_distance_to_line(point: Point, line: Line) -> f64 {
    let line_string = LineString::from(vec![line.start, line.end]);

    match line_string.closest_point(&point) {
        Closest::Intersection(p) | Closest::SinglePoint(p) => haversine_distance(point, p),
        Closest::Indeterminate => f64::INFINITY,
    }
}

/// Meters in one degree of latitude on the Haversine sphere
pub const METERS_PER_DEGREE: f64 = 111_195.0;

// Widens degree-space bounds to absorb the planar vs spherical difference
const DEGREE_MARGIN: f64 = 1.05;

/// Meters in one degree of longitude at `lat`, the shorter of the two axes.
///
/// Floored at 1% of the equator scale so polar points stay finite.
pub fn meters_per_degree_lon(lat: f64) -> f64 {
    METERS_PER_DEGREE * lat.to_radians().cos().abs().max(0.01)
}

/// Degree radius that covers `meters` in every direction around `lat`.
///
/// Scaled by the longitude axis, so it over-covers north-south. Only
/// suitable for the coarse R-tree pass.
pub fn search_radius_degrees(meters: f64, lat: f64) -> f64 {
    // Longitude degrees shrink poleward; use the narrowest latitude reached
    let reach = (lat.abs() + meters / METERS_PER_DEGREE).min(90.0);
    meters / meters_per_degree_lon(reach) * DEGREE_MARGIN
}

/// Lower bound in meters for a planar degree distance near `lat`
pub fn min_meters_for_degrees(degrees: f64, lat: f64) -> f64 {
    degrees * meters_per_degree_lon(lat) / DEGREE_MARGIN
}
