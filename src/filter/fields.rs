//! Field helpers for coordinate-carrying record fields
//!
//! Plain functions a host framework can hang onto its field extension
//! point: parse a field value into a point and measure it against a
//! reference point.

use crate::geo::errors::GeoResult;
use crate::geo::point::Point;
use crate::geo::distance::{Unit, distance, nice_distance};

/// Parses a field value with comma separated lat and lng into a point
pub fn field_coordinates(value: &str) -> GeoResult<Point> {
    Point::make(value)
}

/// Distance between a field's coordinates and a reference point
pub fn field_distance(value: &str, point: &Point, unit: Unit) -> GeoResult<f64> {
    distance(field_coordinates(value)?, point, unit)
}

/// Same as `field_distance`, but in a human readable format
pub fn field_nice_distance(value: &str, point: &Point, unit: Unit) -> GeoResult<String> {
    nice_distance(field_coordinates(value)?, point, unit)
}
