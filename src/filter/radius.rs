//! Radius filtering over caller-owned record sequences
//!
//! This module filters an ordered sequence of records down to those whose
//! coordinate field lies within a given great-circle distance of an origin
//! point. Records with missing or unparsable coordinates are dropped
//! silently; only the filter's own parameters fail loudly.

use log::{debug, info};

use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::point::{Point, PointInput, try_parse_point};
use crate::geo::distance::{Unit, distance};

/// Filters records by great-circle distance from an origin point
///
/// Each record's coordinate string is obtained through the `field`
/// accessor. Records whose field is absent or does not parse as a point
/// are excluded without raising. The relative order of retained records
/// is preserved.
///
/// # Arguments
/// * `items` - The ordered record sequence to filter
/// * `field` - Accessor returning the coordinate string for a record
/// * `origin` - Origin point or any point-like input
/// * `radius` - Maximum distance from the origin; must not be zero
/// * `unit` - Unit the radius is expressed in
///
/// # Returns
/// The retained records, or `InvalidFilterSpec` if the origin is not a
/// valid point or the radius is exactly zero
pub fn filter_by_radius<T, F>(
    items: Vec<T>,
    field: F,
    origin: impl Into<PointInput>,
    radius: f64,
    unit: Unit,
) -> GeoResult<Vec<T>>
where
    F: Fn(&T) -> Option<String>,
{
    let origin = Point::make(origin).map_err(|e| {
        GeoError::InvalidFilterSpec(
            format!("you must specify valid lat and lng values for the origin ({})", e))
    })?;

    // Only an exact zero is rejected
    if radius == 0.0 {
        return Err(GeoError::InvalidFilterSpec(
            "you must specify a non-zero radius value".to_string()));
    }

    info!("Filtering by radius: origin=({}, {}), radius={} {}",
          origin.lat(), origin.lng(), radius, unit);

    let total = items.len();
    let kept: Vec<T> = items
        .into_iter()
        .filter(|item| match field(item) {
            Some(value) => within_radius(&origin, &value, radius, unit),
            None => false,
        })
        .collect();

    debug!("Radius filter kept {} of {} records", kept.len(), total);
    Ok(kept)
}

/// Decides whether a coordinate string lies within the radius
///
/// Unparsable values mean exclusion, never an error.
fn within_radius(origin: &Point, value: &str, radius: f64, unit: Unit) -> bool {
    let point = match try_parse_point(value) {
        Some(point) => point,
        None => return false,
    };

    match distance(origin, point, unit) {
        Ok(d) => d <= radius,
        Err(_) => false,
    }
}
