//! Great-circle distance and unit conversions
//!
//! Distance between two points is computed with the spherical law of
//! cosines, in miles first and converted to kilometers on demand.

use std::fmt;
use log::debug;

use crate::geo::errors::GeoResult;
use crate::geo::point::{Point, PointInput};

/// Miles to kilometers conversion factor
const MILES_TO_KILOMETERS: f64 = 1.60934;
/// Kilometers to miles conversion factor
const KILOMETERS_TO_MILES: f64 = 0.621371;

/// Distance unit for results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Kilometers,
    Miles,
}

impl Unit {
    /// Parses a unit string
    ///
    /// Only a case-insensitive `"km"` means kilometers; every other value
    /// is treated as miles. This never fails.
    pub fn parse(value: &str) -> Unit {
        if value.to_lowercase() == "km" {
            Unit::Kilometers
        } else {
            Unit::Miles
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Kilometers => write!(f, "km"),
            Unit::Miles => write!(f, "mi"),
        }
    }
}

/// Converts miles to kilometers
pub fn miles_to_kilometers(miles: f64) -> f64 {
    miles * MILES_TO_KILOMETERS
}

/// Converts kilometers to miles
pub fn kilometers_to_miles(kilometers: f64) -> f64 {
    kilometers * KILOMETERS_TO_MILES
}

/// Calculates the great-circle distance between two points
///
/// Both arguments accept anything the point factory accepts, so callers
/// can pass points, coordinate strings or pairs interchangeably.
///
/// # Arguments
/// * `a` - First point or point-like input
/// * `b` - Second point or point-like input
/// * `unit` - Unit for the result
///
/// # Returns
/// The distance in the requested unit, or `InvalidPoint` if either
/// argument cannot be turned into a point
pub fn distance(a: impl Into<PointInput>, b: impl Into<PointInput>, unit: Unit) -> GeoResult<f64> {
    let a = Point::make(a)?;
    let b = Point::make(b)?;

    let theta = a.lng() - b.lng();
    let d = a.lat().to_radians().sin() * b.lat().to_radians().sin()
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * theta.to_radians().cos();

    // Floating point can push d slightly outside acos' domain for
    // identical or antipodal points
    let d = d.clamp(-1.0, 1.0);

    let miles = d.acos().to_degrees() * 60.0 * 1.1515;
    debug!("Distance between ({}, {}) and ({}, {}): {} miles",
           a.lat(), a.lng(), b.lat(), b.lng(), miles);

    match unit {
        Unit::Kilometers => Ok(miles_to_kilometers(miles)),
        Unit::Miles => Ok(miles),
    }
}

/// Calculates the distance between two points in a human readable format
///
/// # Returns
/// A string like `"878.13 km"`
pub fn nice_distance(a: impl Into<PointInput>, b: impl Into<PointInput>, unit: Unit) -> GeoResult<String> {
    let value = distance(a, b, unit)?;
    Ok(format!("{:.2} {}", value, unit))
}
