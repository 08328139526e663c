//! Geographic point type and its multi-shape constructor
//!
//! A `Point` is an immutable latitude/longitude pair in degrees. Points can
//! be built from several input shapes (two numbers, a delimited string, a
//! two-element sequence, or a lat/lng mapping), all funneled through the
//! `PointInput` union and `Point::make`.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::geo::errors::{GeoError, GeoResult};

lazy_static! {
    /// Separator pattern for coordinate strings: a comma with optional
    /// surrounding whitespace, or bare whitespace
    static ref SEPARATOR: Regex = Regex::new(r"\s*,\s*|\s+").unwrap();
}

/// A point on Earth's surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Latitude in degrees
    lat: f64,
    /// Longitude in degrees
    lng: f64,
}

/// The accepted input shapes for constructing a `Point`
///
/// Mirrors the four call forms of the coordinate factory:
/// a pair of numbers, a delimited string, an ordered two-element
/// sequence, and a key/value mapping carrying `lat` and `lng`.
#[derive(Debug, Clone)]
pub enum PointInput {
    /// Two positional numeric values: `(lat, lng)`
    Pair(f64, f64),
    /// A single string of two delimited numeric tokens, e.g. `"52.5,13.4"`
    Text(String),
    /// An ordered sequence of numeric-like tokens; must have exactly 2
    Sequence(Vec<String>),
    /// Ordered key/value pairs; `lat`/`lng` keys win over positional order
    Mapping(Vec<(String, String)>),
}

impl Point {
    /// Creates a new point from raw components
    ///
    /// # Arguments
    /// * `lat` - Latitude in degrees
    /// * `lng` - Longitude in degrees
    ///
    /// # Returns
    /// The point, or `InvalidPoint` if either component is not finite
    pub fn new(lat: f64, lng: f64) -> GeoResult<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeoError::InvalidPoint(
                format!("coordinates must be finite numbers, got lat={}, lng={}", lat, lng)));
        }
        Ok(Point { lat, lng })
    }

    /// Creates a point from any accepted input shape
    ///
    /// Dispatches on the shape of the input:
    /// 1. `make((52.5, 13.4))` - a pair of numbers
    /// 2. `make("52.5,13.4")` - a delimited string
    /// 3. `make(["52.5", "13.4"])` - a two-element sequence
    /// 4. `make(mapping with lat/lng keys)` - a keyed mapping
    ///
    /// # Returns
    /// The point, or `InvalidPoint` for any other shape or non-numeric values
    pub fn make(input: impl Into<PointInput>) -> GeoResult<Self> {
        match input.into() {
            PointInput::Pair(lat, lng) => Point::new(lat, lng),
            PointInput::Text(text) => {
                let parts: Vec<&str> = SEPARATOR
                    .split(text.trim())
                    .filter(|p| !p.is_empty())
                    .collect();
                if parts.len() != 2 {
                    return Err(GeoError::InvalidPoint(
                        format!("expected 2 coordinate values in '{}', found {}", text, parts.len())));
                }
                Point::new(parse_component(parts[0])?, parse_component(parts[1])?)
            }
            PointInput::Sequence(values) => {
                if values.len() != 2 {
                    return Err(GeoError::InvalidPoint(
                        format!("expected a sequence of 2 values, found {}", values.len())));
                }
                let lat = parse_component(values.first().map(String::as_str).unwrap_or(""))?;
                let lng = parse_component(values.last().map(String::as_str).unwrap_or(""))?;
                Point::new(lat, lng)
            }
            PointInput::Mapping(pairs) => {
                let lat = pairs.iter().find(|(k, _)| k == "lat").map(|(_, v)| v.as_str());
                let lng = pairs.iter().find(|(k, _)| k == "lng").map(|(_, v)| v.as_str());

                // lat/lng keys take priority over positional interpretation
                if let (Some(lat), Some(lng)) = (lat, lng) {
                    return Point::new(parse_component(lat)?, parse_component(lng)?);
                }

                if pairs.len() == 2 {
                    let lat = parse_component(&pairs[0].1)?;
                    let lng = parse_component(&pairs[1].1)?;
                    return Point::new(lat, lng);
                }

                Err(GeoError::InvalidPoint(
                    "mapping must contain 'lat' and 'lng' keys or exactly 2 values".to_string()))
            }
        }
    }

    /// Returns the latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude in degrees
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Alias for `lng`, kept for naming compatibility
    pub fn long(&self) -> f64 {
        self.lng()
    }
}

/// Parses a single numeric-like coordinate token
fn parse_component(value: &str) -> GeoResult<f64> {
    let parsed = value.trim().parse::<f64>()
        .map_err(|_| GeoError::InvalidPoint(
            format!("'{}' is not a numeric coordinate value", value)))?;
    if !parsed.is_finite() {
        return Err(GeoError::InvalidPoint(
            format!("'{}' is not a finite coordinate value", value)));
    }
    Ok(parsed)
}

/// Parses a point, converting any failure into `None`
///
/// This is the tolerant entry point used by the radius filter, where
/// unparsable per-item values mean exclusion rather than an error.
pub fn try_parse_point(input: impl Into<PointInput>) -> Option<Point> {
    Point::make(input).ok()
}

impl From<Point> for PointInput {
    fn from(point: Point) -> Self {
        PointInput::Pair(point.lat(), point.lng())
    }
}

impl From<(f64, f64)> for PointInput {
    fn from((lat, lng): (f64, f64)) -> Self {
        PointInput::Pair(lat, lng)
    }
}

impl From<[f64; 2]> for PointInput {
    fn from([lat, lng]: [f64; 2]) -> Self {
        PointInput::Pair(lat, lng)
    }
}

impl From<&str> for PointInput {
    fn from(text: &str) -> Self {
        PointInput::Text(text.to_string())
    }
}

impl From<String> for PointInput {
    fn from(text: String) -> Self {
        PointInput::Text(text)
    }
}

impl From<&Point> for PointInput {
    fn from(point: &Point) -> Self {
        PointInput::Pair(point.lat(), point.lng())
    }
}

impl PointInput {
    /// Maps a JSON value onto one of the accepted input shapes
    ///
    /// Strings become `Text`, arrays become `Sequence`, and objects become
    /// `Mapping` (so an object carrying `lat` and `lng` keys wins over its
    /// positional interpretation). Anything else yields an empty sequence,
    /// which fails `Point::make` with `InvalidPoint`.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => PointInput::Text(s.clone()),
            Value::Array(items) => {
                PointInput::Sequence(items.iter().map(json_token).collect())
            }
            Value::Object(map) => {
                PointInput::Mapping(
                    map.iter().map(|(k, v)| (k.clone(), json_token(v))).collect())
            }
            _ => PointInput::Sequence(Vec::new()),
        }
    }
}

/// Renders a JSON scalar as a numeric-like token
fn json_token(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
