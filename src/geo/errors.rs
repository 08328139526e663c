//! Custom error types for geographic operations

use std::fmt;
use std::io;

/// Geo-specific error types
#[derive(Debug)]
pub enum GeoError {
    /// Malformed or non-numeric coordinate input
    InvalidPoint(String),
    /// Bad origin or zero radius supplied to the radius filter
    InvalidFilterSpec(String),
    /// The remote geocoder call failed
    GeocodeFailure(String),
    /// Malformed JSON input
    JsonError(String),
    /// I/O error
    IoError(io::Error),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidPoint(msg) => write!(f, "Invalid geo point: {}", msg),
            GeoError::InvalidFilterSpec(msg) => write!(f, "Invalid radius filter: {}", msg),
            GeoError::GeocodeFailure(msg) => write!(f, "Geocoding failed: {}", msg),
            GeoError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GeoError {}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(error: serde_json::Error) -> Self {
        GeoError::JsonError(error.to_string())
    }
}

/// Result type for geo operations
pub type GeoResult<T> = Result<T, GeoError>;
