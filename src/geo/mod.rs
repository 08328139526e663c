//! Geographic primitives
//!
//! This module provides the point type, its multi-shape constructor,
//! and great-circle distance computation with unit conversions.

pub mod errors;
pub mod point;
pub mod distance;

#[cfg(test)]
mod tests;

pub use errors::{GeoError, GeoResult};
pub use point::{Point, PointInput, try_parse_point};
pub use distance::{Unit, distance, nice_distance, miles_to_kilometers, kilometers_to_miles};
