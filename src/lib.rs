pub mod geo;
pub mod filter;
pub mod geocode;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::GeoKit;

pub use geo::{Point, PointInput, Unit, GeoError, GeoResult};
pub use geo::{distance, nice_distance, miles_to_kilometers, kilometers_to_miles, try_parse_point};
pub use filter::filter_by_radius;
pub use geocode::locate;
