//! Record filtering by distance from an origin point

pub mod radius;
pub mod fields;

pub use radius::filter_by_radius;
pub use fields::{field_coordinates, field_distance, field_nice_distance};
