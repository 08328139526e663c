use log::info;
use serde_json::Value;

use crate::geo::errors::GeoResult;
use crate::geo::point::Point;
use crate::geo::distance::{self, Unit};
use crate::filter::filter_by_radius;
use crate::geocode::{self, HttpClient, RemoteClient};
use crate::utils::logger::Logger;
use crate::utils::record_utils;

/// Main interface to the GeoKit library
pub struct GeoKit {
    logger: Logger,
}

impl GeoKit {
    /// Create a new GeoKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "geokit.log"
    ///
    /// # Returns
    /// A GeoKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> GeoResult<Self> {
        let log_path = log_file.unwrap_or("geokit.log");
        let logger = Logger::new(log_path)?;
        Ok(GeoKit { logger })
    }

    /// Compute the great-circle distance between two coordinate strings
    ///
    /// # Arguments
    /// * `from` - First coordinate, e.g. "52.5200,13.4050"
    /// * `to` - Second coordinate
    /// * `unit` - Unit string; "km" means kilometers, anything else miles
    ///
    /// # Returns
    /// The distance in the requested unit or an error
    pub fn distance(&self, from: &str, to: &str, unit: &str) -> GeoResult<f64> {
        distance::distance(from, to, Unit::parse(unit))
    }

    /// Same as `distance`, but formatted for humans, e.g. "878.13 km"
    pub fn nice_distance(&self, from: &str, to: &str, unit: &str) -> GeoResult<String> {
        distance::nice_distance(from, to, Unit::parse(unit))
    }

    /// Filter a JSON record file by radius around an origin
    ///
    /// Reads a top-level JSON array from `input_path`, keeps the records
    /// whose `field` value parses to a point within `radius` of `origin`,
    /// and returns them in their original order.
    ///
    /// # Arguments
    /// * `input_path` - Path to a JSON file with an array of records
    /// * `field` - Name of the record field holding the coordinate string
    /// * `origin` - Origin coordinate string
    /// * `radius` - Radius around the origin; must not be zero
    /// * `unit` - Unit string for the radius
    ///
    /// # Returns
    /// The retained records or an error
    pub fn filter_records(&self,
                          input_path: &str,
                          field: &str,
                          origin: &str,
                          radius: f64,
                          unit: &str) -> GeoResult<Vec<Value>> {
        let records = record_utils::load_records(input_path)?;
        let total = records.len();

        let kept = filter_by_radius(
            records,
            |record| record_utils::extract_field(record, field),
            origin,
            radius,
            Unit::parse(unit),
        )?;

        self.logger.print_filter_summary(origin, radius, unit, total, kept.len())?;
        Ok(kept)
    }

    /// Resolve an address to a point via the remote geocoder
    ///
    /// # Arguments
    /// * `address` - Free-form address string
    /// * `components` - Component hints as (key, value) pairs
    ///
    /// # Returns
    /// The located point or an error
    pub fn locate(&self, address: &str, components: &[(String, String)]) -> GeoResult<Point> {
        info!("Locating address '{}'", address);
        let client = HttpClient::new();
        self.locate_with(&client, address, components)
    }

    /// Resolve an address through a caller-supplied transport
    pub fn locate_with(&self,
                       client: &dyn RemoteClient,
                       address: &str,
                       components: &[(String, String)]) -> GeoResult<Point> {
        geocode::locate(client, address, components)
    }
}
