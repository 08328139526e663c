//! Filter command implementation
//!
//! Reads a JSON array of records from a file and keeps the records whose
//! coordinate field lies within a radius around an origin point.

use clap::ArgMatches;
use log::info;
use serde_json::Value;

use crate::commands::command_traits::Command;
use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::distance::Unit;
use crate::filter::filter_by_radius;
use crate::utils::logger::Logger;
use crate::utils::record_utils;

/// Command for filtering a record file by radius
pub struct FilterCommand<'a> {
    logger: &'a Logger,
    input: String,
    field: String,
    origin: String,
    radius: f64,
    unit: String,
}

impl<'a> FilterCommand<'a> {
    /// Create a new filter command from CLI arguments
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let input = args.get_one::<String>("input")
            .cloned()
            .ok_or_else(|| GeoError::InvalidFilterSpec(
                "filtering needs --input pointing at a JSON record file".to_string()))?;
        let origin = args.get_one::<String>("origin")
            .cloned()
            .ok_or_else(|| GeoError::InvalidFilterSpec(
                "filtering needs --origin with a coordinate string".to_string()))?;
        let radius = args.get_one::<String>("radius")
            .ok_or_else(|| GeoError::InvalidFilterSpec(
                "filtering needs --radius".to_string()))?
            .trim()
            .parse::<f64>()
            .map_err(|_| GeoError::InvalidFilterSpec(
                "the radius must be a numeric value".to_string()))?;

        let field = args.get_one::<String>("field")
            .cloned()
            .unwrap_or_else(|| "location".to_string());
        let unit = args.get_one::<String>("unit")
            .cloned()
            .unwrap_or_else(|| "km".to_string());

        Ok(FilterCommand { logger, input, field, origin, radius, unit })
    }
}

impl<'a> Command for FilterCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Filtering '{}' by field '{}' within {} {} of {}",
              self.input, self.field, self.radius, self.unit, self.origin);

        let records = record_utils::load_records(&self.input)?;
        let total = records.len();

        let kept: Vec<Value> = filter_by_radius(
            records,
            |record| record_utils::extract_field(record, &self.field),
            self.origin.as_str(),
            self.radius,
            Unit::parse(&self.unit),
        )?;

        self.logger.print_filter_summary(
            &self.origin, self.radius, &self.unit, total, kept.len())?;

        println!("{}", serde_json::to_string_pretty(&kept)?);
        Ok(())
    }
}
