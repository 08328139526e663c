//! Convert command implementation
//!
//! Converts a distance value between miles and kilometers.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::distance::{miles_to_kilometers, kilometers_to_miles};
use crate::utils::logger::Logger;

/// Direction of the unit conversion
enum Conversion {
    MilesToKilometers(f64),
    KilometersToMiles(f64),
}

/// Command for converting between distance units
pub struct ConvertCommand<'a> {
    logger: &'a Logger,
    conversion: Conversion,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command from CLI arguments
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let conversion = if let Some(miles) = args.get_one::<String>("miles") {
            Conversion::MilesToKilometers(parse_value(miles)?)
        } else if let Some(kilometers) = args.get_one::<String>("kilometers") {
            Conversion::KilometersToMiles(parse_value(kilometers)?)
        } else {
            return Err(GeoError::InvalidPoint(
                "conversion needs either --miles or --kilometers".to_string()));
        };

        Ok(ConvertCommand { logger, conversion })
    }
}

/// Parses a CLI distance value
fn parse_value(value: &str) -> GeoResult<f64> {
    value.trim().parse::<f64>()
        .map_err(|_| GeoError::InvalidPoint(
            format!("'{}' is not a numeric distance value", value)))
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let (result, unit) = match self.conversion {
            Conversion::MilesToKilometers(miles) => {
                info!("Converting {} miles to kilometers", miles);
                (miles_to_kilometers(miles), "km")
            }
            Conversion::KilometersToMiles(kilometers) => {
                info!("Converting {} kilometers to miles", kilometers);
                (kilometers_to_miles(kilometers), "mi")
            }
        };

        self.logger.log(&format!("Converted: {} {}", result, unit))?;
        println!("{}", result);
        Ok(())
    }
}
