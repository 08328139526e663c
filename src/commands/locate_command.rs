//! Locate command implementation
//!
//! Resolves a free-form address to a coordinate through the remote
//! geocoding service.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::geo::errors::{GeoError, GeoResult};
use crate::geocode::{self, HttpClient};
use crate::utils::logger::Logger;

/// Command for geocoding an address
pub struct LocateCommand<'a> {
    logger: &'a Logger,
    address: String,
    components: Vec<(String, String)>,
}

impl<'a> LocateCommand<'a> {
    /// Create a new locate command from CLI arguments
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let address = args.get_one::<String>("address")
            .cloned()
            .ok_or_else(|| GeoError::GeocodeFailure(
                "locating needs --address".to_string()))?;

        let components = match args.get_many::<String>("component") {
            Some(values) => values
                .map(|value| parse_component(value))
                .collect::<GeoResult<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(LocateCommand { logger, address, components })
    }
}

/// Parses a component hint in "key=value" form
fn parse_component(value: &str) -> GeoResult<(String, String)> {
    match value.split_once('=') {
        Some((key, val)) if !key.is_empty() && !val.is_empty() => {
            Ok((key.to_string(), val.to_string()))
        }
        _ => Err(GeoError::GeocodeFailure(
            format!("component '{}' must be in 'key=value' form", value))),
    }
}

impl<'a> Command for LocateCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Geocoding '{}' with {} component hints",
              self.address, self.components.len());

        let client = HttpClient::new();
        let point = geocode::locate(&client, &self.address, &self.components)?;

        self.logger.log(&format!("Located '{}' at {},{}",
                                 self.address, point.lat(), point.lng()))?;
        println!("{},{}", point.lat(), point.lng());
        Ok(())
    }
}
