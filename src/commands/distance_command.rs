//! Distance command implementation
//!
//! Computes the great-circle distance between two coordinate strings
//! given on the command line.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::distance::{Unit, distance, nice_distance};
use crate::utils::logger::Logger;

/// Command for computing the distance between two points
pub struct DistanceCommand<'a> {
    logger: &'a Logger,
    from: String,
    to: String,
    unit: Unit,
    nice: bool,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command from CLI arguments
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let from = args.get_one::<String>("from")
            .cloned()
            .ok_or_else(|| GeoError::InvalidPoint("missing 'from' coordinate".to_string()))?;
        let to = args.get_one::<String>("to")
            .cloned()
            .ok_or_else(|| GeoError::InvalidPoint("missing 'to' coordinate".to_string()))?;

        let unit = args.get_one::<String>("unit")
            .map(|u| Unit::parse(u))
            .unwrap_or(Unit::Kilometers);

        Ok(DistanceCommand {
            logger,
            from,
            to,
            unit,
            nice: args.get_flag("nice"),
        })
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        info!("Computing distance from '{}' to '{}'", self.from, self.to);

        if self.nice {
            let result = nice_distance(self.from.as_str(), self.to.as_str(), self.unit)?;
            self.logger.log(&format!("Distance: {}", result))?;
            println!("{}", result);
        } else {
            let result = distance(self.from.as_str(), self.to.as_str(), self.unit)?;
            self.logger.log(&format!("Distance: {} {}", result, self.unit))?;
            println!("{}", result);
        }

        Ok(())
    }
}
