//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod distance_command;
pub mod convert_command;
pub mod filter_command;
pub mod locate_command;

pub use command_traits::{Command, CommandFactory};
pub use distance_command::DistanceCommand;
pub use convert_command::ConvertCommand;
pub use filter_command::FilterCommand;
pub use locate_command::LocateCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::geo::errors::GeoResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct GeokitCommandFactory;

impl GeokitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeokitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for GeokitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GeoResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("convert") {
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        } else if args.get_flag("filter") {
            Ok(Box::new(FilterCommand::new(args, logger)?))
        } else if args.get_flag("locate") {
            Ok(Box::new(LocateCommand::new(args, logger)?))
        } else {
            // Default to distance command
            Ok(Box::new(DistanceCommand::new(args, logger)?))
        }
    }
}
