use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use geokit::utils::logger::Logger;
use geokit::commands::{CommandFactory, GeokitCommandFactory};

fn main() {
    let matches = ClapCommand::new("GeoKit")
        .version("0.1")
        .about("Parse coordinates, measure great-circle distances and filter records by radius")
        .arg(
            Arg::new("from")
                .help("First coordinate as 'lat,lng'")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("to")
                .help("Second coordinate as 'lat,lng'")
                .required(false)
                .index(2),
        )
        .arg(
            Arg::new("unit")
                .short('u')
                .long("unit")
                .help("Distance unit ('km' or 'mi')")
                .value_name("UNIT")
                .default_value("km")
                .required(false),
        )
        .arg(
            Arg::new("nice")
                .short('n')
                .long("nice")
                .help("Format the distance for humans, e.g. '878.13 km'")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("convert")
                .short('c')
                .long("convert")
                .help("Convert a value between distance units")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("miles")
                .long("miles")
                .help("Miles value to convert to kilometers")
                .value_name("VALUE")
                .required(false),
        )
        .arg(
            Arg::new("kilometers")
                .long("kilometers")
                .help("Kilometers value to convert to miles")
                .value_name("VALUE")
                .required(false),
        )
        .arg(
            Arg::new("filter")
                .short('f')
                .long("filter")
                .help("Filter a JSON record file by radius around an origin")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("JSON file holding an array of records")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("field")
                .long("field")
                .help("Record field holding the coordinate string")
                .value_name("NAME")
                .default_value("location")
                .required(false),
        )
        .arg(
            Arg::new("origin")
                .long("origin")
                .help("Origin coordinate for the radius filter as 'lat,lng'")
                .value_name("COORDINATE")
                .required(false),
        )
        .arg(
            Arg::new("radius")
                .short('r')
                .long("radius")
                .help("Radius around the origin (non-zero)")
                .value_name("VALUE")
                .required(false),
        )
        .arg(
            Arg::new("locate")
                .short('l')
                .long("locate")
                .help("Resolve an address to a coordinate via the remote geocoder")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("address")
                .short('a')
                .long("address")
                .help("Address to geocode")
                .value_name("ADDRESS")
                .required(false),
        )
        .arg(
            Arg::new("component")
                .long("component")
                .help("Geocoder component hint as 'key=value' (repeatable)")
                .value_name("KEY=VALUE")
                .action(ArgAction::Append)
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "geokit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("geokit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = GeokitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
