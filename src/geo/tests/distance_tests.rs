//! Tests for distance computation and unit conversions

extern crate std;

use crate::geo::distance::{Unit, distance, nice_distance, miles_to_kilometers, kilometers_to_miles};
use crate::geo::point::Point;

#[test]
fn test_unit_parsing() {
    std::assert_eq!(Unit::parse("km"), Unit::Kilometers);
    std::assert_eq!(Unit::parse("KM"), Unit::Kilometers);
    std::assert_eq!(Unit::parse("mi"), Unit::Miles);
    // anything that is not "km" means miles
    std::assert_eq!(Unit::parse("miles"), Unit::Miles);
    std::assert_eq!(Unit::parse(""), Unit::Miles);
}

#[test]
fn test_unit_conversions() {
    std::assert_eq!(miles_to_kilometers(1.0), 1.60934);
    std::assert_eq!(kilometers_to_miles(1.0), 0.621371);
    std::assert!((miles_to_kilometers(10.0) - 16.0934).abs() < 1e-9);
}

#[test]
fn test_self_distance_is_zero() {
    let berlin = Point::make("52.5200,13.4050").unwrap();
    let d = distance(berlin, berlin, Unit::Kilometers).unwrap();
    std::assert!(d.abs() < 1e-6, "self distance was {}", d);
}

#[test]
fn test_berlin_to_paris() {
    let km = distance("52.5200,13.4050", "48.8566,2.3522", Unit::Kilometers).unwrap();
    std::assert!((km - 878.0).abs() < 5.0, "Berlin-Paris came out as {} km", km);
}

#[test]
fn test_kilometers_match_converted_miles() {
    let a = (52.5200, 13.4050);
    let b = (48.8566, 2.3522);
    let km = distance(a, b, Unit::Kilometers).unwrap();
    let mi = distance(a, b, Unit::Miles).unwrap();
    std::assert!((km - miles_to_kilometers(mi)).abs() < 1e-9);
}

#[test]
fn test_distance_coerces_point_inputs() {
    let a = Point::make((52.5200, 13.4050)).unwrap();
    let from_point = distance(a, "48.8566,2.3522", Unit::Kilometers).unwrap();
    let from_text = distance("52.5200,13.4050", "48.8566,2.3522", Unit::Kilometers).unwrap();
    std::assert_eq!(from_point, from_text);
}

#[test]
fn test_distance_rejects_invalid_input() {
    std::assert!(distance("abc,def", "48.8566,2.3522", Unit::Kilometers).is_err());
}

#[test]
fn test_antipodal_points_do_not_nan() {
    let d = distance((0.0, 0.0), (0.0, 180.0), Unit::Kilometers).unwrap();
    std::assert!(d.is_finite());
    // half the Earth's circumference, roughly
    std::assert!((d - 20000.0).abs() < 100.0, "antipodal distance was {} km", d);
}

#[test]
fn test_nice_distance_format() {
    let nice = nice_distance("52.5200,13.4050", "48.8566,2.3522", Unit::Kilometers).unwrap();
    std::assert!(nice.ends_with(" km"), "got '{}'", nice);

    let number = nice.trim_end_matches(" km");
    let decimals = number.split('.').nth(1).unwrap();
    std::assert_eq!(decimals.len(), 2, "got '{}'", nice);

    let nice_miles = nice_distance("52.5200,13.4050", "48.8566,2.3522", Unit::Miles).unwrap();
    std::assert!(nice_miles.ends_with(" mi"), "got '{}'", nice_miles);
}
