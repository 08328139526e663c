//! Integration tests for the geokit library

extern crate std;

use std::fs;
use std::io::Write;

use serde_json::{json, Value};

// Import crate items
use geokit::GeoKit;
use geokit::geo::{GeoError, Point, Unit};
use geokit::geo::distance::distance;
use geokit::filter::{filter_by_radius, field_coordinates, field_distance, field_nice_distance};
use geokit::geocode::{self, RemoteClient, RemoteResponse};
use geokit::utils::record_utils::extract_field;

/// Canned response for driving the geocoder without a network
struct FakeResponse {
    error: bool,
    body: String,
}

impl RemoteResponse for FakeResponse {
    fn error(&self) -> bool {
        self.error
    }

    fn content(&self) -> String {
        self.body.clone()
    }
}

/// Client answering every request with the same canned response
struct FakeClient {
    error: bool,
    body: String,
}

impl FakeClient {
    fn with_body(body: &str) -> Self {
        FakeClient { error: false, body: body.to_string() }
    }

    fn failing() -> Self {
        FakeClient { error: true, body: String::new() }
    }
}

impl RemoteClient for FakeClient {
    fn get(&self, _url: &str) -> Box<dyn RemoteResponse> {
        Box::new(FakeResponse {
            error: self.error,
            body: self.body.clone(),
        })
    }
}

/// Sample records around Berlin, including dirty ones
fn sample_records() -> Vec<Value> {
    vec![
        json!({"name": "potsdam", "location": "52.3906,13.0645"}),
        json!({"name": "no-location"}),
        json!({"name": "paris", "location": "48.8566,2.3522"}),
        json!({"name": "numeric-location", "location": 42}),
        json!({"name": "broken-location", "location": "abc,def"}),
        json!({"name": "spandau", "location": "52.5511,13.1999"}),
    ]
}

#[test]
fn test_radius_filter_keeps_nearby_records_in_order() {
    let kept = filter_by_radius(
        sample_records(),
        |record| extract_field(record, "location"),
        "52.5200,13.4050",
        50.0,
        Unit::Kilometers,
    ).unwrap();

    let names: Vec<&str> = kept.iter()
        .map(|record| record["name"].as_str().unwrap())
        .collect();

    // Paris is far away, the dirty records are dropped silently,
    // and the two nearby records keep their original order
    std::assert_eq!(names, vec!["potsdam", "spandau"]);
}

#[test]
fn test_radius_filter_boundary_is_inclusive() {
    let records = vec![json!({"location": "52.5200,13.4050"})];

    // self distance is ~0, well within any positive radius
    let kept = filter_by_radius(
        records,
        |record| extract_field(record, "location"),
        "52.5200,13.4050",
        1.0,
        Unit::Kilometers,
    ).unwrap();

    std::assert_eq!(kept.len(), 1);
}

#[test]
fn test_radius_filter_rejects_zero_radius() {
    let result = filter_by_radius(
        sample_records(),
        |record| extract_field(record, "location"),
        "52.5200,13.4050",
        0.0,
        Unit::Kilometers,
    );

    std::assert!(matches!(result, Err(GeoError::InvalidFilterSpec(_))));
}

#[test]
fn test_radius_filter_rejects_invalid_origin() {
    let result = filter_by_radius(
        sample_records(),
        |record| extract_field(record, "location"),
        "nowhere",
        50.0,
        Unit::Kilometers,
    );

    std::assert!(matches!(result, Err(GeoError::InvalidFilterSpec(_))));
}

#[test]
fn test_radius_filter_accepts_negative_radius() {
    // A negative radius passes validation and simply drops everything
    let kept = filter_by_radius(
        sample_records(),
        |record| extract_field(record, "location"),
        "52.5200,13.4050",
        -10.0,
        Unit::Kilometers,
    ).unwrap();

    std::assert!(kept.is_empty());
}

#[test]
fn test_field_helpers() {
    let berlin = Point::make("52.5200,13.4050").unwrap();

    let point = field_coordinates("48.8566,2.3522").unwrap();
    std::assert_eq!(point.lat(), 48.8566);

    let km = field_distance("48.8566,2.3522", &berlin, Unit::Kilometers).unwrap();
    std::assert!((km - 878.0).abs() < 5.0);

    let nice = field_nice_distance("48.8566,2.3522", &berlin, Unit::Kilometers).unwrap();
    std::assert!(nice.ends_with(" km"));

    std::assert!(field_coordinates("not,a,point").is_err());
}

#[test]
fn test_locate_parses_first_result() {
    let client = FakeClient::with_body(
        r#"{"results": [{"geometry": {"location": {"lat": 52.52, "lng": 13.405}}}]}"#);

    let point = geocode::locate(&client, "Berlin", &[]).unwrap();
    std::assert_eq!(point.lat(), 52.52);
    std::assert_eq!(point.lng(), 13.405);
}

#[test]
fn test_locate_handles_comma_decimal_separators() {
    let client = FakeClient::with_body(
        r#"{"results": [{"geometry": {"location": {"lat": "52,52", "lng": "13,405"}}}]}"#);

    let point = geocode::locate(&client, "Berlin", &[]).unwrap();
    std::assert_eq!(point.lat(), 52.52);
    std::assert_eq!(point.lng(), 13.405);
}

#[test]
fn test_locate_transport_failure() {
    let client = FakeClient::failing();
    let result = geocode::locate(&client, "Berlin", &[]);
    std::assert!(matches!(result, Err(GeoError::GeocodeFailure(_))));
}

#[test]
fn test_locate_unreadable_body() {
    let client = FakeClient::with_body("not json at all");
    let result = geocode::locate(&client, "Berlin", &[]);
    std::assert!(matches!(result, Err(GeoError::GeocodeFailure(_))));
}

#[test]
fn test_locate_empty_results() {
    let client = FakeClient::with_body(r#"{"results": []}"#);
    let result = geocode::locate(&client, "Berlin", &[]);
    std::assert!(matches!(result, Err(GeoError::InvalidPoint(_))));
}

#[test]
fn test_geokit_facade_distance() {
    let kit = GeoKit::new(Some("facade_distance_test.log")).unwrap();

    let km = kit.distance("52.5200,13.4050", "48.8566,2.3522", "km").unwrap();
    std::assert!((km - 878.0).abs() < 5.0);

    let nice = kit.nice_distance("52.5200,13.4050", "48.8566,2.3522", "KM").unwrap();
    std::assert!(nice.ends_with(" km"));
}

#[test]
fn test_geokit_facade_filter_records() {
    let path = std::env::temp_dir().join("geokit_filter_records.json");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(serde_json::to_string(&sample_records()).unwrap().as_bytes()).unwrap();

    let kit = GeoKit::new(Some("facade_filter_test.log")).unwrap();
    let kept = kit.filter_records(
        path.to_str().unwrap(), "location", "52.5200,13.4050", 50.0, "km").unwrap();

    std::assert_eq!(kept.len(), 2);
    std::assert_eq!(kept[0]["name"], "potsdam");
    std::assert_eq!(kept[1]["name"], "spandau");
}

#[test]
fn test_geokit_facade_locate_with_fake_client() {
    let kit = GeoKit::new(Some("facade_locate_test.log")).unwrap();
    let client = FakeClient::with_body(
        r#"{"results": [{"geometry": {"location": {"lat": "48.8566", "lng": "2.3522"}}}]}"#);

    let point = kit.locate_with(&client, "Paris", &[
        ("Country".to_string(), "FR".to_string()),
    ]).unwrap();

    std::assert_eq!(point.lat(), 48.8566);
    std::assert_eq!(point.lng(), 2.3522);
}

#[test]
fn test_distance_units_agree_across_surface() {
    let km = distance("52.5200,13.4050", "48.8566,2.3522", Unit::Kilometers).unwrap();
    let mi = distance("52.5200,13.4050", "48.8566,2.3522", Unit::Miles).unwrap();
    std::assert!((km - geokit::miles_to_kilometers(mi)).abs() < 1e-9);
}
