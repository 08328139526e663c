//! Address geocoding through the Google geocoding API
//!
//! Thin wrapper around an external HTTP collaborator: builds the query
//! URL, fires it through a `RemoteClient`, and pulls the first result's
//! location out of the JSON body.

use log::info;
use serde_json::Value;
use url::Url;

use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::point::{Point, PointInput};
use crate::geocode::client::RemoteClient;

/// Base URL of the Google geocoding endpoint
const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Resolves an address to a point via the remote geocoder
///
/// # Arguments
/// * `client` - Transport used to reach the geocoding service
/// * `address` - Free-form address string
/// * `components` - Additional component hints, e.g. `("country", "DE")`
///
/// # Returns
/// The located point, `GeocodeFailure` if the remote call or body parsing
/// fails, or `InvalidPoint` if the response carries no usable location
pub fn locate(client: &dyn RemoteClient,
              address: &str,
              components: &[(String, String)]) -> GeoResult<Point> {
    let url = build_url(address, components)?;
    info!("Geocoding address '{}'", address);

    let response = client.get(url.as_str());
    if response.error() {
        return Err(GeoError::GeocodeFailure(
            "the geocoder call failed".to_string()));
    }

    let body: Value = serde_json::from_str(&response.content())
        .map_err(|e| GeoError::GeocodeFailure(
            format!("unreadable geocoder response: {}", e)))?;

    let location = body
        .pointer("/results/0/geometry/location")
        .cloned()
        .unwrap_or(Value::Null);

    // Some locales answer with comma decimal separators
    let lat = coordinate_string(location.get("lat"));
    let lng = coordinate_string(location.get("lng"));

    Point::make(PointInput::Mapping(vec![
        ("lat".to_string(), lat),
        ("lng".to_string(), lng),
    ]))
}

/// Builds the geocoding query URL
fn build_url(address: &str, components: &[(String, String)]) -> GeoResult<Url> {
    let mut url = Url::parse(GEOCODE_URL)
        .map_err(|e| GeoError::GeocodeFailure(format!("bad geocoder URL: {}", e)))?;

    let components: Vec<String> = components
        .iter()
        .map(|(key, value)| format!("{}:{}", key.to_lowercase(), value.to_lowercase()))
        .collect();

    url.query_pairs_mut()
        .append_pair("address", address)
        .append_pair("components", &components.join("|"))
        .append_pair("sensor", "false");

    Ok(url)
}

/// Renders a JSON coordinate as a parseable token
fn coordinate_string(value: Option<&Value>) -> String {
    let text = match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    text.replace(',', ".")
}
