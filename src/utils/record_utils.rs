//! Record loading utilities
//!
//! Helpers for reading JSON record sequences from disk and pulling
//! coordinate field values out of individual records.

use std::fs;
use log::debug;
use serde_json::Value;

use crate::geo::errors::{GeoError, GeoResult};

/// Loads an ordered sequence of records from a JSON file
///
/// The file must contain a top-level array. Record order is preserved.
pub fn load_records(path: &str) -> GeoResult<Vec<Value>> {
    let content = fs::read_to_string(path)?;
    let parsed: Value = serde_json::from_str(&content)?;

    match parsed {
        Value::Array(records) => {
            debug!("Loaded {} records from {}", records.len(), path);
            Ok(records)
        }
        _ => Err(GeoError::JsonError(
            format!("'{}' must contain a top-level JSON array of records", path))),
    }
}

/// Extracts a named field from a record as a string
///
/// Only string field values count as coordinate-representable; a missing
/// field or any other value type yields `None`.
pub fn extract_field(record: &Value, field: &str) -> Option<String> {
    match record.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}
