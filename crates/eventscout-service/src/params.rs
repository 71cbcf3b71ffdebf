//! Request parameter resolution and validation.
//!
//! Search endpoints accept their parameters either as a JSON body or as
//! query-string fields. [`resolve_params`] collapses the two transports
//! into a single normalized map up front, so validation never needs to
//! know where a value came from. Query-string values arrive as strings
//! and are parsed to their declared types here; JSON bodies may carry
//! native numbers directly.
//!
//! Validation is exhaustive: every field is checked and every problem
//! collected before a response is produced, so a request missing both
//! coordinates reports both misses at once.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Normalized per-request parameters.
pub type Params = Map<String, Value>;

/// Collapse the two accepted transports into one parameter map.
///
/// A JSON object body wins; otherwise each query-string pair becomes a
/// string value. A JSON body that is not an object (an array, a bare
/// scalar) is ignored in favor of the query string.
pub fn resolve_params(body: Option<Value>, query: HashMap<String, String>) -> Params {
    if let Some(Value::Object(map)) = body {
        return map;
    }

    query
        .into_iter()
        .map(|(name, value)| (name, Value::String(value)))
        .collect()
}

/// Validated event search parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSearchQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in miles.
    pub distance: i64,
    pub keyword: String,
    /// Optional Discovery API segment (category) identifier.
    pub segment_id: Option<String>,
}

impl EventSearchQuery {
    /// Extract and type-check the search fields.
    ///
    /// Returns either the typed query or the full, non-empty list of
    /// field errors. Never short-circuits on the first problem.
    pub fn from_params(params: &Params) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();

        let latitude = float_field(params, "latitude", &mut errors);
        let longitude = float_field(params, "longitude", &mut errors);
        let distance = integer_field(params, "distance", &mut errors);
        let keyword = keyword_field(params, &mut errors);
        let segment_id = optional_string(params, "segmentId");

        if !errors.is_empty() {
            return Err(errors);
        }

        // All extractors succeeded when no errors were recorded.
        Ok(Self {
            latitude: latitude.unwrap_or_default(),
            longitude: longitude.unwrap_or_default(),
            distance: distance.unwrap_or_default(),
            keyword: keyword.unwrap_or_default(),
            segment_id,
        })
    }
}

/// Look up the event identifier, accepted under `id` or `eventId`.
pub fn event_id(params: &Params) -> Option<String> {
    required_string(params, "id").or_else(|| required_string(params, "eventId"))
}

/// Look up the required venue search keyword.
pub fn venue_keyword(params: &Params) -> Option<String> {
    required_string(params, "keyword")
}

fn float_field(params: &Params, name: &str, errors: &mut Vec<String>) -> Option<f64> {
    let Some(value) = params.get(name) else {
        errors.push(format!("missing {}", name));
        return None;
    };

    match coerce_f64(value) {
        Some(parsed) => Some(parsed),
        None => {
            errors.push(format!("{} must be a float", name));
            None
        }
    }
}

fn integer_field(params: &Params, name: &str, errors: &mut Vec<String>) -> Option<i64> {
    let Some(value) = params.get(name) else {
        errors.push(format!("missing {}", name));
        return None;
    };

    match coerce_i64(value) {
        Some(parsed) => Some(parsed),
        None => {
            errors.push(format!("{} must be an integer", name));
            None
        }
    }
}

fn keyword_field(params: &Params, errors: &mut Vec<String>) -> Option<String> {
    match params.get("keyword") {
        None => {
            errors.push("missing keyword".to_string());
            None
        }
        Some(Value::String(keyword)) => Some(keyword.clone()),
        Some(_) => {
            errors.push("keyword must be a string".to_string());
            None
        }
    }
}

fn required_string(params: &Params, name: &str) -> Option<String> {
    match params.get(name) {
        Some(Value::String(value)) if !value.trim().is_empty() => Some(value.clone()),
        _ => None,
    }
}

fn optional_string(params: &Params, name: &str) -> Option<String> {
    required_string(params, name)
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}
