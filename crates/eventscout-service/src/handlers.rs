//! Endpoint handlers.
//!
//! All handlers are single-shot: resolve parameters, validate, call the
//! upstream client, relay. Validation failures fail fast with 400 and no
//! upstream call is attempted.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use eventscout_lib::{encode_geopoint, EventSearchParams};

use crate::middleware::extract_or_generate_request_id;
use crate::params::{self, resolve_params, EventSearchQuery};
use crate::reply::{relay, ApiReply, ErrorReply};
use crate::AppState;

/// Raw form values treated as boolean true for checkbox-style fields.
const TRUTHY_TOKENS: [&str; 3] = ["on", "true", "1"];

/// Form field normalized to a boolean when present.
const AUTO_DETECT_FIELD: &str = "autoDetect";

/// Liveness check.
///
/// ```text
/// GET /health
/// {"status":"ok"}
/// ```
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Echo endpoint for the search form.
///
/// Accepts either a JSON body or form-encoded fields and returns the
/// received payload under `received`, unchanged except that the
/// checkbox-style `autoDetect` field is coerced to a boolean when it
/// arrives via a form. Performs no validation by design.
pub async fn search_echo(headers: HeaderMap, body: Bytes) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let payload = if content_type.starts_with("application/json") {
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "rejecting malformed JSON body");
                return malformed_body();
            }
        }
    } else {
        match serde_urlencoded::from_bytes::<Vec<(String, String)>>(&body) {
            Ok(fields) => form_to_payload(fields),
            Err(e) => {
                warn!(error = %e, "rejecting malformed form body");
                return malformed_body();
            }
        }
    };

    (StatusCode::OK, Json(json!({ "received": payload }))).into_response()
}

/// Parse the optional JSON body of a search request.
///
/// Search endpoints prefer a JSON object body over query parameters;
/// anything else (no body, wrong content type, invalid JSON) resolves
/// to `None` and the query string is used instead.
fn body_json(headers: &HeaderMap, body: &Bytes) -> Option<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("application/json") {
        serde_json::from_slice(body).ok()
    } else {
        None
    }
}

fn malformed_body() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "malformed request body" })),
    )
        .into_response()
}

/// Convert form fields into a JSON payload, coercing the checkbox field.
fn form_to_payload(fields: Vec<(String, String)>) -> Value {
    let mut payload = Map::new();
    for (name, value) in fields {
        let value = if name == AUTO_DETECT_FIELD {
            Value::Bool(TRUTHY_TOKENS.contains(&value.as_str()))
        } else {
            Value::String(value)
        };
        payload.insert(name, value);
    }
    Value::Object(payload)
}

/// Keyword search for events around a coordinate.
///
/// Validates the scalar fields exhaustively, encodes the coordinate
/// into a geohash, and relays the upstream search result.
pub async fn event_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> ApiReply {
    let request_id = extract_or_generate_request_id(&headers);
    let params = resolve_params(body_json(&headers, &body), query);

    let search = match EventSearchQuery::from_params(&params) {
        Ok(search) => search,
        Err(errors) => {
            info!(request_id = %request_id, errors = ?errors, "rejecting invalid event search");
            return ApiReply::ValidationErrors(errors);
        }
    };

    let geo_point = match encode_geopoint(search.longitude, search.latitude) {
        Ok(geo_point) => geo_point,
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "geohash encoding failed");
            return relay(Err(e));
        }
    };

    info!(
        request_id = %request_id,
        keyword = %search.keyword,
        geo_point = %geo_point,
        distance = search.distance,
        "handling event search"
    );

    let upstream = EventSearchParams {
        keyword: search.keyword,
        radius: search.distance,
        geo_point,
        segment_id: search.segment_id,
    };

    relay(state.client().search_events(&upstream).await)
}

/// Single event lookup; the identifier is accepted under `id` or `eventId`.
pub async fn event_details(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> ApiReply {
    let request_id = extract_or_generate_request_id(&headers);
    let params = resolve_params(body_json(&headers, &body), query);

    let Some(event_id) = params::event_id(&params) else {
        info!(request_id = %request_id, "rejecting event details without identifier");
        return ErrorReply::missing_parameter("id").into();
    };

    info!(request_id = %request_id, event_id = %event_id, "handling event details");

    relay(state.client().event_details(&event_id).await)
}

/// Venue search by keyword.
pub async fn venue_details(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> ApiReply {
    let request_id = extract_or_generate_request_id(&headers);
    let params = resolve_params(body_json(&headers, &body), query);

    let Some(keyword) = params::venue_keyword(&params) else {
        info!(request_id = %request_id, "rejecting venue details without keyword");
        return ErrorReply::missing_parameter("keyword").into();
    };

    info!(request_id = %request_id, keyword = %keyword, "handling venue details");

    relay(state.client().search_venues(&keyword).await)
}
