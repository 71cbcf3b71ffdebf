//! Wire envelopes for success and failure responses.
//!
//! Upstream bodies are relayed verbatim under the `ticketmaster` key with
//! the upstream's own status code. Local failures are reported as small
//! structured JSON objects:
//!
//! - validation: `400 {"errors": [...]}` with the full error list
//! - missing single parameter: `400 {"error": "missing <name> parameter"}`
//! - geocode failure: `500 {"error": "geocode failure", "details": ...}`
//! - transport failure: `502 {"error": ..., "details": ...}`
//! - non-JSON upstream body: upstream status, `{"error": ..., "status_code": ...}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use eventscout_lib::{Error as LibError, UpstreamReply};

/// Structured local error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReply {
    /// HTTP status for this reply; not part of the body.
    #[serde(skip)]
    pub status: StatusCode,

    /// Short description of what went wrong.
    pub error: String,

    /// Underlying error text, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Upstream status code, only for upstream contract violations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorReply {
    fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            details: None,
            status_code: None,
        }
    }

    /// 400 for a single missing required parameter.
    pub fn missing_parameter(name: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("missing {} parameter", name),
        )
    }

    /// 500 for a failed geohash computation.
    pub fn geocode_failure(details: impl Into<String>) -> Self {
        let mut reply = Self::new(StatusCode::INTERNAL_SERVER_ERROR, "geocode failure");
        reply.details = Some(details.into());
        reply
    }

    /// 502 for a network-level upstream failure.
    pub fn bad_gateway(details: impl Into<String>) -> Self {
        let mut reply = Self::new(StatusCode::BAD_GATEWAY, "upstream request failed");
        reply.details = Some(details.into());
        reply
    }

    /// Upstream returned something that is not JSON; echo its status.
    pub fn non_json_upstream(status: u16) -> Self {
        let mut reply = Self::new(
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            "upstream returned non-JSON content",
        );
        reply.status_code = Some(status);
        reply
    }

    /// 500 for local failures with no more specific mapping.
    pub fn internal_error(details: impl Into<String>) -> Self {
        let mut reply = Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
        reply.details = Some(details.into());
        reply
    }
}

impl IntoResponse for ErrorReply {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

/// Handler-level reply: a relayed upstream body or a local error.
#[derive(Debug)]
pub enum ApiReply {
    /// Upstream JSON relayed under the `ticketmaster` envelope key,
    /// with the upstream status echoed untranslated.
    Upstream { status: StatusCode, body: Value },

    /// 400 with the exhaustive list of validation problems.
    ValidationErrors(Vec<String>),

    /// Structured local error.
    Error(ErrorReply),
}

impl ApiReply {
    /// Wrap an upstream reply for relaying.
    pub fn upstream(reply: UpstreamReply) -> Self {
        Self::Upstream {
            status: StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY),
            body: reply.body,
        }
    }
}

impl From<ErrorReply> for ApiReply {
    fn from(reply: ErrorReply) -> Self {
        Self::Error(reply)
    }
}

impl IntoResponse for ApiReply {
    fn into_response(self) -> Response {
        match self {
            Self::Upstream { status, body } => {
                (status, Json(json!({ "ticketmaster": body }))).into_response()
            }
            Self::ValidationErrors(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            Self::Error(reply) => reply.into_response(),
        }
    }
}

/// Map the outcome of an upstream call onto the wire contract.
pub fn relay(result: eventscout_lib::Result<UpstreamReply>) -> ApiReply {
    match result {
        Ok(reply) => ApiReply::upstream(reply),
        Err(LibError::Http(e)) => ErrorReply::bad_gateway(e.to_string()).into(),
        Err(LibError::NonJsonUpstream { status }) => ErrorReply::non_json_upstream(status).into(),
        Err(LibError::Geocode { message }) => ErrorReply::geocode_failure(message).into(),
        Err(other) => ErrorReply::internal_error(other.to_string()).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_body_shape() {
        let reply = ErrorReply::missing_parameter("id");
        let body = serde_json::to_value(&reply).unwrap();

        assert_eq!(body, json!({"error": "missing id parameter"}));
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn geocode_failure_includes_details() {
        let reply = ErrorReply::geocode_failure("latitude out of range");
        let body = serde_json::to_value(&reply).unwrap();

        assert_eq!(body["error"], "geocode failure");
        assert_eq!(body["details"], "latitude out of range");
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_json_upstream_echoes_status() {
        let reply = ErrorReply::non_json_upstream(503);
        let body = serde_json::to_value(&reply).unwrap();

        assert_eq!(body["status_code"], 503);
        assert_eq!(reply.status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn details_omitted_when_absent() {
        let reply = ErrorReply::missing_parameter("keyword");
        let body = serde_json::to_value(&reply).unwrap();

        assert!(body.get("details").is_none());
        assert!(body.get("status_code").is_none());
    }

    #[test]
    fn upstream_reply_preserves_status() {
        let reply = ApiReply::upstream(UpstreamReply {
            status: 404,
            body: json!({"fault": "not found"}),
        });
        let response = reply.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_errors_are_bad_request() {
        let reply = ApiReply::ValidationErrors(vec!["missing latitude".to_string()]);
        let response = reply.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn relay_maps_non_json_to_upstream_status() {
        let reply = relay(Err(LibError::NonJsonUpstream { status: 418 }));
        match reply {
            ApiReply::Error(err) => {
                assert_eq!(err.status_code, Some(418));
                assert_eq!(err.status, StatusCode::IM_A_TEAPOT);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }
}
